use crate::game::win::windows;
use crate::game::{Board, Player};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Sliding-window heuristic: every 4-cell window on the board is scored on
/// its own and the scores are summed, so cells shared by many windows count
/// more than once.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub const FOUR: i64 = 100;
    pub const OPEN_THREE: i64 = 10;
    pub const OPEN_TWO: i64 = 5;
    pub const OPPONENT_OPEN_THREE: i64 = -80;

    fn score_window(own: usize, opp: usize, empty: usize) -> i64 {
        if own == 4 {
            Self::FOUR
        } else if own == 3 && empty == 1 {
            Self::OPEN_THREE
        } else if own == 2 && empty == 2 {
            Self::OPEN_TWO
        } else if opp == 3 && empty == 1 {
            Self::OPPONENT_OPEN_THREE
        } else {
            0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        windows()
            .map(|window| {
                let (mut own, mut opp, mut empty) = (0, 0, 0);
                for (row, col) in window {
                    match board.get(row, col) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                Self::score_window(own, opp, empty)
            })
            .sum()
    }
}

/// Score `board` for `player` with the default window heuristic.
pub fn score(board: &Board, player: Player) -> i64 {
    WindowHeuristic.evaluate(board, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn bottom_row(cols: &[usize], player: Player) -> Board {
        let mut board = Board::new();
        for &col in cols {
            board.drop_piece(col, player.to_cell()).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(score(&board, Player::Red), 0);
        assert_eq!(score(&board, Player::Yellow), 0);
    }

    #[test]
    fn single_piece_scores_nothing() {
        let board = bottom_row(&[3], Player::Red);
        assert_eq!(score(&board, Player::Red), 0);
        assert_eq!(score(&board, Player::Yellow), 0);
    }

    #[test]
    fn open_two_scores_five() {
        let board = bottom_row(&[0, 1], Player::Red);
        assert_eq!(score(&board, Player::Red), 5);
    }

    #[test]
    fn open_three_scores_for_owner_and_against_opponent() {
        let board = bottom_row(&[0, 1, 2], Player::Red);
        // [0..4) is an open three, [1..5) an open two
        assert_eq!(score(&board, Player::Red), 15);
        assert_eq!(score(&board, Player::Yellow), -80);
    }

    #[test]
    fn four_in_a_row_scores_hundred() {
        let board = bottom_row(&[0, 1, 2, 3], Player::Red);
        // four + open three [1..5) + open two [2..6)
        assert_eq!(score(&board, Player::Red), 115);
    }

    #[test]
    fn blocked_window_scores_zero() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "RRRY...",
        ])
        .unwrap();
        // [0..4) and [1..5) both contain the Yellow piece
        assert_eq!(score(&board, Player::Red), 0);
    }

    #[test]
    fn symmetric_under_piece_swap() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut board = Board::new();
            let mut cell = Cell::Red;
            for _ in 0..rng.random_range(0..30) {
                let legal = board.legal_columns();
                let col = legal[rng.random_range(0..legal.len())];
                board.drop_piece(col, cell).unwrap();
                cell = cell.swapped();
            }
            let swapped = board.swap_pieces();
            assert_eq!(score(&board, Player::Red), score(&swapped, Player::Yellow));
            assert_eq!(score(&board, Player::Yellow), score(&swapped, Player::Red));
        }
    }

    #[test]
    fn center_piece_joins_more_windows() {
        let mut center = bottom_row(&[2], Player::Red);
        center.drop_piece(3, Cell::Red).unwrap();
        let mut edge = bottom_row(&[0], Player::Red);
        edge.drop_piece(6, Cell::Red).unwrap();
        assert!(score(&center, Player::Red) > score(&edge, Player::Red));
    }
}
