//! Four-in-a-row detection: a localized check from the last placed piece and
//! an exhaustive scan over every window on the board. Both must agree.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Number of cells in a scoring/winning window.
pub const WINDOW: usize = 4;

/// Cell coordinates `(row, col)` of one window.
pub type Window = [(usize, usize); WINDOW];

/// Horizontal, vertical, diagonal down-right, diagonal up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Every 4-cell window on the board: 24 horizontal, 21 vertical and 12 on
/// each diagonal.
pub fn windows() -> impl Iterator<Item = Window> {
    DIRECTIONS.into_iter().flat_map(|(dr, dc)| {
        (0..ROWS).flat_map(move |row| (0..COLS).filter_map(move |col| window_at(row, col, dr, dc)))
    })
}

fn window_at(row: usize, col: usize, dr: isize, dc: isize) -> Option<Window> {
    let mut window = [(0, 0); WINDOW];
    for (i, slot) in window.iter_mut().enumerate() {
        let r = row.checked_add_signed(dr * i as isize)?;
        let c = col.checked_add_signed(dc * i as isize)?;
        if r >= ROWS || c >= COLS {
            return None;
        }
        *slot = (r, c);
    }
    Some(window)
}

/// Count `cell` pieces strictly outward from `(row, col)` in one direction.
fn count_from(board: &Board, cell: Cell, row: usize, col: usize, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while board.get_checked(r, c) == Some(cell) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check whether the piece just placed at `(row, col)` completes four in a row.
///
/// Must be called immediately after `player`'s piece was dropped at
/// `(row, col)`: the anchor cell itself is not inspected, only its neighbours.
/// Vertically only the cells below are counted since nothing can sit above
/// the piece that just landed.
pub fn wins_from(board: &Board, player: Player, row: usize, col: usize) -> bool {
    let cell = player.to_cell();
    let count = |dr, dc| count_from(board, cell, row, col, dr, dc);

    count(1, -1) + count(-1, 1) >= 3
        || count(-1, -1) + count(1, 1) >= 3
        || count(0, -1) + count(0, 1) >= 3
        || count(1, 0) >= 3
}

/// Exhaustively scan the board for four `player` pieces in a row.
pub fn has_winner(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    windows().any(|window| window.iter().all(|&(r, c)| board.get(r, c) == cell))
}

/// The player holding a four-in-a-row, if any.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Red, Player::Yellow]
        .into_iter()
        .find(|&player| has_winner(board, player))
}

/// A position is terminal when someone has won or no column is open.
pub fn is_terminal(board: &Board) -> bool {
    has_winner(board, Player::Red) || has_winner(board, Player::Yellow) || board.is_full()
}
