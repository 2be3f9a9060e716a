use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::game::{Board, Player};

use super::agent::Agent;
use super::eval::{Heuristic, WindowHeuristic};

/// Column that gets the tie-breaking bonus.
pub const CENTER_COLUMN: usize = 3;

/// Added to the center column's score so equal positions lean central.
pub const CENTER_BONUS: i64 = 6;

/// Starting best score; any real position scores above it.
const SCORE_FLOOR: i64 = -10_000;

/// One-ply agent: drops its own piece in each open column, scores the
/// result, and keeps the first column with the highest score. Opponent
/// replies are not considered.
pub struct GreedyAgent {
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new() -> Self {
        Self::with_heuristic(Box::new(WindowHeuristic))
    }

    pub fn with_seed(seed: u64) -> Self {
        GreedyAgent {
            heuristic: Box::new(WindowHeuristic),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_heuristic(heuristic: Box<dyn Heuristic>) -> Self {
        GreedyAgent {
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Score of dropping `player`'s piece in `col`, center bonus included.
    /// `col` must be open.
    fn score_drop(&self, board: &Board, col: usize, player: Player) -> i64 {
        let mut child = *board;
        child
            .drop_piece(col, player.to_cell())
            .expect("column was listed as legal");
        let mut score = self.heuristic.evaluate(&child, player);
        if col == CENTER_COLUMN {
            score += CENTER_BONUS;
        }
        score
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_column(&mut self, board: &Board, player: Player) -> Result<usize, SearchError> {
        let legal = board.legal_columns();
        if legal.is_empty() {
            return Err(SearchError::EmptySearchSpace);
        }

        let mut best_col = legal[self.rng.random_range(0..legal.len())];
        let mut best_score = SCORE_FLOOR;
        for &col in &legal {
            let score = self.score_drop(board, col, player);
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }
        Ok(best_col)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
