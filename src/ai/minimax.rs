use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SearchError;
use crate::game::{has_winner, is_terminal, Board, Player};

use super::agent::Agent;
use super::eval::{Heuristic, WindowHeuristic};
use super::random::RandomAgent;

/// Value of a position the maximizing side has already won. Dominates any
/// heuristic score.
pub const WIN_SCORE: i64 = 1_000_000_000;

/// Value of a position the minimizing side has already won.
pub const LOSS_SCORE: i64 = -WIN_SCORE;

/// Column chosen at a node (if any) and the node's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i64,
}

impl SearchResult {
    fn leaf(value: i64) -> Self {
        SearchResult {
            column: None,
            value,
        }
    }
}

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Leaves are always scored from `max_player`'s side, whichever side is to
/// move there.
pub struct Search<'a, R: Rng> {
    heuristic: &'a dyn Heuristic,
    max_player: Player,
    rng: &'a mut R,
    stats: SearchStats,
}

impl<'a, R: Rng> Search<'a, R> {
    pub fn new(heuristic: &'a dyn Heuristic, max_player: Player, rng: &'a mut R) -> Self {
        Search {
            heuristic,
            max_player,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search from the root with `max_player` to move and a full window.
    pub fn best_move(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.minimax(board, depth, i64::MIN, i64::MAX, true)
    }

    pub fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;
        let min_player = self.max_player.other();

        // Terminal check comes before the depth check
        if has_winner(board, min_player) {
            return SearchResult::leaf(LOSS_SCORE);
        }
        if has_winner(board, self.max_player) {
            return SearchResult::leaf(WIN_SCORE);
        }
        let legal = board.legal_columns();
        if legal.is_empty() {
            return SearchResult::leaf(0);
        }

        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(board, self.max_player));
        }

        let mover = if maximizing { self.max_player } else { min_player };
        let mut column = legal[self.rng.random_range(0..legal.len())];
        let mut value = if maximizing { i64::MIN } else { i64::MAX };

        for &col in &legal {
            let mut child = *board;
            child
                .drop_piece(col, mover.to_cell())
                .expect("column was listed as legal");
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing).value;

            if maximizing {
                if score > value {
                    value = score;
                    column = col;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = col;
                }
                beta = beta.min(value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            column: Some(column),
            value,
        }
    }
}

/// One-shot search with the window heuristic.
pub fn minimax<R: Rng>(
    board: &Board,
    depth: usize,
    alpha: i64,
    beta: i64,
    maximizing: bool,
    max_player: Player,
    rng: &mut R,
) -> SearchResult {
    Search::new(&WindowHeuristic, max_player, rng).minimax(board, depth, alpha, beta, maximizing)
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    fallback: RandomAgent,
    last_stats: SearchStats,
}

impl MinimaxAgent {
    /// Depth used against a human opponent.
    pub const DEFAULT_DEPTH: usize = 4;

    pub fn new(depth: usize) -> Self {
        Self::build(depth, Box::new(WindowHeuristic), StdRng::from_os_rng(), RandomAgent::new())
    }

    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self::build(
            depth,
            Box::new(WindowHeuristic),
            StdRng::seed_from_u64(seed),
            RandomAgent::with_seed(seed.wrapping_add(1)),
        )
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        Self::build(depth, heuristic, StdRng::from_os_rng(), RandomAgent::new())
    }

    fn build(depth: usize, heuristic: Box<dyn Heuristic>, rng: StdRng, fallback: RandomAgent) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            rng,
            fallback,
            last_stats: SearchStats::default(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Counters from the most recent call to `select_column`.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, board: &Board, player: Player) -> Result<usize, SearchError> {
        // A decided or full board has nothing to search
        if is_terminal(board) {
            return Err(SearchError::EmptySearchSpace);
        }

        let mut search = Search::new(self.heuristic.as_ref(), player, &mut self.rng);
        let result = search.best_move(board, self.depth);
        self.last_stats = search.stats();

        debug!(
            "minimax depth {} for {}: column {:?} value {} ({} nodes, {} cutoffs)",
            self.depth,
            player.name(),
            result.column,
            result.value,
            self.last_stats.nodes,
            self.last_stats.cutoffs
        );

        match result.column {
            Some(col) => Ok(col),
            None => {
                warn!("minimax returned no column on an open board, falling back to random");
                self.fallback.select_column(board, player)
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
