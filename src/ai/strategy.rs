use std::fmt;

use crate::error::SearchError;
use crate::game::{Board, Player};

use super::agent::Agent;
use super::greedy::GreedyAgent;
use super::minimax::MinimaxAgent;
use super::random::RandomAgent;

/// Which move-selection policy a computer player uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Greedy,
    Minimax { depth: usize },
}

impl Strategy {
    /// Build an agent for this strategy. `seed` makes its choices reproducible.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (Strategy::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
            (Strategy::Random, None) => Box::new(RandomAgent::new()),
            (Strategy::Greedy, Some(seed)) => Box::new(GreedyAgent::with_seed(seed)),
            (Strategy::Greedy, None) => Box::new(GreedyAgent::new()),
            (Strategy::Minimax { depth }, Some(seed)) => {
                Box::new(MinimaxAgent::with_seed(depth, seed))
            }
            (Strategy::Minimax { depth }, None) => Box::new(MinimaxAgent::new(depth)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Minimax { depth } => write!(f, "minimax:{depth}"),
        }
    }
}

/// Pick a column for `player` using a freshly built agent.
pub fn choose_move(board: &Board, player: Player, strategy: Strategy) -> Result<usize, SearchError> {
    strategy.build(None).select_column(board, player)
}
