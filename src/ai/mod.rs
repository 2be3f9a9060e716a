mod agent;
pub mod eval;
mod greedy;
pub mod minimax;
mod random;
mod strategy;

pub use agent::Agent;
pub use eval::{score, Heuristic, WindowHeuristic};
pub use greedy::{GreedyAgent, CENTER_BONUS, CENTER_COLUMN};
pub use minimax::{MinimaxAgent, Search, SearchResult, SearchStats, LOSS_SCORE, WIN_SCORE};
pub use random::RandomAgent;
pub use strategy::{choose_move, Strategy};
