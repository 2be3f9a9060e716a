//! # Connect Four
//!
//! Connect Four on the standard 6×7 board with three computer opponents:
//! a uniform random mover, a one-ply greedy mover and a depth-limited
//! minimax search with alpha-beta pruning over a sliding-window evaluator.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, win detection, game session
//! - [`ai`]: Agent trait, evaluator, minimax search, strategies
//! - [`arena`]: Repeated agent-vs-agent trials and their report
//! - [`ui`]: Terminal UI for interactive play
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
