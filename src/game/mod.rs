//! Core Connect Four game logic: board, players, win detection and the live
//! game session.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, LegalColumns, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{has_winner, is_terminal, winner, wins_from};

/// An empty board for a fresh game.
pub fn new_game() -> Board {
    Board::new()
}
