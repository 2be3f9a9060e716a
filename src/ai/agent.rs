use crate::error::SearchError;
use crate::game::{Board, Player};

/// Universal interface for all computer players.
pub trait Agent {
    /// Pick a column for `player` to drop into on `board`.
    ///
    /// Returns [`SearchError::EmptySearchSpace`] when no column is open. The
    /// minimax agent also returns it on a board that is already won, since
    /// there is no position left to search. Callers stop asking once the
    /// game is over.
    fn select_column(&mut self, board: &Board, player: Player) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
