//! Terminal UI for playing Connect Four against people or computer seats.

mod app;
mod game_view;

pub use app::App;
