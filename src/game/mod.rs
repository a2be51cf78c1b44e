//! Tic-tac-toe domain: types, rules, and the game engine.

mod engine;
mod position;
pub mod rules;
mod types;

pub use engine::{Game, MoveError, Snapshot};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};

/// Alias for clarity at the view boundary.
pub type Mark = Player;
