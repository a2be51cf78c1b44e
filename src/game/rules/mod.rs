//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! snapshot. Rules are separated from board storage so the engine
//! and the tests can evaluate positions without owning a game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use super::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board snapshot into a game status.
///
/// A winner takes precedence over a full board. Pure: evaluating the
/// same board repeatedly yields the same status.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
