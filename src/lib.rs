//! Tic-tac-toe: a 3x3 board, two players, win/draw detection, restart.
//!
//! # Architecture
//!
//! - **Rules** ([`game::rules`]): pure evaluation of a board snapshot -
//!   winner, winning line, draw.
//! - **Engine** ([`Game`]): owns the mutable state and the two
//!   transitions, making a move and resetting. Status is re-derived from
//!   the board inside every mutation, never stored independently.
//! - **View** ([`tui`]): ratatui front-end that renders [`Snapshot`]s and
//!   feeds key presses back into the engine.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.make_move(Position::TopLeft)?;   // X
//! game.make_move(Position::Center)?;    // O
//! assert_eq!(game.state().status(), GameStatus::InProgress);
//! assert_eq!(game.state().current_player(), Player::X);
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
pub mod game;
pub mod tui;

pub use cli::Cli;
pub use game::{
    Board, Game, GameState, GameStatus, Mark, MoveError, Player, Position, Snapshot, Square,
};
