//! Game engine for tic-tac-toe.
//!
//! The engine owns the mutable [`GameState`] and is the only mutation
//! path: moves and resets go through it, and it recomputes the derived
//! status inline after every change so status and board never disagree.

use super::rules;
use super::types::{GameState, GameStatus, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error returned when a move is rejected.
///
/// A rejected move never mutates state. The terminal front-end
/// discards these, so an illegal key press is simply ignored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index does not address a board square.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Read-only state snapshot handed to the view for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board contents.
    pub board: super::Board,
    /// The player who moves next. Meaningless once the game is over.
    pub to_move: Player,
    /// Current game status.
    pub status: GameStatus,
    /// The completed line, if the game has been won.
    pub winning_line: Option<[Position; 3]>,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given position for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square is taken and
    /// [`MoveError::GameOver`] if the game has already ended. State is
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        if self.state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.state.current_player();
        self.state.apply_move(pos, player);

        // Re-derive status from the new board before returning.
        let status = rules::evaluate(self.state.board());
        self.state.set_status(status);

        debug!(%player, position = %pos, ?status, "Move accepted");
        Ok(())
    }

    /// Makes a move addressed by board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices above 8, otherwise
    /// behaves like [`Game::make_move`].
    pub fn play_index(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.make_move(pos)
    }

    /// Resets to the initial state: empty board, X to move, in progress.
    ///
    /// Always succeeds, from any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }

    /// Rebuilds a game by replaying a recorded move sequence.
    ///
    /// # Errors
    ///
    /// Fails with the first rejected move; the moves before it are
    /// discarded along with the partial game.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in moves {
            game.make_move(pos)?;
        }
        Ok(game)
    }

    /// Returns a read-only snapshot for the view.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.state.board().clone(),
            to_move: self.state.current_player(),
            status: self.state.status(),
            winning_line: rules::winning_line(self.state.board()),
        }
    }
}
