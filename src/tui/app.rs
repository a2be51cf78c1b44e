//! Application state and logic.

use crate::game::{Game, GameStatus, MoveError, Position, Snapshot};
use tracing::debug;

/// Main application state: the game plus the cursor the player steers.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// Returns a render snapshot of the game.
    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    /// Places the current player's mark at the given position.
    ///
    /// Rejected moves (occupied square, game over) are logged and
    /// dropped: a stray key press simply does nothing, the same way the
    /// original game ignored clicks on filled cells.
    pub fn place(&mut self, pos: Position) {
        match self.game.make_move(pos) {
            Ok(()) => debug!(position = %pos, "Mark placed"),
            Err(e @ (MoveError::SquareOccupied(_) | MoveError::GameOver)) => {
                debug!(position = %pos, error = %e, "Move ignored");
            }
            Err(e) => debug!(error = %e, "Move rejected"),
        }
    }

    /// Places at the cursor.
    pub fn place_at_cursor(&mut self) {
        self.place(self.cursor);
    }

    /// Restarts the game. The cursor stays where it was.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
    }

    /// Status line text: next player, winner, or draw.
    pub fn status_line(&self) -> String {
        let snapshot = self.game.snapshot();
        match snapshot.status {
            GameStatus::InProgress => format!("Next: Player {}", snapshot.to_move),
            GameStatus::Won(player) => {
                format!("Player {player} wins! Press 'r' to restart or 'q' to quit.")
            }
            GameStatus::Draw => "It's a draw! Press 'r' to restart or 'q' to quit.".to_string(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
