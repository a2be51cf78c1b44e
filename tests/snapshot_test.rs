//! Tests for the read-only view snapshot.

use tictactoe::{Game, GameStatus, Player, Position, Snapshot, Square};

#[test]
fn test_snapshot_reflects_engine_state() {
    let mut game = Game::new();
    game.make_move(Position::TopLeft).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(snapshot.to_move, Player::O);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(snapshot.winning_line, None);
    assert_eq!(
        snapshot.board.get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_snapshot_is_detached_from_the_game() {
    let mut game = Game::new();
    let snapshot = game.snapshot();
    game.make_move(Position::Center).unwrap();

    // The earlier snapshot still shows the empty board.
    assert!(snapshot.board.is_empty(Position::Center));
    assert!(!game.state().board().is_empty(Position::Center));
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,   // X
        Position::Center,    // O
        Position::TopCenter, // X
        Position::MiddleLeft, // O
        Position::TopRight,  // X wins
    ] {
        game.make_move(pos).unwrap();
    }

    let snapshot = game.snapshot();
    assert_eq!(snapshot.status, GameStatus::Won(Player::X));

    let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
    let decoded: Snapshot = serde_json::from_str(&json).expect("snapshot deserializes");
    assert_eq!(decoded, snapshot);
    assert_eq!(
        decoded.winning_line,
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}
