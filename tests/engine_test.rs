//! Tests for the game engine state machine.

use tictactoe::{Game, GameStatus, MoveError, Player, Position, Square};

/// Drives a game through a move sequence, panicking on rejection.
fn play_all(game: &mut Game, moves: &[Position]) {
    for &pos in moves {
        game.make_move(pos).expect("move should be accepted");
    }
}

#[test]
fn test_new_game_initial_state() {
    let game = Game::new();
    assert_eq!(game.state().status(), GameStatus::InProgress);
    assert_eq!(game.state().current_player(), Player::X);
    assert!(game.state().board().squares().iter().all(|s| *s == Square::Empty));
    assert!(game.state().history().is_empty());
}

#[test]
fn test_x_wins_top_row() {
    // X: 0, 1, 2; O: 4, 3.
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,   // X
            Position::Center,    // O
            Position::TopCenter, // X
            Position::MiddleLeft, // O
            Position::TopRight,  // X wins
        ],
    );

    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
    let snapshot = game.snapshot();
    assert_eq!(
        snapshot.winning_line,
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // Ends at X O X / O X X / O X O - full, no line.
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,      // X
            Position::TopCenter,    // O
            Position::TopRight,     // X
            Position::MiddleLeft,   // O
            Position::Center,       // X
            Position::BottomLeft,   // O
            Position::MiddleRight,  // X
            Position::BottomRight,  // O
            Position::BottomCenter, // X
        ],
    );

    assert_eq!(game.state().status(), GameStatus::Draw);
    assert_eq!(game.snapshot().winning_line, None);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ],
    );
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));

    let before = game.state().clone();
    let result = game.make_move(Position::MiddleRight);
    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game.state(), &before);
}

#[test]
fn test_no_moves_after_draw() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::Center,
            Position::BottomLeft,
            Position::MiddleRight,
            Position::BottomRight,
            Position::BottomCenter,
        ],
    );
    assert_eq!(game.state().status(), GameStatus::Draw);

    // Every square is occupied, so the occupied check reports first.
    let before = game.state().clone();
    assert!(game.make_move(Position::Center).is_err());
    assert_eq!(game.state(), &before);
}

#[test]
fn test_occupied_square_rejected() {
    let mut game = Game::new();
    game.make_move(Position::TopLeft).unwrap();

    let before = game.state().clone();
    let result = game.make_move(Position::TopLeft);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
    assert_eq!(game.state(), &before);

    let marks = game
        .state()
        .board()
        .squares()
        .iter()
        .filter(|s| **s != Square::Empty)
        .count();
    assert_eq!(marks, 1);
}

#[test]
fn test_accepted_move_changes_exactly_one_square() {
    let mut game = Game::new();
    let before = game.state().board().clone();
    game.make_move(Position::Center).unwrap();
    let after = game.state().board();

    let mut changed = 0;
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ] {
        if before.get(pos) != after.get(pos) {
            changed += 1;
            assert_eq!(before.get(pos), Square::Empty);
            assert_eq!(after.get(pos), Square::Occupied(Player::X));
        }
    }
    assert_eq!(changed, 1);
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = Game::new();
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomLeft,
    ];

    for (k, &pos) in moves.iter().enumerate() {
        // Move k+1 (1-indexed) belongs to X when odd, O when even.
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.state().current_player(), expected);
        game.make_move(pos).unwrap();
        assert_eq!(game.state().board().get(pos), Square::Occupied(expected));
    }
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ],
    );
    assert_eq!(game.state().status(), GameStatus::Won(Player::X));

    game.reset();
    assert_eq!(game.state(), Game::new().state());
}

#[test]
fn test_play_index_maps_to_row_major_positions() {
    let mut game = Game::new();
    game.play_index(0).unwrap();
    game.play_index(4).unwrap();
    assert_eq!(
        game.state().board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(
        game.state().board().get(Position::Center),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_play_index_out_of_bounds() {
    let mut game = Game::new();
    let before = game.state().clone();
    assert_eq!(game.play_index(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(game.state(), &before);
}

#[test]
fn test_replay_reproduces_game() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ],
    );

    let replayed = Game::replay(game.state().history()).expect("history should replay");
    assert_eq!(replayed.state(), game.state());
    assert_eq!(replayed.snapshot(), game.snapshot());
}

#[test]
fn test_replay_rejects_duplicate_position() {
    let result = Game::replay(&[Position::Center, Position::Center]);
    assert!(matches!(
        result,
        Err(MoveError::SquareOccupied(Position::Center))
    ));
}
