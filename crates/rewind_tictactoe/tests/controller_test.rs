//! Tests for the history-aware game controller.

use rewind_tictactoe::{
    Board, GameController, MoveError, Player, Position, Square, Status, evaluate,
};

fn play(game: &mut GameController, cells: &[usize]) {
    for &cell in cells {
        game.apply_index(cell).expect("Valid move");
    }
}

#[test]
fn test_win_scenario() {
    // X: 0, 4, 8  O: 3, 5
    let mut game = GameController::new();

    game.apply_index(0).expect("Valid move");
    assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.status().to_string(), "next player is O");

    game.apply_index(3).expect("Valid move");
    assert_eq!(game.current_board().get(Position::MiddleLeft), Square::Occupied(Player::O));

    game.apply_index(4).expect("Valid move");
    game.apply_index(5).expect("Valid move");
    game.apply_index(8).expect("Valid move");

    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.status().to_string(), "winner is X");
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );

    let before = game.clone();
    assert_eq!(game.apply_index(2), Err(MoveError::GameOver(Player::X)));
    assert_eq!(game, before);
    assert!(game.is_terminal());
}

#[test]
fn test_draw_scenario() {
    // X: 0, 1, 5, 6, 8  O: 2, 3, 4, 7
    let mut game = GameController::new();
    play(&mut game, &[0, 2, 1, 3, 5, 4, 6, 7, 8]);

    assert_eq!(game.current_step(), 9);
    assert_eq!(evaluate(game.current_board()), None);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "draw");
    assert!(game.is_terminal());
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_jump_to_start() {
    let mut game = GameController::new();
    play(&mut game, &[4, 0, 8]);

    game.jump_to(0).expect("Valid step");
    assert_eq!(game.current_board(), &Board::new());
    assert_eq!(game.status().to_string(), "next player is X");
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_branching_truncates_history() {
    for k in 0..5 {
        let mut game = GameController::new();
        play(&mut game, &[0, 1, 2, 3, 5, 4]);
        assert_eq!(game.history().len(), 7);

        game.jump_to(k).expect("Valid step");
        let free = Position::valid_moves(game.current_board())[0];
        game.apply_move(free).expect("Valid move");

        assert_eq!(game.history().len(), k + 2, "jump to {}", k);
        assert_eq!(game.current_step(), k + 1);
        assert_eq!(*game.history().latest().origin(), Some(free));
    }
}

#[test]
fn test_next_player_follows_step_parity() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7]);

    for k in 0..game.history().len() {
        game.jump_to(k).expect("Valid step");
        let expected = if k % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.next_player(), expected, "step {}", k);
    }
}

#[test]
fn test_successful_move_grows_history_by_one() {
    let mut game = GameController::new();
    for cell in [4, 0, 8, 2] {
        let len = game.history().len();
        let step = game.current_step();
        let mover = game.next_player();

        let played = game.apply_index(cell).expect("Valid move");

        assert_eq!(played, mover);
        assert_eq!(game.history().len(), len + 1);
        assert_eq!(game.current_step(), step + 1);
        let pos = Position::from_index(cell).expect("cell on board");
        assert_eq!(game.current_board().get(pos), Square::Occupied(mover));
    }
}

#[test]
fn test_history_invariant_after_branching() {
    let mut game = GameController::new();
    play(&mut game, &[0, 1, 2, 3]);
    game.jump_to(2).expect("Valid step");
    play(&mut game, &[8, 7]);

    for (k, snap) in game.history().iter().enumerate() {
        assert_eq!(*snap.move_number(), k);
        assert_eq!(snap.board().filled(), k);
    }
    assert_eq!(game.history().get(0).map(|s| *s.board()), Some(Board::new()));
}

#[test]
fn test_moves_allowed_after_jumping_back_from_win() {
    let mut game = GameController::new();
    play(&mut game, &[0, 4, 1, 3, 2]);
    assert!(game.is_terminal());

    game.jump_to(4).expect("Valid step");
    assert_eq!(game.status(), Status::NextPlayer(Player::X));
    game.apply_index(8).expect("Valid move");
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_serializes_to_json() {
    let mut game = GameController::new();
    play(&mut game, &[4]);

    let value = serde_json::to_value(&game).expect("serializable");
    assert_eq!(value["current_step"], 1);
    assert_eq!(value["next_player"], "O");
    assert_eq!(value["reverse_display"], false);

    let snapshots = value["history"]["snapshots"].as_array().expect("snapshot list");
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[1]["move_number"], 1);
    assert_eq!(snapshots[1]["origin"], "Center");
}
