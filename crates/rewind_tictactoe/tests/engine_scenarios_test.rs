//! End-to-end scenarios for the game engine.

use rewind_tictactoe::{
    Board, GameEngine, GameError, GameStatus, InvalidMove, MoveDescription, MoveOrder, Player,
    Position, Square, describe_move,
};

fn play_all(engine: &mut GameEngine, cells: &[usize]) {
    for cell in cells {
        engine.play_move(*cell).expect("legal move");
    }
}

#[test]
fn test_first_move_on_empty_board() {
    let mut engine = GameEngine::new();
    engine.play_move(0).expect("legal move");

    assert_eq!(engine.current_board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(engine.current_move(), 1);
    assert_eq!(engine.status_text(), "Next Player: O");
}

#[test]
fn test_column_win_ends_game() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 3, 2, 6]);

    let win = engine.winner().expect("X completed the left column");
    assert_eq!(win.player, Player::X);
    assert_eq!(win.line.indices(), [0, 3, 6]);
    assert_eq!(engine.status_text(), "Winner: X");

    let before = engine.clone();
    for cell in [4, 5, 7, 8] {
        assert_eq!(
            engine.play_move(cell),
            Err(GameError::InvalidMove(InvalidMove::GameDecided))
        );
    }
    assert_eq!(engine, before);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = GameEngine::new();
    // X O X / X O O / O X X
    play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.winner(), None);
    assert_eq!(engine.status(), GameStatus::Draw);
    assert_eq!(engine.status_text(), "Draw");
    assert!(engine.is_decided());
}

#[test]
fn test_jump_to_start_keeps_history_until_next_play() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 0, 8]);

    engine.jump_to(0).expect("in range");
    assert!(engine.current_board().is_blank());
    assert_eq!(engine.history().len(), 4);
    assert_eq!(engine.status_text(), "Next Player: X");

    engine.play_move(2).expect("legal move");
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.current_move(), 1);
    assert_eq!(
        engine.history().boards(),
        &[Board::new(), Board::new().with_mark(Position::TopRight, Player::X)]
    );
}

#[test]
fn test_branch_truncation_length() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 2, 3, 4]);

    for m in [3, 1, 0] {
        let mut branched = engine.clone();
        branched.jump_to(m).expect("in range");
        let cell = Position::valid_moves(branched.current_board())[0].to_index();
        branched.play_move(cell).expect("legal move");

        assert_eq!(branched.history().len(), m + 2);
        assert_eq!(&branched.history().boards()[..=m], &engine.history().boards()[..=m]);
    }
}

#[test]
fn test_jumping_back_reopens_a_won_game() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 3, 2, 6]);
    assert!(engine.is_decided());

    engine.jump_to(4).expect("in range");
    assert!(!engine.is_decided());
    engine.play_move(8).expect("legal move");
    assert_eq!(engine.history().len(), 6);
    assert_eq!(engine.winner(), None);
}

#[test]
fn test_turns_alternate_through_history() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 0, 8, 2, 1]);

    for (k, board) in engine.history().iter().enumerate() {
        assert_eq!(board.count(Player::X), k.div_ceil(2));
        assert_eq!(board.count(Player::O), k / 2);
    }
}

#[test]
fn test_move_list_labels() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[4, 2]);

    let labels: Vec<String> = engine
        .moves(MoveOrder::Ascending)
        .expect("valid history")
        .iter()
        .map(|entry| entry.description.to_string())
        .collect();
    assert_eq!(
        labels,
        vec!["Go to Game Start", "Go to Move #1 (2, 2)", "Go to Move #2 (3, 1)"]
    );

    assert_eq!(
        describe_move(engine.history(), 2),
        Ok(MoveDescription::Move {
            number: 2,
            position: Position::TopRight
        })
    );
}

#[test]
fn test_status_serializes_with_winning_line() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[0, 1, 3, 2, 6]);

    let json = serde_json::to_value(engine.status()).expect("serializable");
    assert_eq!(json["Won"]["player"], "X");
    assert_eq!(json["Won"]["line"], serde_json::json!([0, 3, 6]));
}
