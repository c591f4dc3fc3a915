//! Property tests for the rules and the engine.

use proptest::prelude::*;
use rewind_tictactoe::{
    Board, EngineInvariants, GameEngine, InvariantSet, Player, Position, Square, WINNING_LINES,
    evaluate_winner,
};

fn square(code: u8) -> Square {
    match code {
        1 => Square::Occupied(Player::X),
        2 => Square::Occupied(Player::O),
        _ => Square::Empty,
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(0u8..3).prop_map(|codes| Board::from_squares(codes.map(square)))
}

/// A user action: play a cell or jump to a move. Indices run past the valid
/// range on purpose.
#[derive(Debug, Clone, Copy)]
enum Action {
    Play(usize),
    Jump(usize),
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(
        prop_oneof![
            3 => (0usize..11).prop_map(Action::Play),
            1 => (0usize..12).prop_map(Action::Jump),
        ],
        0..40,
    )
}

proptest! {
    #[test]
    fn winner_iff_some_line_is_complete(board in arb_board()) {
        let complete = WINNING_LINES.iter().find(|line| {
            let [a, b, c] = line.positions();
            !board.is_empty(a) && board.get(a) == board.get(b) && board.get(a) == board.get(c)
        });

        match (evaluate_winner(&board), complete) {
            (None, None) => {}
            (Some(win), Some(line)) => {
                prop_assert_eq!(win.line, *line);
                prop_assert_eq!(Square::Occupied(win.player), board.get(line.positions()[0]));
            }
            (found, expected) => prop_assert!(
                false,
                "winner {:?} but first complete line {:?}",
                found,
                expected
            ),
        }
    }

    #[test]
    fn engine_actions_preserve_invariants(actions in arb_actions()) {
        let mut engine = GameEngine::new();

        for action in actions {
            let before = engine.clone();
            match action {
                Action::Play(cell) => {
                    let decided = before.winner().is_some();
                    let result = engine.play_move(cell);

                    if decided || cell > 8 {
                        prop_assert!(result.is_err());
                    }
                    match result {
                        Ok(_) => {
                            let pos = Position::from_index(cell)
                                .expect("accepted cells are in range");
                            let old = before.current_board();
                            let new = engine.current_board();

                            prop_assert!(old.is_empty(pos));
                            prop_assert_eq!(new.get(pos), Square::Occupied(before.turn()));
                            prop_assert_eq!(old.diff(new), vec![pos]);
                            prop_assert_eq!(engine.history().len(), before.current_move() + 2);
                            prop_assert_eq!(engine.current_move(), before.current_move() + 1);
                        }
                        Err(_) => {
                            prop_assert_eq!(&engine, &before);
                        }
                    }
                }
                Action::Jump(index) => {
                    let result = engine.jump_to(index);
                    prop_assert_eq!(engine.history(), before.history());
                    if index < before.history().len() {
                        prop_assert!(result.is_ok());
                        prop_assert_eq!(engine.current_move(), index);
                    } else {
                        prop_assert!(result.is_err());
                        prop_assert_eq!(&engine, &before);
                    }
                }
            }

            prop_assert!(EngineInvariants::check_all(&engine).is_ok());
            prop_assert!(engine.moves(Default::default()).is_ok());
        }
    }
}
