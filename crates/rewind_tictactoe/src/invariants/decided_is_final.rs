//! Terminal-state invariant: nothing is played after a win.

use super::Invariant;
use crate::{GameEngine, evaluate_winner};

/// Invariant: only the last snapshot of a history may contain a winning line.
pub struct DecidedIsFinalInvariant;

impl Invariant<GameEngine> for DecidedIsFinalInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let boards = engine.history().boards();
        boards[..boards.len().saturating_sub(1)]
            .iter()
            .all(|board| evaluate_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a decided game"
    }
}
