//! Single-step invariant: each snapshot adds exactly one mark to its predecessor.

use super::Invariant;
use crate::{Board, GameEngine};

/// Invariant: history starts from the empty board, and every later snapshot
/// differs from the one before it in exactly one square, which was empty and
/// is now occupied.
///
/// Together these mean a mark, once placed, is never removed or replaced
/// within a history.
pub struct SingleStepInvariant;

impl Invariant<GameEngine> for SingleStepInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let boards = engine.history().boards();

        let starts_empty = boards.first().is_some_and(Board::is_blank);

        starts_empty
            && boards.windows(2).all(|pair| match pair[0].diff(&pair[1]).as_slice() {
                [pos] => pair[0].is_empty(*pos) && !pair[1].is_empty(*pos),
                _ => false,
            })
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark to an empty square"
    }
}
