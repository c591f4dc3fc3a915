//! Cursor invariant: the current move always points into a non-empty history.

use super::Invariant;
use crate::GameEngine;

/// Invariant: `0 <= current_move < history.len()` and the history is non-empty.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        !engine.history().is_empty() && engine.current_move() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current move points into a non-empty history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::History;

    #[test]
    fn test_new_game_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let engine = GameEngine {
            history: History::new(),
            current_move: 1,
        };
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }
}
