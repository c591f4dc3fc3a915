//! Contract-based validation for engine transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::invariants::{EngineInvariants, InvariantSet};
use crate::{GameEngine, GameError, InvalidMove, Position, evaluate_winner};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

fn check_invariants(engine: &GameEngine) -> Result<(), GameError> {
    EngineInvariants::check_all(engine).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Engine invariants violated");
        GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

/// Contract for playing a move on the current snapshot.
///
/// Preconditions:
/// - The current snapshot has no winner
/// - The target square is empty
///
/// Postconditions:
/// - History was truncated after the old current move, then grew by one
/// - The current move is the new last entry
/// - All engine invariants hold
pub struct PlayMoveContract;

impl Contract<GameEngine, Position> for PlayMoveContract {
    #[instrument(skip(engine))]
    fn pre(engine: &GameEngine, pos: &Position) -> Result<(), GameError> {
        let board = engine.current_board();
        if evaluate_winner(board).is_some() {
            return Err(InvalidMove::GameDecided.into());
        }
        if !board.is_empty(*pos) {
            return Err(InvalidMove::SquareOccupied(*pos).into());
        }
        Ok(())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), GameError> {
        let expected_len = before.current_move() + 2;
        if after.history().len() != expected_len {
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: history has {} entries, expected {}",
                after.history().len(),
                expected_len
            )));
        }
        if after.current_move() != expected_len - 1 {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: current move is not the latest entry".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Contract for jumping to an earlier (or later) snapshot.
///
/// Precondition: the target index is inside the history.
/// Postcondition: the history itself is unchanged.
pub struct JumpContract;

impl Contract<GameEngine, usize> for JumpContract {
    #[instrument(skip(engine))]
    fn pre(engine: &GameEngine, index: &usize) -> Result<(), GameError> {
        let len = engine.history().len();
        if *index >= len {
            return Err(GameError::InvalidArgument(format!(
                "move {} out of range (history has {} entries)",
                index, len
            )));
        }
        Ok(())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), GameError> {
        if before.history() != after.history() {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: jump modified history".to_string(),
            ));
        }
        check_invariants(after)
    }
}
