//! Error types for engine operations.
//!
//! Every error here is local and recoverable: the engine state is left
//! exactly as it was and the caller may retry with different input.

use crate::Position;

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed snapshot already has a winner.
    #[display("Game is already decided")]
    GameDecided,
}

impl std::error::Error for InvalidMove {}

/// Error that can occur when operating the game engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// The move is not legal on the current snapshot.
    #[display("Invalid move: {}", _0)]
    #[from]
    InvalidMove(InvalidMove),

    /// An index argument was outside its valid range.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// An engine invariant was violated.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Returns true for refused moves.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::InvalidMove(_))
    }

    /// Returns true for out-of-range arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GameError::InvalidArgument(_))
    }
}
