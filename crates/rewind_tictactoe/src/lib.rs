//! Rewind - tic-tac-toe with a navigable move history
//!
//! The engine keeps every board snapshot from the start of the game, so the
//! player can jump back to any earlier move and branch from there.
//!
//! # Architecture
//!
//! - **Types**: immutable [`Board`] snapshots over typed [`Position`]s
//! - **Rules**: pure functions for win, draw and status evaluation
//! - **History**: append/truncate-only sequence of snapshots
//! - **Engine**: [`GameEngine`] ties history and the current move together
//! - **Invariants / Contracts**: checkable properties of engine transitions
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameEngine, Player};
//!
//! # fn example() -> Result<(), rewind_tictactoe::GameError> {
//! let mut engine = GameEngine::new();
//! engine.play_move(0)?;
//! assert_eq!(engine.turn(), Player::O);
//! assert_eq!(engine.status_text(), "Next Player: O");
//!
//! engine.jump_to(0)?;
//! assert!(engine.current_board().is_blank());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod history;
mod invariants;
mod navigation;
mod position;
mod rules;
mod types;

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{
    GameStatus, WINNING_LINES, Win, WinningLine, evaluate_winner, is_draw, is_full, status_text,
};

// Crate-level exports - History and navigation
pub use history::History;
pub use navigation::{MoveDescription, MoveEntry, MoveOrder, describe_move};

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Errors
pub use error::{GameError, InvalidMove};

// Crate-level exports - Invariants and contracts
pub use contracts::{Contract, JumpContract, PlayMoveContract};
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, DecidedIsFinalInvariant, EngineInvariants,
    Invariant, InvariantSet, InvariantViolation, SingleStepInvariant,
};
