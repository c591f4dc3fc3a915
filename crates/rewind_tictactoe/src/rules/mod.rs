//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history storage so the engine, the invariants
//! and the presentation layer all evaluate boards the same way.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{GameStatus, status_text};
pub use win::{WINNING_LINES, Win, WinningLine, evaluate_winner};
