//! Move descriptions and move-list ordering.

use crate::{GameError, History, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Label for one entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDescription {
    /// The empty starting board (move 0).
    GameStart,
    /// A played move.
    Move {
        /// Move number (1-based history index).
        number: usize,
        /// The square marked by this move.
        position: Position,
    },
}

impl MoveDescription {
    /// 1-based row of the marked square.
    pub fn row(&self) -> Option<usize> {
        match self {
            MoveDescription::GameStart => None,
            MoveDescription::Move { position, .. } => Some(position.row() + 1),
        }
    }

    /// 1-based column of the marked square.
    pub fn col(&self) -> Option<usize> {
        match self {
            MoveDescription::GameStart => None,
            MoveDescription::Move { position, .. } => Some(position.col() + 1),
        }
    }
}

impl std::fmt::Display for MoveDescription {
    /// Coordinates print as `(column, row)`, x before y.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescription::GameStart => write!(f, "Go to Game Start"),
            MoveDescription::Move { number, position } => write!(
                f,
                "Go to Move #{} ({}, {})",
                number,
                position.col() + 1,
                position.row() + 1
            ),
        }
    }
}

/// Describes history entry `index` by locating the square it marked.
///
/// # Errors
///
/// - `InvalidArgument` if `index` is outside the history.
/// - `InvariantViolation` if the entry does not differ from its predecessor
///   in exactly one square.
#[instrument(skip(history), fields(len = history.len()))]
pub fn describe_move(history: &History, index: usize) -> Result<MoveDescription, GameError> {
    let board = history.get(index).ok_or_else(|| {
        GameError::InvalidArgument(format!(
            "move {} out of range (history has {} entries)",
            index,
            history.len()
        ))
    })?;

    let Some(previous) = index.checked_sub(1).and_then(|i| history.get(i)) else {
        return Ok(MoveDescription::GameStart);
    };

    match previous.diff(board).as_slice() {
        [position] => Ok(MoveDescription::Move {
            number: index,
            position: *position,
        }),
        changed => {
            warn!(
                index,
                changed = changed.len(),
                "History step does not change exactly one square"
            );
            Err(GameError::InvariantViolation(format!(
                "move {} changes {} squares, expected 1",
                index,
                changed.len()
            )))
        }
    }
}

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl MoveOrder {
    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arranges `items`, given oldest first, in this order.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == Self::Descending {
            items.reverse();
        }
        items
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub index: usize,
    /// Label for the entry.
    pub description: MoveDescription,
    /// True if this is the snapshot currently shown.
    pub is_current: bool,
}
