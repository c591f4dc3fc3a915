//! Non-interactive replay of a move sequence.

use anyhow::Result;
use rewind_tictactoe::{Board, GameEngine, GameError, GameStatus, MoveEntry, MoveOrder};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, instrument, warn};

/// An action the engine refused during replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// What was attempted, e.g. `cell 4` or `jump 7`.
    pub action: String,
    /// Why the engine refused it.
    pub reason: String,
}

/// Result of replaying a move sequence.
#[derive(Debug, Clone)]
pub struct Replay {
    engine: GameEngine,
    rejected: Vec<Rejection>,
}

/// Serialized form of a replay.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    board: &'a Board,
    current_move: usize,
    history_len: usize,
    status: GameStatus,
    status_text: String,
    moves: Vec<MoveEntry>,
    rejected: &'a [Rejection],
}

impl Replay {
    /// Plays `cells` in order, then jumps to `jump` if given.
    ///
    /// Refused moves and jumps are recorded and skipped, the same way the
    /// interactive view ignores them.
    #[instrument]
    pub fn run(cells: &[usize], jump: Option<usize>) -> Result<Self, GameError> {
        let mut engine = GameEngine::new();
        let mut rejected = Vec::new();

        for &cell in cells {
            match engine.play_move(cell) {
                Ok(_) => {}
                Err(e @ (GameError::InvalidMove(_) | GameError::InvalidArgument(_))) => {
                    warn!(cell, error = %e, "Skipping move");
                    rejected.push(Rejection {
                        action: format!("cell {}", cell),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        if let Some(index) = jump {
            match engine.jump_to(index) {
                Ok(()) => {}
                Err(e @ GameError::InvalidArgument(_)) => {
                    warn!(index, error = %e, "Skipping jump");
                    rejected.push(Rejection {
                        action: format!("jump {}", index),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            moves = engine.history().len() - 1,
            rejected = rejected.len(),
            "Replay finished"
        );
        Ok(Self { engine, rejected })
    }

    /// The engine after replay.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Actions that were refused.
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    /// Board, status, move list and rejections as plain text.
    pub fn to_text(&self, order: MoveOrder) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", self.engine.current_board())?;
        writeln!(out)?;
        writeln!(out, "{}", self.engine.status_text())?;
        writeln!(out)?;
        writeln!(out, "Moves ({}):", order)?;
        for entry in self.engine.moves(order)? {
            let marker = if entry.is_current { ">" } else { " " };
            writeln!(out, "{} {}", marker, entry.description)?;
        }
        for rejection in &self.rejected {
            writeln!(out, "Ignored {}: {}", rejection.action, rejection.reason)?;
        }
        Ok(out)
    }

    /// Snapshot of the replay as pretty-printed JSON.
    pub fn to_json(&self, order: MoveOrder) -> Result<String> {
        let snapshot = Snapshot {
            board: self.engine.current_board(),
            current_move: self.engine.current_move(),
            history_len: self.engine.history().len(),
            status: self.engine.status(),
            status_text: self.engine.status_text(),
            moves: self.engine.moves(order)?,
            rejected: &self.rejected,
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}
