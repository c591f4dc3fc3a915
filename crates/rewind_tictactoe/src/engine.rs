//! Game engine with time travel over the move history.

use crate::contracts::{Contract, JumpContract, PlayMoveContract};
use crate::navigation::{MoveDescription, MoveEntry, MoveOrder, describe_move};
use crate::rules::{GameStatus, Win, evaluate_winner};
use crate::{Board, GameError, History, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the full history of board snapshots and a pointer to the snapshot
/// currently shown. Everything else (turn, winner, status text, move list)
/// is derived from those two on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) history: History,
    pub(crate) current_move: usize,
}

impl GameEngine {
    /// Creates a new game at move 0 with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The snapshot currently shown.
    pub fn current_board(&self) -> &Board {
        self.history
            .get(self.current_move)
            .unwrap_or_else(|| self.history.latest())
    }

    /// Player to move on the current snapshot.
    pub fn turn(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.turn() == Player::X
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current_board(), self.turn())
    }

    /// Status line for the current snapshot.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Winning line on the current snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        evaluate_winner(self.current_board())
    }

    /// True once the current snapshot is won or drawn.
    pub fn is_decided(&self) -> bool {
        self.status().is_decided()
    }

    /// Plays the current player's mark at board index `cell` (0-8).
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `cell` is not in 0-8.
    /// - `InvalidMove` if the square is taken or the game is decided.
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_move(&mut self, cell: usize) -> Result<GameStatus, GameError> {
        let pos = Position::from_index(cell).ok_or_else(|| {
            GameError::InvalidArgument(format!("cell {} out of range (must be 0-8)", cell))
        })?;
        self.play_at(pos)
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Any snapshots after the current move are discarded before the new
    /// snapshot is appended, and the current move advances to it.
    ///
    /// # Errors
    ///
    /// `InvalidMove` if the square is taken or the game is decided. State is
    /// unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.turn()))]
    pub fn play_at(&mut self, pos: Position) -> Result<GameStatus, GameError> {
        PlayMoveContract::pre(self, &pos).inspect_err(|e| debug!(error = %e, "Move rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.turn();
        let board = self.current_board().with_mark(pos, player);
        self.current_move = self.history.branch(self.current_move, board);

        #[cfg(debug_assertions)]
        if let Err(e) = PlayMoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        let status = self.status();
        info!(%player, position = %pos, move_number = self.current_move, %status, "Move played");
        Ok(status)
    }

    /// Shows the snapshot at `index` without altering the history.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `index` is outside the history. State is
    /// unchanged on error.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        JumpContract::pre(self, &index).inspect_err(|e| debug!(error = %e, "Jump rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.current_move = index;

        #[cfg(debug_assertions)]
        if let Err(e) = JumpContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(current_move = index, "Jumped");
        Ok(())
    }

    /// Discards all state and returns to the empty starting board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(discarded = self.history.len() - 1, "Resetting game");
        *self = Self::new();
    }

    /// Describes history entry `index`.
    pub fn describe_move(&self, index: usize) -> Result<MoveDescription, GameError> {
        describe_move(&self.history, index)
    }

    /// The move list in the requested order, one entry per snapshot.
    #[instrument(skip(self))]
    pub fn moves(&self, order: MoveOrder) -> Result<Vec<MoveEntry>, GameError> {
        let entries = (0..self.history.len())
            .map(|index| {
                Ok(MoveEntry {
                    index,
                    description: self.describe_move(index)?,
                    is_current: index == self.current_move,
                })
            })
            .collect::<Result<Vec<_>, GameError>>()?;
        Ok(order.arrange(entries))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
