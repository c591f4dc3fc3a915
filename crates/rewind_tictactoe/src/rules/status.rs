//! Game status derived from a board snapshot.

use super::draw::is_full;
use super::win::{Win, evaluate_winner};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game at a given snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Evaluates the status of `board` with `next` to move.
    ///
    /// A winner takes precedence over a full board.
    #[instrument]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(win) = evaluate_winner(board) {
            GameStatus::Won(win)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the win, if the game was won.
    pub fn win(&self) -> Option<Win> {
        match self {
            GameStatus::Won(win) => Some(*win),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next Player: {}", next),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Status line for `board`, with X to move when `x_is_next`.
#[instrument]
pub fn status_text(board: &Board, x_is_next: bool) -> String {
    let next = if x_is_next { Player::X } else { Player::O };
    GameStatus::evaluate(board, next).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_status_text_next_player() {
        assert_eq!(status_text(&Board::new(), true), "Next Player: X");
        assert_eq!(status_text(&Board::new(), false), "Next Player: O");
    }

    #[test]
    fn test_status_text_winner_ignores_turn() {
        let board = [Position::TopLeft, Position::Center, Position::BottomRight]
            .iter()
            .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::O));
        assert_eq!(status_text(&board, true), "Winner: O");
        assert_eq!(status_text(&board, false), "Winner: O");
    }

    #[test]
    fn test_status_draw_is_decided() {
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::X,
            Player::O, Player::X, Player::O,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |b, (pos, p)| b.with_mark(*pos, p));

        let status = GameStatus::evaluate(&board, Player::O);
        assert_eq!(status, GameStatus::Draw);
        assert!(status.is_decided());
        assert_eq!(status.to_string(), "Draw");
    }
}
