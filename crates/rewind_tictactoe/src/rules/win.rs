//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight fixed lines of three squares.
///
/// Serializes as its three board indices, e.g. `[0, 3, 6]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[usize; 3]", try_from = "[usize; 3]")]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl From<WinningLine> for [usize; 3] {
    fn from(line: WinningLine) -> Self {
        line.indices()
    }
}

impl TryFrom<[usize; 3]> for WinningLine {
    type Error = String;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        WINNING_LINES
            .into_iter()
            .find(|line| line.indices() == indices)
            .ok_or_else(|| format!("{:?} is not a winning line", indices))
    }
}

/// All winning lines in evaluation order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// The completed line.
    pub line: WinningLine,
}

/// Checks if there is a winner on the board.
///
/// Lines are tested in [`WINNING_LINES`] order and the first complete line
/// wins. Legal play never completes two lines for different players, but the
/// order keeps the result deterministic for any board.
#[instrument]
pub fn evaluate_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(Win { player, line: *line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        marks.iter().fold(Board::new(), |board, (i, player)| {
            board.with_mark(Position::ALL[*i], *player)
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        let win = evaluate_winner(&board).expect("top row is complete");
        assert_eq!(win.player, Player::X);
        assert_eq!(win.line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let win = evaluate_winner(&board).expect("anti-diagonal is complete");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete_or_mixed() {
        let incomplete = board_with(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(evaluate_winner(&incomplete), None);

        let mixed = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(evaluate_winner(&mixed), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let board = line
                .positions()
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::O));
            assert_eq!(evaluate_winner(&board), Some(Win { player: Player::O, line }));
        }
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Row 0 and column 0 both complete: rows are checked first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(evaluate_winner(&board).map(|w| w.line.indices()), Some([0, 1, 2]));

        // Column 0 and the main diagonal: columns come before diagonals.
        let board = board_with(&[
            (0, Player::O),
            (3, Player::O),
            (6, Player::O),
            (4, Player::O),
            (8, Player::O),
        ]);
        assert_eq!(evaluate_winner(&board).map(|w| w.line.indices()), Some([0, 3, 6]));

        // Two players on different rows: the upper row is reported.
        let board = board_with(&[
            (3, Player::O),
            (4, Player::O),
            (5, Player::O),
            (6, Player::X),
            (7, Player::X),
            (8, Player::X),
        ]);
        let win = evaluate_winner(&board).expect("two complete rows");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.line.indices(), [3, 4, 5]);
    }

    #[test]
    fn test_line_serializes_as_indices() {
        let win = Win {
            player: Player::X,
            line: WINNING_LINES[3],
        };
        let json = serde_json::to_value(win).expect("serializes");
        assert_eq!(json["line"], serde_json::json!([0, 3, 6]));

        let line: WinningLine = serde_json::from_str("[2, 4, 6]").expect("valid line");
        assert_eq!(line, WINNING_LINES[7]);
        assert!(serde_json::from_str::<WinningLine>("[0, 1, 3]").is_err());
    }
}
