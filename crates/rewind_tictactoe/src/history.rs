//! Linear history of board snapshots.

use crate::Board;
use tracing::{debug, instrument};

/// Ordered board snapshots from game start to the latest played move.
///
/// Entry 0 is always the empty board, so a history is never empty. The
/// sequence only grows by appending, and only shrinks when a new move is
/// played from an earlier snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Builds a history from raw snapshots. Returns `None` if `boards` is empty.
    ///
    /// The snapshots are taken as-is; use the engine invariants to check
    /// that they form a legal game.
    pub fn from_boards(boards: Vec<Board>) -> Option<Self> {
        if boards.is_empty() {
            None
        } else {
            Some(Self { boards })
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> &Board {
        // Never empty by construction.
        &self.boards[self.boards.len() - 1]
    }

    /// All snapshots in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Iterates over the snapshots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Board> {
        self.boards.iter()
    }

    /// Discards every snapshot after `from`, then appends `board`.
    ///
    /// Returns the index of the appended snapshot.
    #[instrument(skip(self, board), fields(len = self.boards.len()))]
    pub(crate) fn branch(&mut self, from: usize, board: Board) -> usize {
        let keep = (from + 1).min(self.boards.len());
        if keep < self.boards.len() {
            debug!(discarded = self.boards.len() - keep, "Truncating future history");
        }
        self.boards.truncate(keep);
        self.boards.push(board);
        self.boards.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Board;
    type IntoIter = std::slice::Iter<'a, Board>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
