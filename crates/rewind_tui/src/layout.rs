//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};
use rewind_tictactoe::Position;

/// Width of one board cell in columns.
const CELL_WIDTH: u16 = 11;
/// Height of one board cell in rows.
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Areas of every widget on the screen for a given terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board panel.
    pub board_panel: Rect,
    /// One rect per board cell, row-major.
    pub cells: [Rect; 9],
    /// Horizontal separators between board rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators between board columns, two per board row.
    pub col_separators: [Rect; 6],
    /// Status line.
    pub status: Rect,
    /// Bordered move list panel.
    pub moves_panel: Rect,
    /// Inside of the move list panel, one entry per row.
    pub moves: Rect,
    /// Key help footer.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal of size `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(GRID_HEIGHT + 2), // Body
                Constraint::Length(3),            // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(30)])
            .split(chunks[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[1]);

        let board_panel = body[0];
        let grid = center_rect(
            Block::default().borders(Borders::ALL).inner(board_panel),
            GRID_WIDTH,
            GRID_HEIGHT,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT),
            ])
            .split(grid);

        let mut cells = [Rect::default(); 9];
        let mut col_separators = [Rect::default(); 6];
        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                cells[row * 3 + col] = cols[col * 2];
            }
            col_separators[row * 2] = cols[1];
            col_separators[row * 2 + 1] = cols[3];
        }

        let moves_panel = info[1];
        Self {
            title: chunks[0],
            board_panel,
            cells,
            row_separators: [rows[1], rows[3]],
            col_separators,
            status: info[0],
            moves_panel,
            moves: Block::default().borders(Borders::ALL).inner(moves_panel),
            help: chunks[2],
        }
    }

    /// Board cell under the terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| contains(rect, column, row))
            .and_then(Position::from_index)
    }

    /// Visible move list row under the terminal coordinate, if any.
    ///
    /// Add [`crate::App::moves_offset`] to get the entry position.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        contains(&self.moves, column, row).then(|| (row - self.moves.y) as usize)
    }
}

fn contains(rect: &Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn test_cells_are_sized_and_disjoint() {
        let layout = layout();
        for (i, cell) in layout.cells.iter().enumerate() {
            assert_eq!((cell.width, cell.height), (CELL_WIDTH, CELL_HEIGHT));
            for other in &layout.cells[i + 1..] {
                assert!(!cell.intersects(*other));
            }
        }
    }

    #[test]
    fn test_cell_hit_testing() {
        let layout = layout();
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            assert_eq!(layout.cell_at(rect.x, rect.y), Some(pos));
            let (right, bottom) = (rect.x + rect.width - 1, rect.y + rect.height - 1);
            assert_eq!(layout.cell_at(right, bottom), Some(pos));
        }
        let sep = layout.col_separators[0];
        assert_eq!(layout.cell_at(sep.x, sep.y), None);
        assert_eq!(layout.cell_at(0, 0), None);
    }

    #[test]
    fn test_move_row_hit_testing() {
        let layout = layout();
        let moves = layout.moves;
        assert_eq!(layout.move_row_at(moves.x, moves.y), Some(0));
        assert_eq!(layout.move_row_at(moves.x + 3, moves.y + 4), Some(4));
        assert_eq!(layout.move_row_at(layout.moves_panel.x, moves.y), None);
    }
}
