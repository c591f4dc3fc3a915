//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square};

use crate::app::{App, Focus};
use crate::layout::ScreenLayout;

/// Renders the board panel: cells, separators, winning line and cursor.
pub fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let focused = *app.focus() == Focus::Board;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let panel = Block::default()
        .title(format!("Move {}", app.engine().current_move()))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(panel, layout.board_panel);

    let winning_line = app.engine().winner().map(|win| win.line);
    let board = app.engine().current_board();

    for pos in Position::ALL {
        let highlight = winning_line.is_some_and(|line| line.contains(pos));
        let cursor = focused && pos == *app.cursor();
        draw_cell(
            frame,
            layout.cells[pos.to_index()],
            board.get(pos),
            pos,
            highlight,
            cursor,
        );
    }

    for area in layout.row_separators {
        draw_separator(frame, area);
    }
    for area in layout.col_separators {
        draw_separator_vertical(frame, area);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    winning: bool,
    cursor: bool,
) {
    let (symbol, base_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Symbol on the middle line of the cell.
    let lines = vec![Line::default(), Line::from(symbol), Line::default()];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
