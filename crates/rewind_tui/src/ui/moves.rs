//! Move list rendering.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::{App, Focus};
use crate::layout::ScreenLayout;

/// Renders the move list, one row per history entry in display order.
///
/// The list is scrolled by [`App::moves_offset`] so the selected entry stays
/// visible on short terminals.
pub fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let focused = *app.focus() == Focus::Moves;

    let items: Vec<ListItem> = app
        .entries()
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { "> " } else { "  " };
            let mut style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && entry.index == *app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{}{}", marker, entry.description)).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .title(format!("Moves ({})", app.order()))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    let mut state = ListState::default().with_offset(app.moves_offset(layout.moves.height));
    frame.render_stateful_widget(list, layout.moves_panel, &mut state);
}
