//! Application state and input handling.

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use derive_getters::Getters;
use ratatui::layout::Rect;
use rewind_tictactoe::{GameEngine, GameError, MoveEntry, MoveOrder, Position};
use tracing::{debug, info, instrument};

use crate::input::{digit_position, move_cursor};
use crate::layout::ScreenLayout;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Toggles between `Board` and `Moves`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// The engine is the only game state; the rest is view state. The move
/// list is re-derived after every change so rendering stays infallible.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    order: MoveOrder,
    entries: Vec<MoveEntry>,
    cursor: Position,
    focus: Focus,
    /// History index highlighted in the move list.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application at the start of a fresh game.
    #[instrument]
    pub fn new(order: MoveOrder) -> Result<Self> {
        let mut app = Self {
            engine: GameEngine::new(),
            order,
            entries: Vec::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            should_quit: false,
        };
        app.refresh()?;
        Ok(app)
    }

    /// Handles one terminal event. `area` is the current terminal size.
    pub fn handle_event(&mut self, event: Event, area: Rect) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, area),
            _ => Ok(()),
        }
    }

    /// Handles a key press. Releases and repeats are ignored.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Raw mode delivers Ctrl+C as a key instead of SIGINT.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("User interrupted");
            self.should_quit = true;
            return Ok(());
        }

        if let Some(pos) = digit_position(key.code) {
            self.cursor = pos;
            return self.play(pos);
        }

        match (key.code, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => {
                info!("User quit");
                self.should_quit = true;
                Ok(())
            }
            (KeyCode::Char('r'), _) => self.reset(),
            (KeyCode::Char('s'), _) => self.toggle_order(),
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
                Ok(())
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => self.play(self.cursor),
            (KeyCode::Enter, Focus::Moves) => self.jump(self.selected),
            (
                code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right),
                Focus::Board,
            ) => {
                self.cursor = move_cursor(self.cursor, code);
                Ok(())
            }
            (KeyCode::Up, Focus::Moves) => {
                self.step_selection(-1);
                Ok(())
            }
            (KeyCode::Down, Focus::Moves) => {
                self.step_selection(1);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Handles a mouse event: left click plays a cell or jumps to a move.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        let layout = ScreenLayout::new(area);
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            return self.play(pos);
        }

        let offset = self.moves_offset(layout.moves.height);
        let clicked = layout
            .move_row_at(mouse.column, mouse.row)
            .and_then(|row| self.entries.get(row + offset))
            .map(|entry| entry.index);
        if let Some(index) = clicked {
            self.focus = Focus::Moves;
            return self.jump(index);
        }

        Ok(())
    }

    /// Plays at `pos`. Refused moves are ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<()> {
        match self.engine.play_at(pos) {
            Ok(status) => debug!(%status, "Move applied to UI state"),
            Err(e @ GameError::InvalidMove(_)) => {
                debug!(error = %e, "Ignoring move");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
        self.selected = self.engine.current_move();
        self.refresh()
    }

    /// Jumps to history entry `index`. Out-of-range jumps are ignored.
    #[instrument(skip(self))]
    pub fn jump(&mut self, index: usize) -> Result<()> {
        match self.engine.jump_to(index) {
            Ok(()) => {}
            Err(e @ GameError::InvalidArgument(_)) => {
                debug!(error = %e, "Ignoring jump");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
        self.selected = index;
        self.refresh()
    }

    /// Starts a new game, keeping view preferences.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Result<()> {
        self.engine.reset();
        self.selected = 0;
        self.cursor = Position::Center;
        self.refresh()
    }

    /// Flips the move list between ascending and descending.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> Result<()> {
        self.order = self.order.toggle();
        info!(order = %self.order, "Toggled move order");
        self.refresh()
    }

    /// First move-list entry shown in a panel `visible` rows tall.
    ///
    /// The list scrolls only as far as needed to keep the selected entry on
    /// screen. Rendering and mouse hit-testing both use this offset.
    pub fn moves_offset(&self, visible: u16) -> usize {
        let row = self
            .entries
            .iter()
            .position(|e| e.index == self.selected)
            .unwrap_or(0);
        row.saturating_sub(usize::from(visible).saturating_sub(1))
    }

    /// Moves the move-list selection by `step` rows in display order.
    fn step_selection(&mut self, step: isize) {
        let Some(row) = self.entries.iter().position(|e| e.index == self.selected) else {
            return;
        };
        let target = row
            .saturating_add_signed(step)
            .min(self.entries.len().saturating_sub(1));
        if let Some(entry) = self.entries.get(target) {
            self.selected = entry.index;
        }
    }

    fn refresh(&mut self) -> Result<()> {
        self.entries = self.engine.moves(self.order)?;
        self.selected = self.selected.min(self.engine.history().len() - 1);
        Ok(())
    }
}
