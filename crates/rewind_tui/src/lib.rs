//! Terminal front end for rewind.
//!
//! - **App**: view state over a [`rewind_tictactoe::GameEngine`]
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Replay**: prints the outcome of a move sequence without a terminal UI

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod layout;
mod logging;
mod replay;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

pub use app::{App, Focus};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, ConfigError};
pub use layout::ScreenLayout;
pub use replay::{Rejection, Replay};
pub use ui::draw;

/// Runs the interactive terminal UI until the user quits.
pub fn run_tui(config: &Config) -> Result<()> {
    logging::init_file_logging(config.log_file(), config.log_filter())?;
    info!("Starting rewind TUI");

    let mut app = App::new(*config.move_order())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for input, handle it; repeat until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !*app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            let size = terminal.size()?;
            app.handle_event(event, Rect::new(0, 0, size.width, size.height))?;
        }
    }
    Ok(())
}

/// Replays `cells`, optionally jumps, and prints the result to stdout.
pub fn run_replay(
    config: &Config,
    cells: &[usize],
    jump: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    logging::init_stderr_logging(config.log_filter());

    let replay = Replay::run(cells, jump).context("Replay hit an engine invariant violation")?;
    let output = match format {
        OutputFormat::Text => replay.to_text(*config.move_order())?,
        OutputFormat::Json => replay.to_json(*config.move_order())?,
    };
    print!("{}", output);
    Ok(())
}
