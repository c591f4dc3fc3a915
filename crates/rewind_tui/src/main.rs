//! Rewind - unified CLI
//!
//! Plays tic-tac-toe in the terminal or replays a move sequence.

use anyhow::Result;
use clap::Parser;
use rewind_tui::{Cli, Command, Config};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?.with_overrides(cli.order, cli.log_file);

    match cli.command.unwrap_or_default() {
        Command::Play => rewind_tui::run_tui(&config),
        Command::Replay {
            cells,
            jump,
            format,
        } => rewind_tui::run_replay(&config, &cells, jump, format),
    }
}
