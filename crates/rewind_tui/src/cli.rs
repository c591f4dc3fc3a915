//! Command-line interface for rewind.

use clap::{Parser, Subcommand, ValueEnum};
use rewind_tictactoe::MoveOrder;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, default_value = "rewind.toml", global = true)]
    pub config: PathBuf,

    /// Move list order, overriding the config file
    #[arg(long, value_name = "ascending|descending", global = true)]
    pub order: Option<MoveOrder>,

    /// Log file for the terminal UI, overriding the config file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Cells to play in order (0-8, row-major)
        #[arg(value_name = "CELL")]
        cells: Vec<usize>,

        /// Jump to this move after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `replay`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    #[default]
    Text,
    /// Serialized snapshot as JSON
    Json,
}
