//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write logs to (the TUI owns the terminal)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "tictactoe=trace")
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}
