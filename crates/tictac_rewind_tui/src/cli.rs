//! Command-line interface for tictac_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with time travel, in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac-rewind-tui")]
#[command(about = "Two-player tic-tac-toe with a jump-to-any-move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File receiving log output (the terminal belongs to the UI)
    #[arg(long, default_value = "tictac_rewind.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}
