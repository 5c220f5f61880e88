//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe with session statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file [default: noughts.toml, if present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply cell indices (0-8) to a fresh game and print the result
    Replay {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices in move order, O first
        moves: Vec<usize>,
    },
}
