//! Noughts - terminal tic-tac-toe with session statistics.

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, Command, Settings, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file_logging(&settings)?;
            info!(?settings, "Settings loaded");
            tui::run(&settings)
        }
        Command::Replay { json, moves } => {
            logging::init_stderr_logging(&settings);
            info!(?settings, "Settings loaded");
            info!(moves = moves.len(), "Replaying moves");
            replay::run(&moves, json)
        }
    }
}
