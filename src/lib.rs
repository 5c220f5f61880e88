//! Noughts - terminal tic-tac-toe
//!
//! The game rules and session statistics live in [`noughts_core`]; this
//! crate is the shell around them.
//!
//! # Architecture
//!
//! - **Cli**: `play` (the terminal UI) and `replay` (headless)
//! - **Config**: optional TOML settings
//! - **Tui**: ratatui presentation layer forwarding keys into the engine

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use replay::{RejectedMove, ReplayReport};
