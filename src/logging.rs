//! Tracing subscriber setup.

use crate::config::Settings;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured filter.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Logs to the configured file so output never lands on the TUI.
pub fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Logs to stderr, keeping stdout for command output.
pub fn init_stderr_logging(settings: &Settings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .try_init();
}
