//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::{digit_index, move_cursor};
pub use ui::draw;

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the TUI until the player quits.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(*settings.show_statistics());
    let res = run_app(&mut terminal, app);

    // Restore the terminal before reporting any loop error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == AppAction::Quit {
                return Ok(());
            }
        }
    }
}
