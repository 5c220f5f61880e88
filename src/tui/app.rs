//! Application state and key handling.

use super::input::{digit_index, move_cursor};
use crossterm::event::KeyCode;
use noughts_core::{GameEngine, Outcome, Position};
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    show_statistics: bool,
    status_message: String,
}

impl App {
    /// Creates a new application around a fresh session.
    pub fn new(show_statistics: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            show_statistics,
            status_message: String::new(),
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the statistics panel is drawn.
    pub fn show_statistics(&self) -> bool {
        self.show_statistics
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Reset is offered once the current game has a move.
    pub fn reset_enabled(&self) -> bool {
        self.engine.has_moves()
    }

    /// The game-over dialog is open while the outcome is terminal.
    pub fn game_over(&self) -> bool {
        self.engine.state().outcome().is_terminal()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            return AppAction::Quit;
        }

        // Only the dialog's OK action reaches the engine once the game is over
        if self.game_over() {
            if matches!(key, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r')) {
                self.reset();
            }
            return AppAction::Continue;
        }

        match key {
            KeyCode::Char('r') if self.reset_enabled() => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor.to_index()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(index) = digit_index(other) {
                    self.select(index);
                }
            }
        }

        AppAction::Continue
    }

    fn select(&mut self, index: usize) {
        let player = self.engine.state().current_player();
        match self.engine.apply_move(index) {
            Ok(outcome) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                    self.status_message = format!("{} played {}", player, pos.label());
                }
                if outcome != Outcome::InProgress {
                    debug!(%outcome, "Opening game-over dialog");
                }
            }
            Err(reason) => {
                debug!(%reason, "Ignoring selection");
                self.status_message = reason.to_string();
            }
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.cursor = Position::Center;
        self.status_message = "New game".to_string();
    }
}
