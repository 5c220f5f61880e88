//! The tic-tac-toe game engine.

use crate::action::MoveRejected;
use crate::contracts::{Contract, MoveContract};
use crate::rules;
use crate::types::{GameState, Outcome};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board of the current game and the statistics of the whole
/// session. The board only changes through [`apply_move`](Self::apply_move)
/// and [`reset`](Self::reset); statistics only grow.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine for a fresh session: empty board, O to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the current game state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// True once a mark has been placed in the current game.
    pub fn has_moves(&self) -> bool {
        self.state.board().marked_count() > 0
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Returns the outcome after the move. A rejected move leaves the state
    /// untouched, so callers that treat invalid input as a no-op can ignore
    /// the error.
    ///
    /// # Errors
    ///
    /// - [`MoveRejected::GameAlreadyOver`] once the game is won or drawn
    /// - [`MoveRejected::IndexOutOfRange`] for indices past 8
    /// - [`MoveRejected::CellOccupied`] for a marked cell
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveRejected> {
        let pos = MoveContract::pre(&self.state, &index).inspect_err(|reason| {
            debug!(%reason, "Move rejected");
        })?;

        let before = self.state.clone();
        let mover = self.state.current_player();
        self.state.place(pos);

        let outcome = rules::evaluate(self.state.board(), mover);
        if outcome.is_terminal() {
            self.state.finish(outcome);
            info!(
                %outcome,
                total_games = self.state.statistics().total_games(),
                "Game finished"
            );
        } else {
            self.state.pass_turn();
            debug!(position = %pos, next = %self.state.current_player(), "Move applied");
        }

        let post = MoveContract::post(&before, &self.state);
        if let Err(violations) = &post {
            error!(?violations, "Move postcondition violated");
        }
        debug_assert!(post.is_ok(), "Move postcondition violated: {post:?}");

        Ok(outcome)
    }

    /// Starts a new game. Statistics are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.clear_game();
        info!(
            total_games = self.state.statistics().total_games(),
            "Game reset"
        );
    }
}
