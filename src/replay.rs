//! Headless replay of a move list.

use anyhow::{Context, Result};
use noughts_core::{GameEngine, GameState, Outcome};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A move index the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Position of the index in the input list.
    pub ply: usize,
    /// The refused index.
    pub index: usize,
    /// Why it was refused.
    pub reason: String,
}

/// Final state of a replay plus every refused move.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Engine state after the last move.
    pub state: GameState,
    /// Moves that had no effect.
    pub rejected: Vec<RejectedMove>,
}

/// Applies `moves` to a fresh engine. Refused moves are skipped.
#[instrument]
pub fn replay(moves: &[usize]) -> ReplayReport {
    let mut engine = GameEngine::new();
    let mut rejected = Vec::new();

    for (ply, &index) in moves.iter().enumerate() {
        if let Err(reason) = engine.apply_move(index) {
            warn!(ply, index, %reason, "Skipping rejected move");
            rejected.push(RejectedMove {
                ply,
                index,
                reason: reason.to_string(),
            });
        }
    }

    info!(outcome = %engine.state().outcome(), "Replay finished");
    ReplayReport {
        state: engine.snapshot(),
        rejected,
    }
}

impl ReplayReport {
    /// Human-readable summary.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.state.board().display());
        out.push_str("\n\n");

        match self.state.outcome() {
            Outcome::InProgress => {
                out.push_str(&format!("Next turn: {}\n", self.state.current_player()));
            }
            outcome => out.push_str(&format!("{}\n", outcome)),
        }

        for rejected in &self.rejected {
            out.push_str(&format!(
                "Skipped move {} (index {}): {}\n",
                rejected.ply + 1,
                rejected.index,
                rejected.reason
            ));
        }

        let stats = self.state.statistics();
        out.push_str(&format!(
            "Total games: {}  X wins: {}  O wins: {}  Draws: {}\n",
            stats.total_games(),
            stats.x_wins(),
            stats.o_wins(),
            stats.draws()
        ));
        out
    }

    /// Pretty JSON of the whole report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs the `replay` command, writing to stdout.
pub fn run(moves: &[usize], json: bool) -> Result<()> {
    let report = replay(moves);
    if json {
        let rendered = report.to_json().context("Failed to serialize replay")?;
        println!("{}", rendered);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Cell, Player, Position};

    #[test]
    fn test_replay_win() {
        let report = replay(&[0, 4, 1, 5, 2]);
        assert_eq!(report.state.outcome(), Outcome::Won(Player::O));
        assert!(report.rejected.is_empty());
        assert!(report.render_text().contains("Winner is player O"));
    }

    #[test]
    fn test_replay_skips_rejected_moves() {
        let report = replay(&[4, 4, 9, 0]);
        assert_eq!(report.state.history().len(), 2);
        assert_eq!(
            report.rejected.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![4, 9]
        );
        // The skipped moves do not consume X's turn
        assert_eq!(
            report.state.board().get(Position::TopLeft),
            Cell::Mark(Player::X)
        );
    }

    #[test]
    fn test_in_progress_text_shows_next_turn() {
        let report = replay(&[4]);
        let text = report.render_text();
        assert!(text.contains("Next turn: X"));
        assert!(text.contains("1|2|3\n-+-+-\n4|O|6"));
    }
}
