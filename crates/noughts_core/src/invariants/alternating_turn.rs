//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: Players alternate turns, O first.
///
/// While the game is in progress the player to move is the one after the
/// last mover. Once the game is over the current player stays on the
/// final mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(ply, mov)| mov.player == Player::for_ply(ply));
        if !alternates {
            return false;
        }

        let expected = match history.last() {
            None => Player::FIRST,
            Some(last) if state.outcome().is_terminal() => last.player,
            Some(last) => last.player.opponent(),
        };

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}
