//! Statistics conservation: every counted game is counted exactly once.

use super::Invariant;
use crate::types::GameState;

/// Invariant: `total_games == x_wins + o_wins + draws`.
pub struct StatisticsConservedInvariant;

impl Invariant<GameState> for StatisticsConservedInvariant {
    fn holds(state: &GameState) -> bool {
        let stats = state.statistics();
        stats.total_games() == stats.x_wins() + stats.o_wins() + stats.draws()
    }

    fn description() -> &'static str {
        "Total games equals X wins plus O wins plus draws"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Statistics;

    #[test]
    fn test_fresh_state_holds() {
        assert!(StatisticsConservedInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_skewed_counters_violate() {
        let mut state = GameState::new();
        *state.statistics_mut() = Statistics::from_counts(2, 1, 0, 2);
        assert!(!StatisticsConservedInvariant::holds(&state));
    }
}
