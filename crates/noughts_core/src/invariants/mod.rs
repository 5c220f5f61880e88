//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a session.
//! The engine checks them after every accepted move; they are also
//! testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;
pub mod statistics_conserved;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoard;
pub use statistics_conserved::StatisticsConservedInvariant;

/// All single-state invariants of a session.
pub type GameInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    StatisticsConservedInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameEngine, GameState, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_fresh_state() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 2] {
            engine.apply_move(index).unwrap();
        }
        assert!(GameInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = GameState::new();
        // Mark a cell without a history entry and skew the counters
        let cell = Cell::Mark(Player::X);
        state.board_mut().set(Position::TopLeft, cell);
        *state.statistics_mut() = crate::Statistics::from_counts(1, 0, 0, 0);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (AlternatingTurnInvariant, StatisticsConservedInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
