//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use crate::action::MoveRejected;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation, MonotonicBoard};
use crate::position::Position;
use crate::types::GameState;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Output of a satisfied precondition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveRejected>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Contract for placing a mark by raw board index.
///
/// Preconditions, in order:
/// - The game is still in progress
/// - The index addresses a cell
/// - The cell is empty
///
/// Postconditions:
/// - No marked cell changed
/// - All [`GameInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    #[instrument(skip(state))]
    fn pre(state: &GameState, index: &usize) -> Result<Position, MoveRejected> {
        if state.outcome().is_terminal() {
            return Err(MoveRejected::GameAlreadyOver);
        }

        let pos = Position::from_index(*index).ok_or(MoveRejected::IndexOutOfRange(*index))?;

        if !state.board().is_empty(pos) {
            return Err(MoveRejected::CellOccupied(pos));
        }

        Ok(pos)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !MonotonicBoard::holds_between(before.board(), after.board()) {
            violations.push(InvariantViolation::new(MonotonicBoard::description()));
        }

        if let Err(mut found) = GameInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameEngine, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let state = GameState::new();
        assert_eq!(MoveContract::pre(&state, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        assert_eq!(
            MoveContract::pre(engine.state(), &4),
            Err(MoveRejected::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_range() {
        let state = GameState::new();
        assert_eq!(
            MoveContract::pre(&state, &9),
            Err(MoveRejected::IndexOutOfRange(9))
        );
    }

    #[test]
    fn test_game_over_checked_before_range() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 1, 5, 2] {
            engine.apply_move(index).unwrap();
        }
        assert_eq!(
            MoveContract::pre(engine.state(), &42),
            Err(MoveRejected::GameAlreadyOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::new();
        let before = engine.snapshot();
        engine.apply_move(4).unwrap();
        assert!(MoveContract::post(&before, engine.state()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        let before = engine.snapshot();
        let mut after = before.clone();
        let cell = Cell::Mark(Player::X);
        after.board_mut().set(Position::Center, cell);

        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == MonotonicBoard::description())
        );
    }
}
