//! Monotonic board property: marks never change once placed.

use crate::types::{Board, Cell};

/// Transition property: every cell marked in `before` is unchanged in `after`.
///
/// Unlike the single-state invariants this compares two states, so the
/// move contract checks it as a postcondition.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Checks that no marked cell was altered between the two boards.
    pub fn holds_between(before: &Board, after: &Board) -> bool {
        before
            .cells()
            .iter()
            .zip(after.cells())
            .all(|(old, new)| *old == Cell::Empty || old == new)
    }

    /// Human-readable description of the property.
    pub fn description() -> &'static str {
        "Marked cells are never overwritten"
    }
}
