//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
