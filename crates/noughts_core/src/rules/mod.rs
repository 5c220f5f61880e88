//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine composes
//! them in a fixed order: the mover's win first, then a full board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner_for};

use crate::types::{Board, Outcome, Player};
use tracing::instrument;

/// Evaluates the board right after `mover` placed a mark.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Player) -> Outcome {
    if check_winner_for(board, mover) {
        Outcome::Won(mover)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // O X O / X O X / X O O - O completes the main diagonal last
        let mut board = Board::new();
        use Player::{O, X};
        let marks = [O, X, O, X, O, X, X, O, O];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Cell::Mark(player));
        }
        assert_eq!(evaluate(&board, Player::O), Outcome::Won(Player::O));
    }

    #[test]
    fn test_in_progress() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Mark(Player::O));
        assert_eq!(evaluate(&board, Player::O), Outcome::InProgress);
    }
}
