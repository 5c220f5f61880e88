//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::types::{Board, Cell, GameState};

/// Invariant: Replaying the move history reproduces the board.
///
/// Every mark has exactly one move behind it and no move lands on a
/// cell that was already taken.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();

        for mov in state.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Cell::Mark(mov.player));
        }

        replayed == *state.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, Player, Position};

    #[test]
    fn test_fresh_state_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut engine = GameEngine::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.apply_move(index).unwrap();
        }
        assert_eq!(engine.state().history().len(), 9);
        assert!(HistoryConsistentInvariant::holds(engine.state()));
    }

    #[test]
    fn test_mark_without_move_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        let mut state = engine.snapshot();
        let cell = Cell::Mark(Player::X);
        state.board_mut().set(Position::TopLeft, cell);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        let mut state = engine.snapshot();
        state.board_mut().set(Position::Center, Cell::Mark(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
