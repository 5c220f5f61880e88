//! First-class move records and move rejections.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
///
/// Every accepted move is kept in the game history, which the
/// invariant checks replay against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
///
/// A rejected move never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejected {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The index does not address a cell of the board.
    #[display("Index {_0} is out of range (must be 0-8)")]
    IndexOutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),
}
