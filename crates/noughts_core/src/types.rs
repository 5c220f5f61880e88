//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (moves second).
    X,
    /// Player O (always opens a fresh game).
    O,
}

impl Player {
    /// The player who opens every fresh game.
    pub const FIRST: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player expected to make the move at `ply` (zero-based).
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Self::FIRST
        } else {
            Self::FIRST.opponent()
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Mark(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their one-based number so a player can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Mark(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of the current game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("Winner is player {_0}")]
    Won(Player),
    /// Game ended in a draw.
    #[display("It's a draw!")]
    Draw,
}

impl Outcome {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Cumulative results for the session.
///
/// Counters only ever grow, and `total_games` is always the sum of the
/// other three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statistics {
    total_games: u64,
    x_wins: u64,
    o_wins: u64,
    draws: u64,
}

impl Statistics {
    /// Completed games.
    pub fn total_games(&self) -> u64 {
        self.total_games
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u64 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u64 {
        self.o_wins
    }

    /// Drawn games.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Counts one finished game. In-progress outcomes are ignored.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::InProgress => return,
            Outcome::Won(Player::X) => &mut self.x_wins,
            Outcome::Won(Player::O) => &mut self.o_wins,
            Outcome::Draw => &mut self.draws,
        };
        *counter += 1;
        self.total_games += 1;
    }

    #[cfg(test)]
    pub(crate) fn from_counts(x_wins: u64, o_wins: u64, draws: u64, total_games: u64) -> Self {
        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
        }
    }
}

/// Complete engine state: the current game plus session statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    statistics: Statistics,
    history: Vec<Move>,
}

impl GameState {
    /// Creates the state of a fresh session.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::FIRST,
            outcome: Outcome::InProgress,
            statistics: Statistics::default(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the player who made the final move).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome of the current game.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the session statistics.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Returns the accepted moves of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark (unchecked - guards live in the contract).
    pub(crate) fn place(&mut self, pos: Position) {
        let player = self.current_player;
        self.board.set(pos, Cell::Mark(player));
        self.history.push(Move::new(player, pos));
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Finalizes the game and counts it. Called once per terminal transition.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.statistics.record(outcome);
    }

    /// Clears the game while keeping statistics.
    pub(crate) fn clear_game(&mut self) {
        self.board = Board::new();
        self.current_player = Player::FIRST;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn statistics_mut(&mut self) -> &mut Statistics {
        &mut self.statistics
    }

    #[cfg(test)]
    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
