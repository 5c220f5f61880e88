//! Tic-tac-toe game engine.
//!
//! A single [`GameEngine`] owns the board, the player to move, the outcome
//! of the current game and the statistics of the whole session. A
//! presentation layer forwards cell selections and resets into it and
//! renders its [`GameState`].
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index).unwrap();
//! }
//! assert_eq!(engine.state().outcome(), Outcome::Won(Player::O));
//! assert_eq!(engine.state().statistics().o_wins(), 1);
//!
//! engine.reset();
//! assert_eq!(engine.state().outcome(), Outcome::InProgress);
//! assert_eq!(engine.state().statistics().total_games(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod shared;
mod types;

pub use action::{Move, MoveRejected};
pub use engine::GameEngine;
pub use position::Position;
pub use shared::SharedEngine;
pub use types::{Board, Cell, GameState, Outcome, Player, Statistics};
