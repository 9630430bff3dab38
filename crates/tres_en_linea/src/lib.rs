//! Tres en línea - tic-tac-toe with time travel
//!
//! Pure game logic: a win evaluator over the eight lines of a 3x3 board and
//! a state machine that keeps every board snapshot so play can resume from
//! any earlier move.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] ([`evaluate`], [`is_draw`])
//! - **History**: ordered snapshots, truncated when play branches
//! - **Game**: history plus the pointer to the displayed snapshot
//! - **Invariants**: properties checked after every accepted move
//!
//! # Example
//!
//! ```
//! use tres_en_linea::{Game, Mark, Position, Status};
//!
//! let mut game = Game::new();
//! game.apply_move(Position::TopLeft);
//! assert_eq!(game.status(), Status::NextToMove(Mark::O));
//!
//! game.jump_to(0).unwrap();
//! game.apply_move(Position::Center);
//! assert_eq!(game.move_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveOutcome, Rejection};
pub use game::{Game, GameStateError};
pub use history::{History, HistoryError, Record};
pub use outcome::{Outcome, Status};
pub use position::Position;
pub use rules::{evaluate, is_draw, is_full, winning_line};
pub use types::{Board, Mark, Square};
