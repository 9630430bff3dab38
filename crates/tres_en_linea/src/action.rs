//! First-class move types.
//!
//! Moves are domain events, not side effects. A [`Move`] is the step between
//! two consecutive history snapshots; [`MoveOutcome`] reports what
//! [`crate::Game::apply_move`] did with a request.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request was ignored.
///
/// Ignored moves are not errors: the game state is left untouched and the
/// caller may disregard the reason entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The displayed board already has a winner.
    #[display("Game is already won")]
    GameOver,

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The index does not name a square (0-8).
    #[display("Square index {} is out of bounds", _0)]
    OutOfBounds(usize),
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and the history advanced.
    Placed(Move),
    /// The request was a no-op.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// Returns true if the move was placed.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
