//! Evaluation results for a board and a game.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a single board.
///
/// This does not distinguish a draw from a game still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark holds a complete line.
    Winner(Mark),
    /// No line is complete yet.
    Undecided,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Undecided => None,
        }
    }

    /// Returns true if a line is complete.
    pub fn is_decided(&self) -> bool {
        matches!(self, Outcome::Winner(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Undecided => write!(f, "No winner yet"),
        }
    }
}

/// Status of the displayed board: who won, or who moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The displayed board has a winner.
    Winner(Mark),
    /// Nobody has won; this mark moves next.
    NextToMove(Mark),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Winner(mark) => Some(*mark),
            Status::NextToMove(_) => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::NextToMove(mark) => write!(f, "Next player: {}", mark),
        }
    }
}
