//! Win detection logic for tres en línea.

use super::super::{Board, Outcome, Position, Square};
use tracing::instrument;

/// The eight winning lines, in scan order.
///
/// Earlier lines win ties; only a board reached by moving after a win can
/// hold two complete lines.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line holding three identical marks.
#[instrument]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Evaluates a board.
///
/// Returns [`Outcome::Winner`] for the mark on the first complete line,
/// [`Outcome::Undecided`] otherwise. A full board without a line is also
/// `Undecided`; see [`super::is_draw`].
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    match winning_line(board).and_then(|[a, _, _]| board.get(a).mark()) {
        Some(mark) => Outcome::Winner(mark),
        None => Outcome::Undecided,
    }
}
