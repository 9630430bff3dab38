//! Draw detection logic for tres en línea.

use super::super::{Board, Square};
use super::win::evaluate;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a draw: a full board with no complete line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).winner().is_none()
}
