//! Game rules for tres en línea.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from board storage and from the history so the
//! game state machine can recompute them on every query.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, evaluate, winning_line};
