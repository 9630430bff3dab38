//! Pointer invariant: the current move names an existing snapshot.

use super::super::Game;
use super::Invariant;

/// Invariant: `current_move < move_count`.
pub struct PointerInRangeInvariant;

impl Invariant<Game> for PointerInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.current_move() < game.move_count()
    }

    fn description() -> &'static str {
        "Current move points into the history"
    }
}
