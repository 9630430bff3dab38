//! Alternating turn invariant: X and O take turns, X first.

use super::super::{Game, Mark, Square};
use super::Invariant;

/// Invariant: the mark added by snapshot `n` belongs to the player whose
/// turn it was at pointer `n - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        history
            .iter()
            .zip(history.iter().skip(1))
            .enumerate()
            .all(|(step, (before, after))| {
                let expected = Square::Occupied(Mark::for_move(step));
                before
                    .diff(after)
                    .into_iter()
                    .all(|pos| after.get(pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
