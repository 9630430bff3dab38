//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::{Game, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square goes from empty to a mark; occupied squares never change.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        history.iter().zip(history.iter().skip(1)).all(|(before, after)| {
            let changed = before.diff(after);
            changed.len() == 1
                && before.get(changed[0]) == Square::Empty
                && after.get(changed[0]) != Square::Empty
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
