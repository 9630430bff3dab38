//! Origin invariant: the first snapshot is the empty board.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: `history[0]` is the empty board.
pub struct OriginEmptyInvariant;

impl Invariant<Game> for OriginEmptyInvariant {
    fn holds(game: &Game) -> bool {
        game.history().get(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(OriginEmptyInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut game = Game::new();
        game.history_mut().snapshots_mut()[0] = Board::new().with_mark(Position::Center, Mark::X);
        assert!(!OriginEmptyInvariant::holds(&game));
    }
}
