//! Game state machine with time travel.
//!
//! The game owns the snapshot history and a pointer to the displayed
//! snapshot. Everything else (whose turn it is, the winner, the status) is
//! derived from the displayed board on demand.

use super::action::{Move, MoveOutcome, Rejection};
use super::history::{History, HistoryError};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::outcome::{Outcome, Status};
use super::rules;
use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tres en línea game with a navigable move history.
///
/// Deserializing checks the pointer and every game invariant, so a loaded
/// game behaves like one built move by move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct Game {
    history: History,
    current: usize,
}

/// Error returned when a saved game does not describe a reachable state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameStateError {
    /// The pointer does not name a snapshot.
    #[display("Invalid pointer: {}", _0)]
    Pointer(HistoryError),

    /// The snapshots break one or more game invariants.
    #[display("Invariant violation: {}", _0)]
    Invariants(#[error(not(source))] String),
}

impl GameStateError {
    fn from_violations(violations: &[InvariantViolation]) -> Self {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::Invariants(descriptions)
    }
}

/// Serialized shape of [`Game`], checked before use.
#[derive(Deserialize)]
struct SavedGame {
    history: History,
    current: usize,
}

impl TryFrom<SavedGame> for Game {
    type Error = GameStateError;

    #[instrument(skip(saved), fields(current = saved.current, len = saved.history.len()))]
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let current = saved
            .history
            .check(saved.current)
            .map_err(GameStateError::Pointer)?;
        let game = Self {
            history: saved.history,
            current,
        };
        GameInvariants::check_all(&game)
            .map_err(|violations| GameStateError::from_violations(&violations))?;
        debug!("Saved game accepted");
        Ok(game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Creates a new game: one empty snapshot, pointer at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current: 0,
        }
    }

    /// Builds a game by applying positions in order.
    ///
    /// Positions that would be ignored by [`Game::apply_move`] are skipped
    /// the same way.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut game = Self::new();
        for pos in positions {
            game.apply_move(pos);
        }
        game
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Places the active mark at `pos` on the displayed board.
    ///
    /// Ignored, with the state untouched, when the displayed board already
    /// has a winner or the square is occupied. Otherwise every snapshot past
    /// the pointer is discarded, the new board is appended and the pointer
    /// moves to it.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = *self.displayed_board();

        if rules::evaluate(&board).is_decided() {
            debug!("Ignoring move on a won board");
            return MoveOutcome::Ignored(Rejection::GameOver);
        }
        if !board.is_empty(pos) {
            debug!("Ignoring move on an occupied square");
            return MoveOutcome::Ignored(Rejection::Occupied(pos));
        }

        let mark = self.active_mark();
        let record = self.history.record_after(self.current, board.with_mark(pos, mark));
        self.current = record.index;
        info!(
            %mark,
            position = %pos,
            move_number = record.index,
            discarded = record.discarded,
            "Move placed"
        );

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Invariant violation after move: {:?}",
            GameInvariants::check_all(self)
        );

        MoveOutcome::Placed(Move::new(mark, pos))
    }

    /// Places the active mark at a raw square index (0-8).
    ///
    /// Indices outside the board are ignored like any other illegal move.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!("Ignoring move outside the board");
                MoveOutcome::Ignored(Rejection::OutOfBounds(index))
            }
        }
    }

    /// Moves the pointer to snapshot `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidIndex`] if `move_index` is not below
    /// [`Game::move_count`]; the pointer is left where it was.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        self.current = self.history.check(move_index)?;
        debug!("Jumped");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Derived queries
// ─────────────────────────────────────────────────────────────

impl Game {
    /// Returns the snapshot at the pointer.
    pub fn displayed_board(&self) -> &Board {
        // `current` always names a snapshot.
        self.history.at(self.current)
    }

    /// Number of snapshots, including the empty start.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Mark that moves next: X on even pointers, O on odd.
    pub fn active_mark(&self) -> Mark {
        Mark::for_move(self.current)
    }

    /// Evaluates the displayed board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.displayed_board())
    }

    /// Winner of the displayed board, or the mark to move next.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn status(&self) -> Status {
        match self.outcome() {
            Outcome::Winner(mark) => Status::Winner(mark),
            Outcome::Undecided => Status::NextToMove(self.active_mark()),
        }
    }

    /// Winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.displayed_board())
    }

    /// True when the displayed board is full with no winner.
    ///
    /// Kept apart from [`Game::status`], which only reports a winner or the
    /// next mark.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.displayed_board())
    }

    /// Empty squares of the displayed board; none once it is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().is_decided() {
            Vec::new()
        } else {
            Position::valid_moves(self.displayed_board())
        }
    }

    /// Returns snapshot `index`.
    pub fn snapshot(&self, index: usize) -> Option<&Board> {
        self.history.get(index)
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The move made by each snapshot after the first.
    ///
    /// `moves()[k]` turns snapshot `k` into snapshot `k + 1`.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .iter()
            .zip(self.history.iter().skip(1))
            .filter_map(|(before, after)| {
                let pos = *before.diff(after).first()?;
                let mark = after.get(pos).mark()?;
                Some(Move::new(mark, pos))
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_first_move_is_x() {
        let mut game = Game::new();
        let outcome = game.apply_move(Position::TopLeft);
        assert_eq!(outcome, MoveOutcome::Placed(Move::new(Mark::X, Position::TopLeft)));
        assert_eq!(game.displayed_board().get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(game.status(), Status::NextToMove(Mark::O));
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut game = Game::replay([Position::Center]);
        let before = game.clone();
        assert_eq!(
            game.apply_move(Position::Center),
            MoveOutcome::Ignored(Rejection::Occupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_index_ignored() {
        let mut game = Game::new();
        assert_eq!(game.apply_index(9), MoveOutcome::Ignored(Rejection::OutOfBounds(9)));
        assert_eq!(game.move_count(), 1);
        assert!(game.apply_index(4).is_placed());
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut game = Game::replay([Position::Center, Position::TopLeft, Position::TopRight]);
        game.jump_to(1).unwrap();
        assert_eq!(game.move_count(), 4);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.active_mark(), Mark::O);
        assert_eq!(game.displayed_board(), game.snapshot(1).unwrap());
    }

    #[test]
    fn test_jump_out_of_range_keeps_pointer() {
        let mut game = Game::replay([Position::Center]);
        let err = game.jump_to(2).unwrap_err();
        assert_eq!(err, HistoryError::InvalidIndex { index: 2, len: 2 });
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_moves_follow_history() {
        let game = Game::replay([Position::Center, Position::TopLeft, Position::BottomRight]);
        assert_eq!(
            game.moves(),
            vec![
                Move::new(Mark::X, Position::Center),
                Move::new(Mark::O, Position::TopLeft),
                Move::new(Mark::X, Position::BottomRight),
            ]
        );
    }

    #[test]
    fn test_valid_moves_empty_once_won() {
        let game = Game::replay([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]);
        assert_eq!(game.status(), Status::Winner(Mark::X));
        assert!(game.valid_moves().is_empty());
        assert_eq!(game.winning_line(), Some(rules::LINES[0]));
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let json = r#"{"history":{"snapshots":[]},"current":0}"#;
        let err = serde_json::from_str::<Game>(json).unwrap_err();
        assert!(err.to_string().contains("History holds no snapshots"));
    }

    #[test]
    fn test_deserialize_rejects_pointer_past_end() {
        let mut json = serde_json::to_value(Game::new()).unwrap();
        json["current"] = 7.into();
        let err = serde_json::from_value::<Game>(json).unwrap_err();
        assert!(err.to_string().contains("Move #7 does not exist"));
    }

    #[test]
    fn test_deserialize_rejects_marked_origin() {
        let mut game = Game::new();
        game.history_mut().snapshots_mut()[0] = Board::new().with_mark(Position::Center, Mark::X);
        let json = serde_json::to_string(&game).unwrap();
        let err = serde_json::from_str::<Game>(&json).unwrap_err();
        assert!(err.to_string().contains("History starts from the empty board"));
    }

    #[test]
    fn test_deserialize_accepts_rewound_game() {
        let mut game = Game::replay([Position::Center, Position::TopLeft]);
        game.jump_to(1).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back.current_move(), 1);
        assert_eq!(back.displayed_board(), game.displayed_board());
        assert_eq!(back.status(), Status::NextToMove(Mark::O));
    }
}
