//! Plain-text rendering of a game.

use crate::config::DisplayConfig;
use tracing::instrument;
use tres_en_linea::{Game, Status};

/// Renders the displayed board.
pub fn board(game: &Game) -> String {
    game.displayed_board().display()
}

/// Renders the status line, plus the winning line or draw notice.
#[instrument(skip_all, fields(current = game.current_move()))]
pub fn status(game: &Game, config: &DisplayConfig) -> String {
    let mut out = match game.status() {
        Status::Winner(mark) => format!("{} {}", config.winner_label(), mark),
        Status::NextToMove(mark) => format!("{} {}", config.next_label(), mark),
    };

    if let Some(line) = game.winning_line() {
        let labels = line.map(|pos| pos.label()).join(", ");
        out.push_str(&format!("\n{} {}", config.line_label(), labels));
    } else if game.is_draw() {
        out.push('\n');
        out.push_str(config.draw_notice());
    }
    out
}

/// Renders the move list, one entry per snapshot.
///
/// The displayed snapshot is marked with `>`.
#[instrument(skip_all, fields(len = game.move_count()))]
pub fn moves(game: &Game, config: &DisplayConfig) -> String {
    let played = game.moves();
    (0..game.move_count())
        .map(|k| {
            let marker = if k == game.current_move() { '>' } else { ' ' };
            match k.checked_sub(1).and_then(|i| played.get(i)) {
                Some(step) => format!("{} {}{} ({})", marker, config.move_entry(), k, step),
                None => format!("{} {}", marker, config.start_entry()),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders board and status together.
pub fn game(game: &Game, config: &DisplayConfig) -> String {
    format!("{}\n\n{}", board(game), status(game, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use tres_en_linea::Position;

    fn top_row_win() -> Game {
        Game::replay([
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
    }

    #[test]
    fn test_status_next_player() {
        let game = Game::replay([Position::TopLeft]);
        assert_eq!(status(&game, &DisplayConfig::default()), "Next player: O");
    }

    #[test]
    fn test_status_winner_with_line() {
        let config = DisplayConfig::for_locale(Locale::Es);
        assert_eq!(
            status(&top_row_win(), &config),
            "Ganador: X\nLínea: Top-left, Top-center, Top-right"
        );
    }

    #[test]
    fn test_status_draw_notice() {
        let game = Game::replay(
            [0, 1, 2, 4, 3, 5, 7, 6, 8]
                .into_iter()
                .filter_map(Position::from_index),
        );
        assert_eq!(
            status(&game, &DisplayConfig::default()),
            "Next player: O\nDraw: the board is full."
        );
    }

    #[test]
    fn test_moves_marks_current() {
        let mut game = Game::replay([Position::Center, Position::TopLeft]);
        game.jump_to(1).unwrap();
        let expected = [
            "  Go to game start",
            "> Go to move #1 (X -> Center)",
            "  Go to move #2 (O -> Top-left)",
        ];
        assert_eq!(moves(&game, &DisplayConfig::default()), expected.join("\n"));
    }
}
