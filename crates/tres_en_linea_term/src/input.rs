//! Parsing of interactive commands.

use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;
use tres_en_linea::Position;

/// A line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the active mark.
    Place(Position),
    /// Show snapshot k.
    Jump(usize),
    /// List every snapshot.
    Moves,
    /// Redraw the board.
    Board,
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Blank line.
    #[display("Nothing entered")]
    Empty,

    /// `jump` without a move number.
    #[display("Missing move number after '{}'", _0)]
    MissingIndex(#[error(not(source))] String),

    /// Move number is not a non-negative integer.
    #[display("'{}' is not a move number", _0)]
    BadIndex(#[error(not(source))] String),

    /// Neither a command nor a square.
    #[display("Unknown command or square '{}'", _0)]
    Unknown(#[error(not(source))] String),
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
Commands:
  0-8 or a label (e.g. center, top-left)  place your mark
  jump K, j K                             show move #K
  moves, m                                list moves
  board, b                                redraw the board
  help, h, ?                              this help
  quit, q                                 leave";

impl FromStr for Input {
    type Err = InputError;

    #[instrument]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(InputError::Empty);
        };

        match first.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Ok(Input::Quit),
            "help" | "h" | "?" => Ok(Input::Help),
            "moves" | "m" | "history" => Ok(Input::Moves),
            "board" | "b" => Ok(Input::Board),
            "jump" | "j" | "goto" => {
                let arg = words
                    .next()
                    .ok_or_else(|| InputError::MissingIndex(first.to_string()))?;
                let index = arg
                    .trim_start_matches('#')
                    .parse::<usize>()
                    .map_err(|_| InputError::BadIndex(arg.to_string()))?;
                Ok(Input::Jump(index))
            }
            _ => Position::from_label_or_number(line)
                .map(Input::Place)
                .ok_or_else(|| InputError::Unknown(line.to_string())),
        }
    }
}
