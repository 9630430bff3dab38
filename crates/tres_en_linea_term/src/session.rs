//! Interactive session state and loop.

use crate::config::DisplayConfig;
use crate::input::{HELP, Input};
use crate::render;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tres_en_linea::{Game, HistoryError, MoveOutcome};

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line.
    Show(String),
    /// Stop reading.
    Quit,
}

/// One game driven from the terminal.
#[derive(Debug)]
pub struct Session {
    game: Game,
    config: DisplayConfig,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Text printed once before the first prompt.
    pub fn banner(&self) -> String {
        format!(
            "{}\n\n{}",
            self.config.title(),
            render::game(&self.game, &self.config)
        )
    }

    /// Parses and handles one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<Input>() {
            Ok(input) => self.handle(input),
            Err(e) => {
                debug!(error = %e, "Unparsed input");
                Reply::Show(format!("{}. Type 'help' for commands.", e))
            }
        }
    }

    /// Handles a parsed input.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Reply {
        match input {
            Input::Place(pos) => match self.game.apply_move(pos) {
                MoveOutcome::Placed(step) => {
                    debug!(%step, "Move applied to session");
                    Reply::Show(render::game(&self.game, &self.config))
                }
                MoveOutcome::Ignored(reason) => Reply::Show(reason.to_string()),
            },
            Input::Jump(index) => match self.game.jump_to(index) {
                Ok(()) => Reply::Show(render::game(&self.game, &self.config)),
                Err(e) => {
                    warn!(error = %e, "Jump rejected");
                    Reply::Show(e.to_string())
                }
            },
            Input::Moves => Reply::Show(render::moves(&self.game, &self.config)),
            Input::Board => Reply::Show(render::game(&self.game, &self.config)),
            Input::Help => Reply::Show(HELP.to_string()),
            Input::Quit => Reply::Quit,
        }
    }

    /// Reads commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        info!("Session started");
        writeln!(output, "{}", self.banner())?;

        let mut lines = input.lines();
        loop {
            write!(output, "\n> ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                debug!("End of input");
                writeln!(output)?;
                break;
            };
            match self.handle_line(&line?) {
                Reply::Show(text) => writeln!(output, "{}", text)?,
                Reply::Quit => break,
            }
        }

        info!(moves = self.game.move_count() - 1, "Session ended");
        Ok(())
    }
}

/// Applies square indices in order, optionally jumps, and renders the
/// result with the move list.
///
/// Ignored moves are reported in the output rather than failing.
///
/// # Errors
///
/// Returns [`HistoryError::InvalidIndex`] if `jump` names no snapshot.
#[instrument(skip(config))]
pub fn replay(
    indices: &[usize],
    jump: Option<usize>,
    config: &DisplayConfig,
) -> Result<String, HistoryError> {
    let mut game = Game::new();
    let mut notes = Vec::new();
    for (i, &index) in indices.iter().enumerate() {
        if let MoveOutcome::Ignored(reason) = game.apply_index(index) {
            warn!(index, %reason, "Replay move ignored");
            notes.push(format!("Ignored move {} (square {}): {}", i + 1, index, reason));
        }
    }
    if let Some(k) = jump {
        game.jump_to(k)?;
    }

    let mut sections = vec![config.title().clone()];
    if !notes.is_empty() {
        sections.push(notes.join("\n"));
    }
    sections.push(render::game(&game, config));
    sections.push(render::moves(&game, config));
    Ok(sections.join("\n\n"))
}
