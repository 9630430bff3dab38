//! Display configuration for the terminal front end.
//!
//! All text the front end prints around the board lives here. A locale picks
//! the base labels; a TOML file can then override any of them.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Base language for labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English labels.
    #[default]
    En,
    /// Spanish labels.
    Es,
}

/// Text shown around the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Banner printed once when the front end starts.
    title: String,

    /// Prefix for the winner status, followed by the mark.
    winner_label: String,

    /// Prefix for the next-to-move status, followed by the mark.
    next_label: String,

    /// Extra line shown under the status when the board is full and unwon.
    draw_notice: String,

    /// Prefix for the winning line, followed by its positions.
    line_label: String,

    /// Move list entry for snapshot 0.
    start_entry: String,

    /// Move list entry for snapshot k, followed by k.
    move_entry: String,
}

impl DisplayConfig {
    /// Returns the base labels for `locale`.
    #[instrument]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                title: "Tres en línea".to_string(),
                winner_label: "Winner:".to_string(),
                next_label: "Next player:".to_string(),
                draw_notice: "Draw: the board is full.".to_string(),
                line_label: "Line:".to_string(),
                start_entry: "Go to game start".to_string(),
                move_entry: "Go to move #".to_string(),
            },
            Locale::Es => Self {
                title: "Tres en línea".to_string(),
                winner_label: "Ganador:".to_string(),
                next_label: "Siguiente jugador:".to_string(),
                draw_notice: "Empate: el tablero está lleno.".to_string(),
                line_label: "Línea:".to_string(),
                start_entry: "Ir al inicio del juego".to_string(),
                move_entry: "Ir al movimiento #".to_string(),
            },
        }
    }

    /// Loads labels for `locale`, overridden by the TOML file at `path` if
    /// one is given.
    #[instrument(skip(path), fields(path = ?path.map(Path::display)))]
    pub fn load(locale: Locale, path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = Self::for_locale(locale);
        match path {
            Some(path) => base.with_file(path),
            None => {
                debug!("No config file, using locale defaults");
                Ok(base)
            }
        }
    }

    /// Applies overrides from a TOML file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn with_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = self.with_toml(&content)?;
        info!(title = %config.title, "Config loaded successfully");
        Ok(config)
    }

    /// Applies overrides from TOML text.
    ///
    /// Keys that are absent keep their current value; unknown keys are
    /// rejected.
    #[instrument(skip(self, content))]
    pub fn with_toml(self, content: &str) -> Result<Self, ConfigError> {
        let overrides: DisplayOverrides = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(overrides.apply(self))
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Optional replacements for each label, as read from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayOverrides {
    title: Option<String>,
    winner_label: Option<String>,
    next_label: Option<String>,
    draw_notice: Option<String>,
    line_label: Option<String>,
    start_entry: Option<String>,
    move_entry: Option<String>,
}

impl DisplayOverrides {
    fn apply(self, base: DisplayConfig) -> DisplayConfig {
        DisplayConfig {
            title: self.title.unwrap_or(base.title),
            winner_label: self.winner_label.unwrap_or(base.winner_label),
            next_label: self.next_label.unwrap_or(base.next_label),
            draw_notice: self.draw_notice.unwrap_or(base.draw_notice),
            line_label: self.line_label.unwrap_or(base.line_label),
            start_entry: self.start_entry.unwrap_or(base.start_entry),
            move_entry: self.move_entry.unwrap_or(base.move_entry),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_english() {
        let config = DisplayConfig::default();
        assert_eq!(config.winner_label(), "Winner:");
        assert_eq!(config.start_entry(), "Go to game start");
    }

    #[test]
    fn test_spanish_labels() {
        let config = DisplayConfig::for_locale(Locale::Es);
        assert_eq!(config.winner_label(), "Ganador:");
        assert_eq!(config.next_label(), "Siguiente jugador:");
        assert_eq!(config.move_entry(), "Ir al movimiento #");
    }

    #[test]
    fn test_partial_override_keeps_rest() {
        let config = DisplayConfig::default()
            .with_toml("title = \"Gato\"\nnext_label = \"Turno:\"")
            .unwrap();
        assert_eq!(config.title(), "Gato");
        assert_eq!(config.next_label(), "Turno:");
        assert_eq!(config.winner_label(), "Winner:");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DisplayConfig::default()
            .with_toml("colour = \"red\"")
            .unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
