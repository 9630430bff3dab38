//! Tres en línea terminal front end
//!
//! Line-oriented presentation for the [`tres_en_linea`] game logic: parses
//! commands, renders the board, status and move list, and loads the display
//! labels.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use config::{ConfigError, DisplayConfig, Locale};
pub use input::{Input, InputError};
pub use session::{Reply, Session, replay};
