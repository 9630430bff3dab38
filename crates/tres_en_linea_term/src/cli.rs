//! Command-line interface for tres.

use crate::config::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tres en línea - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "tres")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the display labels
    #[arg(short, long, global = true, env = "TRES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base language for the display labels
    #[arg(long, global = true, value_enum, default_value_t = Locale::En, env = "TRES_LOCALE")]
    pub locale: Locale,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play,

    /// Apply a list of moves and print the result
    Replay {
        /// Square indices (0-8) in play order, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Show this snapshot instead of the last one
        #[arg(short, long)]
        jump: Option<usize>,
    },
}
