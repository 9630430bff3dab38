//! Tres en línea - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tres_en_linea_term::cli::{Cli, Command};
use tres_en_linea_term::{DisplayConfig, Session, replay};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();
    debug!(?cli, "Parsed arguments");

    let config = DisplayConfig::load(cli.locale, cli.config.as_deref())
        .context("Failed to load display config")?;

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves, jump } => run_replay(&moves, jump, &config),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive session on stdin/stdout
fn run_play(config: DisplayConfig) -> Result<()> {
    info!("Starting interactive session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(config)
        .run(stdin.lock(), stdout.lock())
        .context("Terminal I/O failed")
}

/// Apply moves and print the resulting game
fn run_replay(moves: &[usize], jump: Option<usize>, config: &DisplayConfig) -> Result<()> {
    info!(count = moves.len(), ?jump, "Replaying moves");
    let report = replay(moves, jump, config).context("Replay failed")?;
    println!("{}", report);
    Ok(())
}
