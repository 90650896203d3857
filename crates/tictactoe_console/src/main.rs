//! Tic-tac-toe console entry point.

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, GameConfig, run_game};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    info!(?config, "Configuration resolved");

    let stdin = std::io::stdin().lock();
    let status = run_game(&config, stdin, std::io::stdout(), std::io::stdout())?;

    info!(?status, "Exiting");
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
