//! Command-line interface for the tic-tac-toe console.

use crate::config::Starter;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_engine::Mark;

/// Play tic-tac-toe against a computer that picks free squares at random
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Your symbol, X or O (skips the prompt)
    #[arg(short, long)]
    pub mark: Option<Mark>,

    /// Who moves first
    #[arg(short, long, value_enum)]
    pub first: Option<Starter>,

    /// Seed for the first-mover draw and the computer's moves
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file (default: tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
