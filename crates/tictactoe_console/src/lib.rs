//! Tic-tac-toe console - play against a random computer opponent
//!
//! Thin I/O layer over `tictactoe_engine`: command-line flags, an optional
//! TOML config file, and console rendering of the turn loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod console;

pub use app::run_game;
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig, Starter};
pub use console::{ConsoleRenderer, DRAW_MESSAGE, WELCOME};
