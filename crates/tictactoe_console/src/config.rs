//! Game configuration: optional TOML file merged with command-line flags.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{Mark, PlayerKind};
use tracing::{debug, info, instrument};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Who takes the first turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Starter {
    /// Coin flip at game start.
    #[default]
    Random,
    /// The human moves first.
    Human,
    /// The computer moves first.
    Computer,
}

impl Starter {
    /// The fixed first mover, or `None` for a random draw.
    pub fn fixed(self) -> Option<PlayerKind> {
        match self {
            Starter::Random => None,
            Starter::Human => Some(PlayerKind::Human),
            Starter::Computer => Some(PlayerKind::Computer),
        }
    }
}

/// Settings for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Human's symbol; prompted for when absent.
    #[serde(default)]
    mark: Option<Mark>,

    /// Who moves first.
    #[serde(default)]
    first: Starter,

    /// Seed for reproducible computer play.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the explicit file, or the default file if it exists, or defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line flags on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(mark) = cli.mark {
            self.mark = Some(mark);
        }
        if let Some(first) = cli.first {
            self.first = first;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
