//! Game configuration loaded from TOML.

use crate::games::bingo::{Allotment, BoardSize};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings applied to every round of a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct BingoConfig {
    /// Countdown length of a round, in seconds.
    #[serde(default = "default_duration_secs")]
    duration_secs: u32,

    /// Board size used when none is requested.
    #[serde(default)]
    default_size: BoardSize,

    /// Power-up charges granted at the start of each round.
    #[serde(default)]
    allotment: Allotment,
}

#[instrument]
fn default_duration_secs() -> u32 {
    180
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            default_size: BoardSize::default(),
            allotment: Allotment::default(),
        }
    }
}

impl BingoConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML for this
    /// structure or the round duration is zero.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.duration_secs == 0 {
            return Err(ConfigError::new(
                "duration_secs must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;

        info!(
            duration_secs = config.duration_secs,
            default_size = %config.default_size,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
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
