//! Game configuration loaded from TOML.

use crate::mode::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Player and mode settings for a terminal game.
///
/// Every key is optional. Command-line flags override file values.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mode to start in. Asked for interactively when absent.
    #[serde(default)]
    mode: Option<GameMode>,

    /// Name of the player using X.
    #[serde(default)]
    player1_name: Option<String>,

    /// Name of the player using O (ignored by the computer in single-player games).
    #[serde(default)]
    player2_name: Option<String>,

    /// Pause before the computer's reply, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    500
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

        info!(mode = ?config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the mode if one is given.
    pub fn with_mode(mut self, mode: Option<GameMode>) -> Self {
        if mode.is_some() {
            self.mode = mode;
        }
        self
    }

    /// Replaces the player names that are given.
    pub fn with_names(mut self, player1: Option<String>, player2: Option<String>) -> Self {
        if player1.is_some() {
            self.player1_name = player1;
        }
        if player2.is_some() {
            self.player2_name = player2;
        }
        self
    }

    /// Replaces the computer delay if one is given.
    pub fn with_computer_delay_ms(mut self, delay_ms: Option<u64>) -> Self {
        if let Some(delay_ms) = delay_ms {
            self.computer_delay_ms = delay_ms;
        }
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: None,
            player1_name: None,
            player2_name: None,
            computer_delay_ms: default_computer_delay_ms(),
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
    fn test_empty_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.computer_delay_ms(), 500);
    }

    #[test]
    fn test_overrides_only_replace_given_values() {
        let config = GameConfig::default()
            .with_mode(Some(GameMode::TwoPlayer))
            .with_names(Some("Ada".to_string()), None)
            .with_computer_delay_ms(None);
        assert_eq!(config.mode(), &Some(GameMode::TwoPlayer));
        assert_eq!(config.player1_name().as_deref(), Some("Ada"));
        assert_eq!(config.player2_name(), &None);
        assert_eq!(*config.computer_delay_ms(), 500);

        let config = config.with_mode(None);
        assert_eq!(config.mode(), &Some(GameMode::TwoPlayer));
    }
}
