//! Play configuration loaded from TOML.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// File read when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "supercheckers.toml";

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Name shown for team one.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name shown for team two.
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_player_one() -> String {
    "Player One".to_string()
}

#[instrument]
fn default_player_two() -> String {
    "Player Two".to_string()
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads an explicit file, or the default file when present.
    ///
    /// A missing explicit file is an error; a missing default file yields
    /// the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line values over the loaded ones.
    pub fn with_overrides(
        mut self,
        player_one: Option<String>,
        player_two: Option<String>,
        log_filter: Option<String>,
    ) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        if let Some(filter) = log_filter {
            self.log_filter = filter;
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
    fn test_partial_file_uses_defaults() {
        let config: PlayConfig = toml::from_str(r#"player_one = "Ada""#).unwrap();
        assert_eq!(config.player_one(), "Ada");
        assert_eq!(config.player_two(), "Player Two");
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config =
            PlayConfig::default().with_overrides(None, Some("Grace".into()), Some("debug".into()));
        assert_eq!(config.player_one(), "Player One");
        assert_eq!(config.player_two(), "Grace");
        assert_eq!(config.log_filter(), "debug");
    }
}
