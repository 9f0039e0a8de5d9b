//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{MatchRules, RuleStrategy, SetRules, GAMES_PER_SET, SETS_TO_WIN};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Scoring thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Games needed to take a set
    #[serde(default = "default_games_per_set")]
    pub games_per_set: u32,

    /// Sets needed to take a match
    #[serde(default = "default_sets_to_win")]
    pub sets_to_win: u32,
}

fn default_games_per_set() -> u32 {
    GAMES_PER_SET
}

fn default_sets_to_win() -> u32 {
    SETS_TO_WIN
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            games_per_set: default_games_per_set(),
            sets_to_win: default_sets_to_win(),
        }
    }
}

impl RulesConfig {
    pub fn set_rules(&self) -> Arc<dyn RuleStrategy> {
        Arc::new(SetRules::new(self.games_per_set))
    }

    pub fn match_rules(&self) -> Arc<dyn RuleStrategy> {
        Arc::new(MatchRules::new(self.sets_to_win))
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub rules: RulesConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            rules: RulesConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.games_per_set == 0 {
            return Err(ConfigError::ValidationError(
                "games_per_set must be greater than 0".to_string(),
            ));
        }

        if self.rules.sets_to_win == 0 {
            return Err(ConfigError::ValidationError(
                "sets_to_win must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
