//! Game configuration.
//!
//! A game is configured at construction with the number of dice and the
//! number of rolls allowed per turn. Validation happens once, when the
//! engine is built; an invalid configuration is the only fatal error the
//! engine reports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of dice in play.
pub const DEFAULT_DIE_COUNT: usize = 6;

/// Default number of rolls per turn.
pub const DEFAULT_MAX_ROLLS: u32 = 3;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("die count must be at least 1, got {0}")]
    InvalidDieCount(usize),
    #[error("max rolls must be at least 1, got {0}")]
    InvalidMaxRolls(u32),
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of dice rolled each turn.
    #[serde(default = "default_die_count")]
    pub die_count: usize,

    /// Maximum rolls per turn, counting the first roll.
    #[serde(default = "default_max_rolls")]
    pub max_rolls: u32,
}

fn default_die_count() -> usize {
    DEFAULT_DIE_COUNT
}

fn default_max_rolls() -> u32 {
    DEFAULT_MAX_ROLLS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            die_count: default_die_count(),
            max_rolls: default_max_rolls(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_die_count(mut self, die_count: usize) -> Self {
        self.die_count = die_count;
        self
    }

    #[must_use]
    pub fn with_max_rolls(mut self, max_rolls: u32) -> Self {
        self.max_rolls = max_rolls;
        self
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.die_count == 0 {
            return Err(ConfigError::InvalidDieCount(self.die_count));
        }
        if self.max_rolls == 0 {
            return Err(ConfigError::InvalidMaxRolls(self.max_rolls));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
