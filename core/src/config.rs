//! Epoch configuration (TOML)
//!
//! Example:
//! ```toml
//! [epoch]
//! genesis_timestamp = 1700000000
//! epoch_duration_secs = 86400
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default epoch length (one day)
pub const DEFAULT_EPOCH_DURATION_SECS: u64 = 86_400;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// How wall-clock time maps to epochs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpochConfig {
    /// Unix timestamp at which epoch 0 starts
    pub genesis_timestamp: i64,
    /// Length of one epoch in seconds
    pub epoch_duration_secs: u64,
}

impl Default for EpochConfig {
    fn default() -> Self {
        Self {
            genesis_timestamp: 0,
            epoch_duration_secs: DEFAULT_EPOCH_DURATION_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    epoch: EpochConfig,
}

impl EpochConfig {
    /// Parse the `[epoch]` table of a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        file.epoch.validate()?;
        Ok(file.epoch)
    }

    /// Load from a TOML file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.epoch_duration_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "epoch_duration_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
