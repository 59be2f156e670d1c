//! Console configuration
//!
//! Loaded from an optional JSON file; every key falls back to its default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use linepad_core::DEFAULT_CURSOR_MARKER;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Presentation settings for the console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Marker inserted at the cursor column
    pub cursor_marker: String,
    /// Line printed before each view
    pub header: String,
    /// Line printed after each view
    pub footer: String,
    /// Input that confirms a delete
    pub confirm_token: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            cursor_marker: DEFAULT_CURSOR_MARKER.to_string(),
            header: "------ Text Editor ------".to_string(),
            footer: "---------------------------".to_string(),
            confirm_token: "D".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("loaded console config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.confirm_token.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "confirm_token",
                reason: "must not be blank".to_string(),
            });
        }
        if self.cursor_marker.contains('\n') {
            return Err(ConfigError::Invalid {
                key: "cursor_marker",
                reason: "must fit on one line".to_string(),
            });
        }
        Ok(())
    }
}
