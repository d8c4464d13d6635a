use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The config file is not valid TOML for the expected shape.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    /// A value parsed fine but is not usable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Reads and deserializes a TOML config file.
pub fn read_toml<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let path_display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;
    debug!(path = %path_display, bytes = content.len(), "read config file");
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}
