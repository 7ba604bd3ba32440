//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Raised when a theme is requested by a name the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme '{0}' (expected 'default' or 'dark')")]
    UnknownTheme(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read or write config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("window size must be positive and finite, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}
