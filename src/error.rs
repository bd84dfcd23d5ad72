//! Error types for configuration loading.
//!
//! Canvas operations themselves never fail: missing measurements, stale
//! gesture targets and out-of-range geometry all degrade to "no visible
//! change". The only fallible surface is reading a `CanvasConfig`.

use thiserror::Error;

/// Errors that can occur while loading a canvas configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed but is out of its allowed range
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<String> for ConfigError {
    fn from(s: String) -> Self {
        ConfigError::Invalid(s)
    }
}

impl From<&str> for ConfigError {
    fn from(s: &str) -> Self {
        ConfigError::Invalid(s.to_string())
    }
}
