//! Centralized error handling.
//!
//! Configuration errors are fatal at startup: they propagate to the
//! process entry point, which reports the message and exits.

use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds a value that does not coerce to the
    /// expected type.
    #[error("Invalid value {value:?} for {key}: expected a base-10 integer")]
    InvalidValue { key: String, value: String },
}

impl ConfigError {
    /// Create an invalid-value error naming the offending key.
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
