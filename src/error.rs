//! Error types for config section operations.

use thiserror::Error;

use crate::config::loader::SettingsError;

/// Errors that can occur while loading or updating a config section.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The service answered with a status other than 200.
    #[error("Invalid Status: {0}")]
    InvalidStatus(u16),

    /// Connection, timeout or body decoding failure from the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Base URL parsed but cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL '{0}' cannot carry a resource path")]
    CannotBeABase(String),

    /// Settings could not be read or failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl ConfigError {
    /// Status code for protocol-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConfigError::InvalidStatus(code) => Some(*code),
            ConfigError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for config section operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
