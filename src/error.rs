//! Error types for the weather and utility-bill forwarder.
//!
//! This module defines typed errors for the different components of the application.
//! Per-row and per-window failures are turned into counters by their callers, so most
//! of these errors only surface in logs; configuration and import errors abort their
//! command.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Weather provider errors
    #[error("weather provider error")]
    Weather(#[from] WeatherError),

    /// REST backend errors
    #[error("backend error")]
    Backend(#[from] BackendError),

    /// Utility-bill CSV import errors
    #[error("import error")]
    Import(#[from] ImportError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// Required configuration value is missing
    #[error("missing required configuration: {0}")]
    Missing(String),

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Weather provider (Open-Meteo) errors.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Connection failure or timeout
    #[error("weather request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("weather provider error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response body could not be decoded
    #[error("failed to decode weather response: {0}")]
    Decode(String),
}

/// REST backend errors.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection failure or timeout
    #[error("backend request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a status that is neither success nor duplicate
    #[error("rejected by backend (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Utility-bill CSV import errors.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Input file does not exist
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// Input file could not be read
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// CSV content is malformed
    #[error("failed to parse CSV: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a new missing configuration error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing(field.into())
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Maps an envy error, naming the full environment variable for missing values.
    pub fn from_envy(prefix: &str, err: envy::Error) -> Self {
        match err {
            envy::Error::MissingValue(field) => {
                Self::missing(format!("{}{}", prefix, field.to_uppercase()))
            }
            other => Self::env_parse(other),
        }
    }
}

impl WeatherError {
    /// Creates a server error from HTTP status and response body.
    pub fn server_error(status: reqwest::StatusCode, body: String) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message: body,
        }
    }
}

impl BackendError {
    /// Creates a rejection from HTTP status and response body.
    pub fn rejected(status: reqwest::StatusCode, body: String) -> Self {
        Self::Rejected {
            status: status.as_u16(),
            message: body,
        }
    }
}

impl ImportError {
    /// Creates a file-not-found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Creates a CSV parse error.
    pub fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }
}
