//! Error types for the Padron core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Padron application.
///
/// Every operation boundary converts these into a user-visible notice via
/// `Display`; no variant is treated as process-fatal.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PadronError {
    /// Login was rejected by the credential verifier.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session flag storage read/write failed.
    #[error("Session persistence error: {message}")]
    Persistence { message: String },

    /// Remote document store call failed.
    ///
    /// `transient` is set when the store client reports a failure class worth
    /// retrying (network unreachable, timeout).
    #[error("Record store error: {message}")]
    Store { message: String, transient: bool },

    /// Serialization/deserialization error.
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PadronError {
    /// Creates a Persistence error.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Creates a permanent Store error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            transient: false,
        }
    }

    /// Creates a transient Store error.
    pub fn store_transient(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            transient: true,
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an InvalidCredentials error.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is a Persistence error.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    /// Check if this is a Store error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }

    /// Check if this is a Store error the caller may reasonably retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Store { transient: true, .. })
    }

    /// The user-facing notice text for this error.
    ///
    /// Currently the `Display` string; kept as a named method so the UI
    /// boundary has a single conversion point.
    pub fn notice(&self) -> String {
        self.to_string()
    }
}

impl From<std::io::Error> for PadronError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PadronError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PadronError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PadronError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PadronError>`.
pub type Result<T> = std::result::Result<T, PadronError>;
