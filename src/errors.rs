//! Unified application error type.
//! Storage backends, config and CLI handlers all return AppError; the
//! state store turns the storage-related variants into diagnostics instead
//! of propagating them.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored value is corrupt or was not written by us.
    #[error("Failed to parse stored state '{key}', resetting: {reason}")]
    Deserialization { key: String, reason: String },

    /// The storage medium rejected a read or a write.
    #[error("Failed to persist state '{key}': {reason}")]
    Persistence { key: String, reason: String },

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Please enter a name")]
    InvalidName,

    #[error("Invalid timestamp (expected ISO-8601 / RFC 3339): {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AppError {
    pub fn persistence(key: &str, err: impl std::fmt::Display) -> Self {
        AppError::Persistence {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn deserialization(key: &str, err: impl std::fmt::Display) -> Self {
        AppError::Deserialization {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, AppError::Persistence { .. })
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self, AppError::Deserialization { .. })
    }
}

pub type AppResult<T> = Result<T, AppError>;
