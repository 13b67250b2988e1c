//! Error types for bower-migrate.
//!
//! All operations return `Result<T>` which aliases `Result<T, MigrateError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from migration operations.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Config file could not be read or is not valid YAML.
    #[error("Failed to load config {}: {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    /// Manifest text is not valid JSON.
    #[error("Failed to parse {manifest}: {source}")]
    Parse {
        manifest: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest is valid JSON but not shaped like a manifest.
    #[error("Invalid {manifest}: {reason}")]
    InvalidManifest {
        manifest: &'static str,
        reason: String,
    },

    /// Reading, writing, or deleting a file failed.
    #[error("Failed to {action} {}: {source}", .path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MigrateError {
    pub(crate) fn file_io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        MigrateError::FileIo {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for bower-migrate operations.
pub type Result<T> = std::result::Result<T, MigrateError>;
