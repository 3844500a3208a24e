//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ErrorCode};

/// Errors surfaced by the persistence store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    /// Lock contention (`SQLITE_BUSY` / `SQLITE_LOCKED`). The only retryable variant.
    #[error("database busy: {message}")]
    Busy { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("failed to encode {what}: {message}")]
    Encode { what: String, message: String },
}

impl StorageError {
    /// Whether retrying the same write may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } | Self::Encode { .. } => error_code::STORAGE_ERROR,
            Self::Busy { .. } => error_code::DB_BUSY,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
        }
    }
}
