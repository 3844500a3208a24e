//! SQLite persistence store for runs, regions, indicators, and alerts.
//!
//! The worker only inserts; reads exist for operators and tests.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod retry;

pub use connection::DatabaseManager;
pub use retry::{with_retry, RetryPolicy};

use resilience_core::errors::StorageError;
use rusqlite::ErrorCode;

/// Map a rusqlite error, separating lock contention from hard failures.
pub fn storage_err(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StorageError::Busy {
            message: e.to_string(),
        },
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
