//! PRAGMA configuration applied to the worker's connection.
//!
//! WAL mode, NORMAL sync, foreign_keys ON, 5s busy_timeout, temp_store MEMORY.

use resilience_core::errors::StorageError;
use rusqlite::Connection;

use crate::storage_err;

/// Apply performance and safety pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(storage_err)
}

/// Verify that WAL mode is active.
pub fn verify_wal_mode(conn: &Connection) -> Result<bool, StorageError> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(storage_err)?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
