//! Queries for the runs table. Insert-only from the worker's side.

use resilience_core::errors::StorageError;
use resilience_core::types::RunRecord;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::format_utc;
use crate::storage_err;

/// A stored run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRow {
    pub id: i64,
    pub run_id: String,
    pub run_time_utc: String,
    pub version: String,
    pub adapter: String,
    pub notes: String,
}

const SELECT_COLUMNS: &str = "SELECT id, run_id, run_time_utc, version, adapter, notes FROM runs";

fn map_row(row: &Row<'_>) -> rusqlite::Result<RunRow> {
    Ok(RunRow {
        id: row.get(0)?,
        run_id: row.get(1)?,
        run_time_utc: row.get(2)?,
        version: row.get(3)?,
        adapter: row.get(4)?,
        notes: row.get(5)?,
    })
}

/// Insert a run row. Returns the row id indicators and alerts reference.
pub fn insert_run(conn: &Connection, run: &RunRecord) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO runs (run_id, run_time_utc, version, adapter, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            run.run_id,
            format_utc(run.run_time),
            run.version,
            run.adapter,
            run.notes,
        ],
    )
    .map_err(storage_err)?;
    Ok(conn.last_insert_rowid())
}

/// The most recent run by run time.
pub fn latest_run(conn: &Connection) -> Result<Option<RunRow>, StorageError> {
    conn.query_row(
        &format!("{SELECT_COLUMNS} ORDER BY run_time_utc DESC, id DESC LIMIT 1"),
        [],
        map_row,
    )
    .optional()
    .map_err(storage_err)
}

/// Look up a run by its timestamp-derived identifier.
pub fn get_run(conn: &Connection, run_id: &str) -> Result<Option<RunRow>, StorageError> {
    conn.query_row(
        &format!("{SELECT_COLUMNS} WHERE run_id = ?1"),
        params![run_id],
        map_row,
    )
    .optional()
    .map_err(storage_err)
}

/// Count stored runs.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM runs", [], |row| row.get(0))
        .map_err(storage_err)
}
