//! Queries for the alerts table.

use resilience_core::errors::StorageError;
use resilience_core::types::AlertRecord;
use rusqlite::{params, Connection};

use super::format_utc;
use crate::storage_err;

/// A stored alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub run_id: i64,
    pub region_id: String,
    pub domain: String,
    pub severity: u8,
    pub title: String,
    pub message: String,
    pub details: String,
    pub valid_start_utc: String,
    pub valid_end_utc: String,
    pub created_utc: String,
}

pub fn insert_alert(
    conn: &Connection,
    run_db_id: i64,
    alert: &AlertRecord,
) -> Result<(), StorageError> {
    let details = serde_json::to_string(&alert.details).map_err(|e| StorageError::Encode {
        what: "alert details".to_string(),
        message: e.to_string(),
    })?;
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO alerts
                (run_id, region_id, domain, severity, title, message, details,
                 valid_start_utc, valid_end_utc, created_utc)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .map_err(storage_err)?;
    stmt.execute(params![
        run_db_id,
        alert.region_id,
        alert.domain,
        alert.severity.level(),
        alert.title,
        alert.message,
        details,
        format_utc(alert.valid_start),
        format_utc(alert.valid_end),
        format_utc(alert.created_at),
    ])
    .map_err(storage_err)?;
    Ok(())
}

/// Alerts of one run, most severe first.
pub fn query_for_run(conn: &Connection, run_db_id: i64) -> Result<Vec<AlertRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT run_id, region_id, domain, severity, title, message, details,
                    valid_start_utc, valid_end_utc, created_utc
             FROM alerts WHERE run_id = ?1 ORDER BY severity DESC, region_id",
        )
        .map_err(storage_err)?;
    let rows = stmt
        .query_map(params![run_db_id], |row| {
            Ok(AlertRow {
                run_id: row.get(0)?,
                region_id: row.get(1)?,
                domain: row.get(2)?,
                severity: row.get(3)?,
                title: row.get(4)?,
                message: row.get(5)?,
                details: row.get(6)?,
                valid_start_utc: row.get(7)?,
                valid_end_utc: row.get(8)?,
                created_utc: row.get(9)?,
            })
        })
        .map_err(storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(storage_err)
}

pub fn count_for_run(conn: &Connection, run_db_id: i64) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM alerts WHERE run_id = ?1",
        params![run_db_id],
        |row| row.get(0),
    )
    .map_err(storage_err)
}
