//! Queries for the indicators table.

use resilience_core::errors::StorageError;
use resilience_core::types::{IndicatorRecord, Provenance};
use rusqlite::{params, Connection, Row};

use crate::storage_err;

/// A stored indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub run_id: i64,
    pub region_id: String,
    pub metric: String,
    pub value: Option<f64>,
    pub severity: u8,
    pub confidence: String,
    pub provenance: String,
    pub updated_utc: String,
}

const SELECT_COLUMNS: &str = "SELECT run_id, region_id, metric, value, severity, confidence, \
                              provenance, updated_utc FROM indicators";

fn map_row(row: &Row<'_>) -> rusqlite::Result<IndicatorRow> {
    Ok(IndicatorRow {
        run_id: row.get(0)?,
        region_id: row.get(1)?,
        metric: row.get(2)?,
        value: row.get(3)?,
        severity: row.get(4)?,
        confidence: row.get(5)?,
        provenance: row.get(6)?,
        updated_utc: row.get(7)?,
    })
}

/// Serialize provenance once per run; every indicator of the run shares it.
pub fn encode_provenance(provenance: &Provenance) -> Result<String, StorageError> {
    serde_json::to_string(provenance).map_err(|e| StorageError::Encode {
        what: "provenance".to_string(),
        message: e.to_string(),
    })
}

pub fn insert_indicator(
    conn: &Connection,
    run_db_id: i64,
    indicator: &IndicatorRecord,
    provenance_json: &str,
    updated_utc: &str,
) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO indicators
                (run_id, region_id, metric, value, severity, confidence, provenance, updated_utc)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .map_err(storage_err)?;
    stmt.execute(params![
        run_db_id,
        indicator.region_id,
        indicator.metric.as_str(),
        indicator.value,
        indicator.severity.level(),
        indicator.confidence.as_str(),
        provenance_json,
        updated_utc,
    ])
    .map_err(storage_err)?;
    Ok(())
}

/// All indicators written by one run.
pub fn query_for_run(conn: &Connection, run_db_id: i64) -> Result<Vec<IndicatorRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE run_id = ?1 ORDER BY region_id, metric"
        ))
        .map_err(storage_err)?;
    let rows = stmt
        .query_map(params![run_db_id], map_row)
        .map_err(storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(storage_err)
}

/// One region's history for a metric, newest run first.
pub fn query_for_region(
    conn: &Connection,
    region_id: &str,
    metric: &str,
) -> Result<Vec<IndicatorRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE region_id = ?1 AND metric = ?2 ORDER BY run_id DESC"
        ))
        .map_err(storage_err)?;
    let rows = stmt
        .query_map(params![region_id, metric], map_row)
        .map_err(storage_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(storage_err)
}

pub fn count_for_run(conn: &Connection, run_db_id: i64) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM indicators WHERE run_id = ?1",
        params![run_db_id],
        |row| row.get(0),
    )
    .map_err(storage_err)
}
