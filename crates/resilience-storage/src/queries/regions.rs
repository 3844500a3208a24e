//! Queries for the regions table.

use resilience_core::constants::REGION_LEVEL_GRID;
use resilience_core::errors::StorageError;
use resilience_core::types::GridCell;
use rusqlite::{params, Connection, OptionalExtension};

use crate::storage_err;

/// A stored region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRow {
    pub region_id: String,
    pub region_name: Option<String>,
    pub level: String,
    pub lat: f64,
    pub lon: f64,
    pub meta: String,
}

/// Insert a grid cell unless its region_id already exists.
///
/// Returns `true` if a new row was written. An existing row is left untouched.
pub fn upsert_region(conn: &Connection, cell: &GridCell) -> Result<bool, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO regions (region_id, level, lat, lon)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(region_id) DO NOTHING",
        )
        .map_err(storage_err)?;
    let changed = stmt
        .execute(params![cell.region_id(), REGION_LEVEL_GRID, cell.lat, cell.lon])
        .map_err(storage_err)?;
    Ok(changed > 0)
}

pub fn get_region(conn: &Connection, region_id: &str) -> Result<Option<RegionRow>, StorageError> {
    conn.query_row(
        "SELECT region_id, region_name, level, lat, lon, meta FROM regions WHERE region_id = ?1",
        params![region_id],
        |row| {
            Ok(RegionRow {
                region_id: row.get(0)?,
                region_name: row.get(1)?,
                level: row.get(2)?,
                lat: row.get(3)?,
                lon: row.get(4)?,
                meta: row.get(5)?,
            })
        },
    )
    .optional()
    .map_err(storage_err)
}

pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM regions", [], |row| row.get(0))
        .map_err(storage_err)
}
