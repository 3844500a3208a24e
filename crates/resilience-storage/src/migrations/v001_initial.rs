//! V001: runs, regions, indicators, alerts.

pub const MIGRATION_SQL: &str = r#"
-- One row per scoring pass. Never updated.
CREATE TABLE IF NOT EXISTS runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id TEXT NOT NULL UNIQUE,
    run_time_utc TEXT NOT NULL,
    version TEXT NOT NULL,
    adapter TEXT NOT NULL,
    notes TEXT NOT NULL DEFAULT ''
) STRICT;

CREATE INDEX IF NOT EXISTS idx_runs_time
    ON runs(run_time_utc DESC);

-- Grid cells. Identity comes from the snapped center and step, so the
-- same cell maps to the same row across runs.
CREATE TABLE IF NOT EXISTS regions (
    region_id TEXT PRIMARY KEY,
    region_name TEXT,
    level TEXT NOT NULL,
    lat REAL NOT NULL,
    lon REAL NOT NULL,
    meta TEXT NOT NULL DEFAULT '{}'
) STRICT;

-- Per run, per cell, per metric. value is NULL when the sample was missing.
CREATE TABLE IF NOT EXISTS indicators (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id INTEGER NOT NULL REFERENCES runs(id),
    region_id TEXT NOT NULL REFERENCES regions(region_id),
    metric TEXT NOT NULL,
    value REAL,
    severity INTEGER NOT NULL CHECK (severity BETWEEN 0 AND 3),
    confidence TEXT NOT NULL CHECK (confidence IN ('low', 'medium', 'high')),
    provenance TEXT NOT NULL,
    updated_utc TEXT NOT NULL,
    UNIQUE(run_id, region_id, metric)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_indicators_region
    ON indicators(region_id, metric);

-- Composite alerts. At most one per cell per run.
CREATE TABLE IF NOT EXISTS alerts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_id INTEGER NOT NULL REFERENCES runs(id),
    region_id TEXT NOT NULL REFERENCES regions(region_id),
    domain TEXT NOT NULL,
    severity INTEGER NOT NULL CHECK (severity BETWEEN 2 AND 3),
    title TEXT NOT NULL,
    message TEXT NOT NULL,
    details TEXT NOT NULL,
    valid_start_utc TEXT NOT NULL,
    valid_end_utc TEXT NOT NULL,
    created_utc TEXT NOT NULL,
    UNIQUE(run_id, region_id, domain)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_alerts_run
    ON alerts(run_id);
CREATE INDEX IF NOT EXISTS idx_alerts_region
    ON alerts(region_id, created_utc DESC);
"#;
