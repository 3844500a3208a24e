//! Shared constants for the resilience scoring worker.

/// Producer version string written to every run row.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default grid step in degrees.
pub const DEFAULT_GRID_STEP_DEG: f64 = 0.25;

/// Default synthetic grid shape (rows, cols).
pub const DEFAULT_GRID_ROWS: usize = 120;
pub const DEFAULT_GRID_COLS: usize = 240;

/// Default signal adapter.
pub const DEFAULT_ADAPTER: &str = "synthetic";

/// Adapters the worker knows how to build.
pub const KNOWN_ADAPTERS: &[&str] = &["synthetic", "file"];

/// Default seed for the synthetic adapter.
pub const DEFAULT_SYNTHETIC_SEED: u64 = 7;

/// Default notes attached to a run.
pub const DEFAULT_RUN_NOTES: &str = "synthetic adapter (offline demo). Replace with real adapters.";

/// Default expected update cadence of the signal sources, in minutes.
pub const DEFAULT_CADENCE_MIN: f64 = 180.0;

/// Missing-data percentage at or above which confidence is always "low".
pub const MISSING_PCT_LOW_CONFIDENCE: f64 = 10.0;

/// Floor applied to typical rainfall before dividing.
pub const RAIN_DENOMINATOR_EPSILON: f64 = 1e-6;

/// Upper clamp for rainfall dryness and vegetation decline.
pub const DECLINE_CLAMP_MAX: f64 = 2.0;

/// Composite severity at or above which an alert is emitted.
pub const ALERT_MIN_SEVERITY: u8 = 2;

/// Default alert validity window, in days before the run time.
pub const DEFAULT_ALERT_WINDOW_DAYS: u32 = 30;

/// Longest accepted alert validity window, in days.
pub const MAX_ALERT_WINDOW_DAYS: u32 = 3650;

/// Default SQLite database location.
pub const DEFAULT_DATABASE_URL: &str = "resilience.db";

/// Default number of attempts for a run write that hits lock contention.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default initial backoff between write attempts, in milliseconds.
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 100;

/// Domain tag for composite alerts.
pub const ALERT_DOMAIN_COMPOSITE: &str = "composite";

/// Level tag written to grid region rows.
pub const REGION_LEVEL_GRID: &str = "grid";

/// Assumption recorded in every indicator's provenance.
pub const PROVENANCE_ASSUMPTION: &str = "proxy thresholds";
