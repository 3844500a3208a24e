//! Query modules, one per table.

pub mod alerts;
pub mod indicators;
pub mod regions;
pub mod runs;

use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamps are stored as RFC 3339 UTC text with a `Z` suffix.
pub fn format_utc(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
