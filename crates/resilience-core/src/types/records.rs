//! Rows the worker writes to the persistence store.
//!
//! All of them are insert-only: created once per run and never mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Confidence, Metric, Severity};

/// One complete scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// Sortable, timestamp-derived identifier (`%Y-%m-%dT%H:%M:%SZ`).
    pub run_id: String,
    pub run_time: DateTime<Utc>,
    pub version: String,
    pub adapter: String,
    pub notes: String,
}

impl RunRecord {
    pub fn run_id_for(time: DateTime<Utc>) -> String {
        time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

/// Where an indicator value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub adapter: String,
    pub assumption: String,
    pub run_id: String,
}

/// A (run, cell, metric) value.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    pub region_id: String,
    pub metric: Metric,
    /// `None` when the underlying sample was missing.
    pub value: Option<f64>,
    pub severity: Severity,
    pub confidence: Confidence,
}

/// Payload carried by an alert: every index severity plus the run confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertDetails {
    pub cri: Severity,
    pub wsi: Severity,
    pub fsi: Severity,
    pub msi: Severity,
    pub confidence: Confidence,
}

/// Emitted for a cell whose composite severity reached the alert level.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRecord {
    pub region_id: String,
    pub domain: String,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub details: AlertDetails,
    pub valid_start: DateTime<Utc>,
    pub valid_end: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn run_id_is_sortable_utc_stamp() {
        let t = Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(RunRecord::run_id_for(t), "2026-03-04T05:06:07Z");
        let later = Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap();
        assert!(RunRecord::run_id_for(t) < RunRecord::run_id_for(later));
    }

    #[test]
    fn alert_details_serialize_levels() {
        let details = AlertDetails {
            cri: Severity::Severe,
            wsi: Severity::Severe,
            fsi: Severity::Watch,
            msi: Severity::None,
            confidence: Confidence::High,
        };
        let json = serde_json::to_value(details).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"cri": 3, "wsi": 3, "fsi": 1, "msi": 0, "confidence": "high"})
        );
    }
}
