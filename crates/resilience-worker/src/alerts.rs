//! Composite alert construction.

use chrono::{DateTime, Duration, Utc};
use resilience_core::constants::{ALERT_DOMAIN_COMPOSITE, ALERT_MIN_SEVERITY};
use resilience_core::types::{AlertDetails, AlertRecord, Confidence, Severity};
use resilience_scoring::CellScores;

pub const TITLE_ELEVATED: &str = "Crisis risk elevated";
pub const TITLE_SEVERE: &str = "Crisis risk severe";
pub const ALERT_MESSAGE: &str = "Composite drought/water/food stress signals elevated. \
     Verify locally; prioritize vulnerable groups. Avoid rumor-based movements.";

/// The validity window an alert created at `now` covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl AlertWindow {
    /// `[now - days, now]`, or `None` if the start falls outside the
    /// representable date range.
    pub fn ending_at(now: DateTime<Utc>, days: u32) -> Option<Self> {
        let start = now.checked_sub_signed(Duration::days(i64::from(days)))?;
        Some(Self { start, end: now })
    }
}

pub fn alert_title(severity: Severity) -> &'static str {
    match severity {
        Severity::Severe => TITLE_SEVERE,
        _ => TITLE_ELEVATED,
    }
}

/// The alert for one cell, or `None` when its CRI is below the alert level.
pub fn build_alert(
    region_id: &str,
    scores: &CellScores,
    confidence: Confidence,
    window: AlertWindow,
    created_at: DateTime<Utc>,
) -> Option<AlertRecord> {
    if scores.cri.level() < ALERT_MIN_SEVERITY {
        return None;
    }
    Some(AlertRecord {
        region_id: region_id.to_string(),
        domain: ALERT_DOMAIN_COMPOSITE.to_string(),
        severity: scores.cri,
        title: alert_title(scores.cri).to_string(),
        message: ALERT_MESSAGE.to_string(),
        details: AlertDetails {
            cri: scores.cri,
            wsi: scores.wsi,
            fsi: scores.fsi,
            msi: scores.msi,
            confidence,
        },
        valid_start: window.start,
        valid_end: window.end,
        created_at,
    })
}
