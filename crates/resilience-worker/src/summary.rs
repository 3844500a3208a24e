//! What a completed run wrote.

use resilience_core::types::Confidence;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub run_id: String,
    /// Row id of the run in the store.
    pub run_db_id: i64,
    pub adapter: String,
    pub cells: usize,
    /// Regions first seen in this run.
    pub new_regions: usize,
    pub indicators: usize,
    pub alerts_elevated: usize,
    pub alerts_severe: usize,
    pub confidence: Confidence,
    pub missing_pct: f64,
    pub freshness_min: f64,
    /// Write attempts used, 1 unless lock contention forced retries.
    pub attempts: u32,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn alerts(&self) -> usize {
        self.alerts_elevated + self.alerts_severe
    }
}
