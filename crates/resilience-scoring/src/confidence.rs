//! Confidence estimator: completeness first, then freshness against cadence.

use resilience_core::constants::MISSING_PCT_LOW_CONFIDENCE;
use resilience_core::types::Confidence;

/// Derive the run's trust label.
///
/// - `low` when 10% or more of the data is missing, regardless of freshness
/// - `high` when the data is no older than the expected cadence
/// - `medium` when it is at most twice the cadence old
/// - `low` otherwise
///
/// Non-finite inputs cannot vouch for anything and yield `low`.
pub fn confidence_from_inputs(missing_pct: f64, freshness_min: f64, cadence_min: f64) -> Confidence {
    if !missing_pct.is_finite() || !freshness_min.is_finite() || !cadence_min.is_finite() {
        return Confidence::Low;
    }
    if missing_pct >= MISSING_PCT_LOW_CONFIDENCE {
        return Confidence::Low;
    }
    if freshness_min <= cadence_min {
        return Confidence::High;
    }
    if freshness_min <= cadence_min * 2.0 {
        return Confidence::Medium;
    }
    Confidence::Low
}
