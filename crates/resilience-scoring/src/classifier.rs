//! Severity classifier: continuous signal to ordinal severity via three cut points.

use rayon::prelude::*;
use resilience_core::types::{Polarity, Severity, Thresholds};

/// Classify one value.
///
/// `HigherWorse`: 1 on `[t1, t2)`, 2 on `[t2, t3)`, 3 at `>= t3`.
/// `LowerWorse`: 1 on `[t2, t1)`, 2 on `[t3, t2)`, 3 below `t3`.
/// Everything else is 0. Non-finite values are missing data and also
/// classify to 0.
pub fn classify(x: f64, t: &Thresholds) -> Severity {
    if !x.is_finite() {
        return Severity::None;
    }
    match t.polarity {
        Polarity::HigherWorse => {
            if x >= t.t3 {
                Severity::Severe
            } else if x >= t.t2 {
                Severity::Warning
            } else if x >= t.t1 {
                Severity::Watch
            } else {
                Severity::None
            }
        }
        Polarity::LowerWorse => {
            if x < t.t3 {
                Severity::Severe
            } else if x < t.t2 {
                Severity::Warning
            } else if x < t.t1 {
                Severity::Watch
            } else {
                Severity::None
            }
        }
    }
}

/// Classify a whole grid in one call.
pub fn classify_grid(values: &[f64], t: &Thresholds) -> Vec<Severity> {
    values.par_iter().map(|&x| classify(x, t)).collect()
}
