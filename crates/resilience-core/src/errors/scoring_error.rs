//! Scoring errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while building scoring inputs.
///
/// Classification and aggregation themselves are total; only malformed
/// threshold sets and mismatched severity arrays are rejected.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("Thresholds for {signal} are not ordered for their polarity: {t1}, {t2}, {t3}")]
    InvalidThresholds {
        signal: String,
        t1: f64,
        t2: f64,
        t3: f64,
    },

    #[error("Severity arrays differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

impl ErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidThresholds { .. } => error_code::INVALID_THRESHOLDS,
            Self::LengthMismatch { .. } => error_code::SHAPE_MISMATCH,
        }
    }
}
