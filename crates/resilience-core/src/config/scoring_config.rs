//! Scoring configuration: threshold sets and the expected update cadence.
//!
//! Polarity is fixed per signal; only the cut points are tunable.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CADENCE_MIN;
use crate::types::Thresholds;

/// Reference cut points.
pub const DEFAULT_RAINFALL: Thresholds = Thresholds::higher_worse(0.15, 0.30, 0.50);
pub const DEFAULT_SOIL: Thresholds = Thresholds::lower_worse(0.30, 0.20, 0.10);
pub const DEFAULT_VEGETATION: Thresholds = Thresholds::higher_worse(0.10, 0.20, 0.30);
pub const DEFAULT_PERSISTENCE: Thresholds = Thresholds::higher_worse(2.0, 4.0, 6.0);

/// Three cut points as written in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub t1: f64,
    pub t2: f64,
    pub t3: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Expected source update cadence in minutes. Default: 180.
    pub cadence_min: Option<f64>,
    /// Rainfall dryness (higher worse).
    pub rainfall: Option<ThresholdSet>,
    /// Soil moisture fraction (lower worse).
    pub soil: Option<ThresholdSet>,
    /// Vegetation decline (higher worse).
    pub vegetation: Option<ThresholdSet>,
    /// Persistence in weeks (higher worse).
    pub persistence: Option<ThresholdSet>,
}

impl ScoringConfig {
    pub fn effective_cadence_min(&self) -> f64 {
        self.cadence_min.unwrap_or(DEFAULT_CADENCE_MIN)
    }

    pub fn effective_rainfall(&self) -> Thresholds {
        self.rainfall
            .map(|t| Thresholds::higher_worse(t.t1, t.t2, t.t3))
            .unwrap_or(DEFAULT_RAINFALL)
    }

    pub fn effective_soil(&self) -> Thresholds {
        self.soil
            .map(|t| Thresholds::lower_worse(t.t1, t.t2, t.t3))
            .unwrap_or(DEFAULT_SOIL)
    }

    pub fn effective_vegetation(&self) -> Thresholds {
        self.vegetation
            .map(|t| Thresholds::higher_worse(t.t1, t.t2, t.t3))
            .unwrap_or(DEFAULT_VEGETATION)
    }

    pub fn effective_persistence(&self) -> Thresholds {
        self.persistence
            .map(|t| Thresholds::higher_worse(t.t1, t.t2, t.t3))
            .unwrap_or(DEFAULT_PERSISTENCE)
    }
}
