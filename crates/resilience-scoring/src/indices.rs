//! The fixed index recipe: raw signals to WSI / FSI / MSI / CRI.
//!
//! - WSI (water) = max(rainfall deficit, soil dryness, persistence)
//! - FSI (food) = max(vegetation decline, persistence, rainfall deficit)
//! - MSI (market) = all zero until price ingestion exists
//! - CRI (composite) = max(WSI, FSI, MSI)

use rayon::prelude::*;
use resilience_core::config::scoring_config::{
    DEFAULT_PERSISTENCE, DEFAULT_RAINFALL, DEFAULT_SOIL, DEFAULT_VEGETATION,
};
use resilience_core::config::ScoringConfig;
use resilience_core::constants::{DECLINE_CLAMP_MAX, RAIN_DENOMINATOR_EPSILON};
use resilience_core::errors::ScoringError;
use resilience_core::types::{RawGrid, Severity, Thresholds};

use crate::aggregation::composite_max;
use crate::classifier::classify_grid;

/// The four threshold sets the recipe classifies with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringThresholds {
    pub rainfall: Thresholds,
    pub soil: Thresholds,
    pub vegetation: Thresholds,
    pub persistence: Thresholds,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            rainfall: DEFAULT_RAINFALL,
            soil: DEFAULT_SOIL,
            vegetation: DEFAULT_VEGETATION,
            persistence: DEFAULT_PERSISTENCE,
        }
    }
}

impl ScoringThresholds {
    /// Resolve and validate the configured sets.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, ScoringError> {
        let thresholds = Self {
            rainfall: config.effective_rainfall(),
            soil: config.effective_soil(),
            vegetation: config.effective_vegetation(),
            persistence: config.effective_persistence(),
        };
        thresholds.rainfall.validate("rainfall")?;
        thresholds.soil.validate("soil")?;
        thresholds.vegetation.validate("vegetation")?;
        thresholds.persistence.validate("persistence")?;
        Ok(thresholds)
    }
}

/// `(observed - typical) / typical`, with the denominator floored at a small
/// epsilon so a zero or negative climatology never yields Inf.
pub fn rain_anomaly(observed: f64, typical: f64) -> f64 {
    (observed - typical) / typical.max(RAIN_DENOMINATOR_EPSILON)
}

/// Flip a signed anomaly into a decline magnitude clamped to `[0, 2]`.
/// NaN stays NaN so it is still recognised as missing downstream.
pub fn decline(anomaly: f64) -> f64 {
    (-anomaly).clamp(0.0, DECLINE_CLAMP_MAX)
}

/// Everything one run needs per cell, as co-shaped row-major arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexGrid {
    pub rain_anom: Vec<f64>,
    pub rain_sev: Vec<Severity>,
    pub soil_sev: Vec<Severity>,
    pub veg_sev: Vec<Severity>,
    pub pers_sev: Vec<Severity>,
    pub wsi: Vec<Severity>,
    pub fsi: Vec<Severity>,
    pub msi: Vec<Severity>,
    pub cri: Vec<Severity>,
}

/// One cell's view of an [`IndexGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScores {
    pub rain_anom: f64,
    pub rain_sev: Severity,
    pub soil_sev: Severity,
    pub veg_sev: Severity,
    pub pers_sev: Severity,
    pub wsi: Severity,
    pub fsi: Severity,
    pub msi: Severity,
    pub cri: Severity,
}

impl IndexGrid {
    pub fn cell(&self, index: usize) -> CellScores {
        CellScores {
            rain_anom: self.rain_anom[index],
            rain_sev: self.rain_sev[index],
            soil_sev: self.soil_sev[index],
            veg_sev: self.veg_sev[index],
            pers_sev: self.pers_sev[index],
            wsi: self.wsi[index],
            fsi: self.fsi[index],
            msi: self.msi[index],
            cri: self.cri[index],
        }
    }

    /// Cell counts per CRI level, indexed by severity level.
    pub fn cri_histogram(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for s in &self.cri {
            counts[s.level() as usize] += 1;
        }
        counts
    }
}

/// Classify every signal and aggregate the four indices.
pub fn compute_scores(
    grid: &RawGrid,
    thresholds: &ScoringThresholds,
) -> Result<IndexGrid, ScoringError> {
    let rain_anom: Vec<f64> = grid
        .observed_rain()
        .par_iter()
        .zip(grid.typical_rain().par_iter())
        .map(|(&obs, &typ)| rain_anomaly(obs, typ))
        .collect();

    let dryness: Vec<f64> = rain_anom.par_iter().map(|&a| decline(a)).collect();
    let veg_decline: Vec<f64> = grid.ndvi_anomaly().par_iter().map(|&a| decline(a)).collect();

    let rain_sev = classify_grid(&dryness, &thresholds.rainfall);
    let soil_sev = classify_grid(grid.soil_moisture(), &thresholds.soil);
    let veg_sev = classify_grid(&veg_decline, &thresholds.vegetation);
    let pers_sev = classify_grid(grid.persistence_weeks(), &thresholds.persistence);

    let wsi = composite_max(&[&rain_sev, &soil_sev, &pers_sev])?;
    let fsi = composite_max(&[&veg_sev, &pers_sev, &rain_sev])?;
    let msi = vec![Severity::None; wsi.len()];
    let cri = composite_max(&[&wsi, &fsi, &msi])?;

    tracing::debug!(
        cells = cri.len(),
        severe = cri.iter().filter(|s| **s == Severity::Severe).count(),
        "computed index grid"
    );

    Ok(IndexGrid {
        rain_anom,
        rain_sev,
        soil_sev,
        veg_sev,
        pers_sev,
        wsi,
        fsi,
        msi,
        cri,
    })
}
