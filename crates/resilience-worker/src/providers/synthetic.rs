//! Offline demo provider: a seeded random world with a few drought patches.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use resilience_core::errors::ProviderError;
use resilience_core::traits::{SignalBatch, SignalProvider};
use resilience_core::types::{GridShape, RawGrid};

/// Number of drought patches stamped onto the observed rainfall.
const DROUGHT_PATCHES: usize = 8;
/// Patch half-extent in cells (rows, cols): 12 x 24 cells per patch.
const PATCH_HALF_ROWS: usize = 6;
const PATCH_HALF_COLS: usize = 12;
/// Patch centers stay this many cells away from the grid edge when they can.
const PATCH_MARGIN: usize = 10;

/// Deterministic synthetic signals. The same seed and shape always yield
/// the same grid.
#[derive(Debug, Clone)]
pub struct SyntheticProvider {
    seed: u64,
}

impl SyntheticProvider {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SignalProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self, shape: GridShape) -> Result<SignalBatch, ProviderError> {
        if shape.is_empty() {
            return Err(ProviderError::EmptyGrid {
                rows: shape.rows,
                cols: shape.cols,
            });
        }
        let n = shape.checked_len().ok_or(ProviderError::GridTooLarge {
            rows: shape.rows,
            cols: shape.cols,
        })?;
        let rain_noise = normal("rainfall noise", 1.0)?;
        let ndvi_noise = normal("vegetation anomaly", 0.15)?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        // Wetter tropics, drier poles, plus noise; floored at 1mm.
        let mut typical_rain = Vec::with_capacity(n);
        for row in 0..shape.rows {
            let lat = row_latitude(row, shape.rows);
            let base = 30.0 * (-(lat / 35.0).powi(2)).exp() + 5.0;
            for _ in 0..shape.cols {
                typical_rain.push((base + rain_noise.sample(&mut rng)).max(1.0));
            }
        }

        let mut observed_rain: Vec<f64> = typical_rain
            .iter()
            .map(|typ| typ * (0.7 + 0.6 * rng.gen::<f64>()))
            .collect();

        for _ in 0..DROUGHT_PATCHES {
            let r0 = patch_center(&mut rng, shape.rows);
            let c0 = patch_center(&mut rng, shape.cols);
            let factor = rng.gen_range(0.05..0.30);
            let rows = r0.saturating_sub(PATCH_HALF_ROWS)..(r0 + PATCH_HALF_ROWS).min(shape.rows);
            for row in rows {
                let cols = c0.saturating_sub(PATCH_HALF_COLS)..(c0 + PATCH_HALF_COLS).min(shape.cols);
                for col in cols {
                    observed_rain[shape.index(row, col)] *= factor;
                }
            }
        }

        let soil_moisture: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();
        let ndvi_anomaly: Vec<f64> = (0..n).map(|_| ndvi_noise.sample(&mut rng)).collect();
        let persistence_weeks: Vec<f64> = (0..n).map(|_| rng.gen_range(0..9) as f64).collect();

        let grid = RawGrid::new(
            shape,
            observed_rain,
            typical_rain,
            soil_moisture,
            ndvi_anomaly,
            persistence_weeks,
        )?;
        tracing::debug!(seed = self.seed, rows = shape.rows, cols = shape.cols, "generated synthetic grid");

        Ok(SignalBatch {
            grid,
            freshness_min: 0.0,
        })
    }
}

/// Latitudes run evenly from 90 at the first row to -90 at the last.
fn row_latitude(row: usize, rows: usize) -> f64 {
    if rows == 1 {
        return 90.0;
    }
    90.0 - 180.0 * row as f64 / (rows - 1) as f64
}

fn patch_center(rng: &mut StdRng, extent: usize) -> usize {
    if extent > 2 * PATCH_MARGIN {
        rng.gen_range(PATCH_MARGIN..extent - PATCH_MARGIN)
    } else {
        rng.gen_range(0..extent)
    }
}

/// Zero-mean normal with the given spread.
fn normal(what: &str, std_dev: f64) -> Result<Normal<f64>, ProviderError> {
    Normal::new(0.0, std_dev).map_err(|e| ProviderError::Generator {
        what: what.to_string(),
        message: e.to_string(),
    })
}
