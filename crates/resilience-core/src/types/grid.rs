//! Grid shape and the raw signal grid supplied by a provider.

use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

/// Row-major 2D shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of cells. Only call on shapes already checked with
    /// [`GridShape::checked_len`].
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of cells, or `None` if `rows * cols` overflows.
    pub const fn checked_len(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Flat index of `(row, col)`.
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// `(row, col)` of a flat index.
    pub const fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

/// The five co-shaped raw signal arrays for one run, row-major.
///
/// Non-finite samples mark missing data.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGrid {
    shape: GridShape,
    observed_rain: Vec<f64>,
    typical_rain: Vec<f64>,
    soil_moisture: Vec<f64>,
    ndvi_anomaly: Vec<f64>,
    persistence_weeks: Vec<f64>,
}

impl RawGrid {
    /// Build a raw grid, rejecting empty shapes and arrays of the wrong length.
    pub fn new(
        shape: GridShape,
        observed_rain: Vec<f64>,
        typical_rain: Vec<f64>,
        soil_moisture: Vec<f64>,
        ndvi_anomaly: Vec<f64>,
        persistence_weeks: Vec<f64>,
    ) -> Result<Self, ProviderError> {
        if shape.is_empty() {
            return Err(ProviderError::EmptyGrid {
                rows: shape.rows,
                cols: shape.cols,
            });
        }
        let expected = shape.checked_len().ok_or(ProviderError::GridTooLarge {
            rows: shape.rows,
            cols: shape.cols,
        })?;
        for (signal, values) in [
            ("observed_rain", &observed_rain),
            ("typical_rain", &typical_rain),
            ("soil_moisture", &soil_moisture),
            ("ndvi_anomaly", &ndvi_anomaly),
            ("persistence_weeks", &persistence_weeks),
        ] {
            if values.len() != expected {
                return Err(ProviderError::ShapeMismatch {
                    signal: signal.to_string(),
                    rows: shape.rows,
                    cols: shape.cols,
                    expected,
                    actual: values.len(),
                });
            }
        }
        Ok(Self {
            shape,
            observed_rain,
            typical_rain,
            soil_moisture,
            ndvi_anomaly,
            persistence_weeks,
        })
    }

    /// A grid where every cell carries the same five samples.
    pub fn uniform(
        shape: GridShape,
        observed_rain: f64,
        typical_rain: f64,
        soil_moisture: f64,
        ndvi_anomaly: f64,
        persistence_weeks: f64,
    ) -> Result<Self, ProviderError> {
        let n = shape.checked_len().ok_or(ProviderError::GridTooLarge {
            rows: shape.rows,
            cols: shape.cols,
        })?;
        Self::new(
            shape,
            vec![observed_rain; n],
            vec![typical_rain; n],
            vec![soil_moisture; n],
            vec![ndvi_anomaly; n],
            vec![persistence_weeks; n],
        )
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn observed_rain(&self) -> &[f64] {
        &self.observed_rain
    }

    pub fn typical_rain(&self) -> &[f64] {
        &self.typical_rain
    }

    pub fn soil_moisture(&self) -> &[f64] {
        &self.soil_moisture
    }

    pub fn ndvi_anomaly(&self) -> &[f64] {
        &self.ndvi_anomaly
    }

    pub fn persistence_weeks(&self) -> &[f64] {
        &self.persistence_weeks
    }

    /// Overwrite the five samples of one cell.
    pub fn set_cell(&mut self, row: usize, col: usize, samples: [f64; 5]) {
        let idx = self.shape.index(row, col);
        self.observed_rain[idx] = samples[0];
        self.typical_rain[idx] = samples[1];
        self.soil_moisture[idx] = samples[2];
        self.ndvi_anomaly[idx] = samples[3];
        self.persistence_weeks[idx] = samples[4];
    }

    /// Percentage (0-100) of non-finite samples across all five arrays.
    pub fn missing_pct(&self) -> f64 {
        let total = self.shape.len() * 5;
        let missing = [
            &self.observed_rain,
            &self.typical_rain,
            &self.soil_moisture,
            &self.ndvi_anomaly,
            &self.persistence_weeks,
        ]
        .iter()
        .flat_map(|values| values.iter())
        .filter(|v| !v.is_finite())
        .count();
        100.0 * missing as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_index_roundtrip() {
        let shape = GridShape::new(3, 4);
        assert_eq!(shape.len(), 12);
        assert_eq!(shape.index(2, 1), 9);
        assert_eq!(shape.position(9), (2, 1));
    }

    #[test]
    fn rejects_mismatched_signal_length() {
        let shape = GridShape::new(2, 2);
        let err = RawGrid::new(
            shape,
            vec![1.0; 4],
            vec![1.0; 4],
            vec![0.5; 3],
            vec![0.0; 4],
            vec![0.0; 4],
        )
        .unwrap_err();
        match err {
            ProviderError::ShapeMismatch { signal, actual, .. } => {
                assert_eq!(signal, "soil_moisture");
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn overflowing_shape_is_an_error() {
        let shape = GridShape::new(usize::MAX, 2);
        assert_eq!(shape.checked_len(), None);
        assert!(!shape.is_empty());
        let err = RawGrid::new(shape, vec![], vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, ProviderError::GridTooLarge { rows: usize::MAX, cols: 2 }));
        let err = RawGrid::uniform(shape, 1.0, 1.0, 0.5, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, ProviderError::GridTooLarge { .. }));
    }

    #[test]
    fn rejects_empty_shape() {
        let err = RawGrid::uniform(GridShape::new(0, 5), 1.0, 1.0, 0.5, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, ProviderError::EmptyGrid { .. }));
    }

    #[test]
    fn missing_pct_counts_non_finite_samples() {
        let mut grid = RawGrid::uniform(GridShape::new(2, 2), 10.0, 10.0, 0.5, 0.0, 0.0).unwrap();
        assert_eq!(grid.missing_pct(), 0.0);
        grid.set_cell(0, 0, [f64::NAN, 10.0, f64::NAN, 0.0, 0.0]);
        // 2 of 20 samples
        assert!((grid.missing_pct() - 10.0).abs() < 1e-12);
    }
}
