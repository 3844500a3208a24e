//! Grid configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_GRID_STEP_DEG};
use crate::types::GridShape;

/// Shape of the scored grid and the step of the addressing lattice.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridConfig {
    /// Cell size in degrees. Default: 0.25.
    pub step_deg: Option<f64>,
    /// Rows requested from the provider. Default: 120.
    pub rows: Option<usize>,
    /// Columns requested from the provider. Default: 240.
    pub cols: Option<usize>,
}

impl GridConfig {
    pub fn effective_step_deg(&self) -> f64 {
        self.step_deg.unwrap_or(DEFAULT_GRID_STEP_DEG)
    }

    pub fn effective_shape(&self) -> GridShape {
        GridShape::new(
            self.rows.unwrap_or(DEFAULT_GRID_ROWS),
            self.cols.unwrap_or(DEFAULT_GRID_COLS),
        )
    }
}
