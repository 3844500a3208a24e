//! Array position to grid cell addressing.

use std::collections::HashSet;

use resilience_core::errors::ConfigError;
use resilience_core::types::{GridCell, GridShape};

/// A grid position with its snapped cell and identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct CellAddress {
    pub index: usize,
    pub cell: GridCell,
    pub region_id: String,
}

/// Snap a coordinate to the center of its step-sized bin.
pub fn snap(value: f64, step: f64) -> f64 {
    (value / step).floor() * step + step / 2.0
}

/// Center of the cell at `(row, col)` when `shape` spans the whole globe,
/// snapped to the `step` lattice.
pub fn cell_center(row: usize, col: usize, shape: GridShape, step: f64) -> GridCell {
    let lat = 90.0 - (row as f64 + 0.5) * (180.0 / shape.rows as f64);
    let lon = -180.0 + (col as f64 + 0.5) * (360.0 / shape.cols as f64);
    GridCell::new(snap(lat, step), snap(lon, step), step)
}

/// Address every position of the grid in row-major order.
///
/// Fails if two positions share an identifier, which happens when the step
/// is coarser than the grid spacing.
pub fn address_grid(shape: GridShape, step: f64) -> Result<Vec<CellAddress>, ConfigError> {
    let len = shape.checked_len().ok_or_else(|| ConfigError::ValidationFailed {
        field: "grid.rows/grid.cols".to_string(),
        message: format!("{}x{} cells overflows the addressable grid", shape.rows, shape.cols),
    })?;
    let mut seen = HashSet::with_capacity(len);
    let mut addresses = Vec::with_capacity(len);
    for index in 0..len {
        let (row, col) = shape.position(index);
        let cell = cell_center(row, col, shape, step);
        let region_id = cell.region_id();
        if !seen.insert(region_id.clone()) {
            return Err(ConfigError::ValidationFailed {
                field: "grid.step_deg".to_string(),
                message: format!(
                    "step {step} is coarser than the {}x{} grid spacing: cell ({row}, {col}) repeats {region_id}",
                    shape.rows, shape.cols
                ),
            });
        }
        addresses.push(CellAddress {
            index,
            cell,
            region_id,
        });
    }
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cells() {
        let shape = GridShape::new(120, 240);
        let first = cell_center(0, 0, shape, 0.25);
        assert_eq!(first.lat, 89.375);
        assert_eq!(first.lon, -179.125);
        assert_eq!(first.step, 0.25);
        let last = cell_center(119, 239, shape, 0.25);
        assert_eq!(last.lat, -89.125);
        assert_eq!(last.lon, 179.375);
    }

    #[test]
    fn snapping_floors_into_bins() {
        assert_eq!(snap(0.1, 0.25), 0.125);
        assert_eq!(snap(-0.1, 0.25), -0.125);
        assert_eq!(snap(10.5, 1.0), 10.5);
        assert_eq!(snap(10.0, 1.0), 10.5);
    }

    #[test]
    fn equator_cells_stay_distinct() {
        // Spacing equals the step: one cell either side of 0.
        let addresses = address_grid(GridShape::new(720, 4), 0.25).unwrap();
        assert_eq!(addresses.len(), 2880);
    }

    #[test]
    fn coarse_step_is_rejected() {
        let err = address_grid(GridShape::new(360, 2), 1.0).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "grid.step_deg"));
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        let err = address_grid(GridShape::new(usize::MAX, 3), 0.25).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "grid.rows/grid.cols"));
    }

    #[test]
    fn addressing_is_repeatable() {
        let a = address_grid(GridShape::new(12, 24), 0.25).unwrap();
        let b = address_grid(GridShape::new(12, 24), 0.25).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[5].index, 5);
    }
}
