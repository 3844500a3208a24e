//! Grid cell identity.
//!
//! A cell's identifier depends only on its snapped center and the grid step,
//! never on where it sits in a provider's array. Re-gridding at the same step
//! therefore reproduces the same identifiers run after run.

use serde::{Deserialize, Serialize};

/// A fixed-size lat/lon tile identified by its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub lat: f64,
    pub lon: f64,
    pub step: f64,
}

impl GridCell {
    pub fn new(lat: f64, lon: f64, step: f64) -> Self {
        Self { lat, lon, step }
    }

    /// `grid_<step>_lat_<lat>_lon_<lon>` with the step's decimal point
    /// written as `p` and coordinates rounded to two decimals.
    pub fn region_id(&self) -> String {
        format!(
            "grid_{}_lat_{:.2}_lon_{:.2}",
            step_token(self.step),
            self.lat,
            self.lon
        )
    }
}

/// Render the step with at least one decimal so `1.0` becomes `1p0`.
fn step_token(step: f64) -> String {
    let mut rendered = format!("{step}");
    if !rendered.contains('.') {
        rendered.push_str(".0");
    }
    rendered.replace('.', "p")
}
