//! Indicator metric names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight metrics written per cell per run: four raw signals kept for
/// audit and the four derived indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    RainAnom,
    SoilPct,
    NdviAnom,
    PersistenceWk,
    Wsi,
    Fsi,
    Msi,
    Cri,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RainAnom => "rain_anom",
            Self::SoilPct => "soil_pct",
            Self::NdviAnom => "ndvi_anom",
            Self::PersistenceWk => "persistence_wk",
            Self::Wsi => "wsi",
            Self::Fsi => "fsi",
            Self::Msi => "msi",
            Self::Cri => "cri",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
