//! Reads a pre-gridded JSON document from disk.
//!
//! ```json
//! {
//!   "rows": 2, "cols": 2,
//!   "freshness_min": 45.0,
//!   "observed_rain": [10.0, 4.5, null, 8.0],
//!   "typical_rain": [10.0, 10.0, 10.0, 10.0],
//!   "soil_moisture": [0.5, 0.5, 0.12, 0.4],
//!   "ndvi_anomaly": [0.0, -0.1, 0.0, 0.05],
//!   "persistence_weeks": [0, 1, 5, 0]
//! }
//! ```
//!
//! Arrays are row-major; `null` marks a missing sample.

use std::path::PathBuf;

use resilience_core::errors::ProviderError;
use resilience_core::traits::{SignalBatch, SignalProvider};
use resilience_core::types::{GridShape, RawGrid};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GridDocument {
    rows: usize,
    cols: usize,
    #[serde(default)]
    freshness_min: f64,
    observed_rain: Vec<Option<f64>>,
    typical_rain: Vec<Option<f64>>,
    soil_moisture: Vec<Option<f64>>,
    ndvi_anomaly: Vec<Option<f64>>,
    persistence_weeks: Vec<Option<f64>>,
}

fn samples(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_document(&self) -> Result<GridDocument, ProviderError> {
        let path = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path).map_err(|e| ProviderError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ProviderError::Decode {
            path,
            message: e.to_string(),
        })
    }
}

impl SignalProvider for FileProvider {
    fn name(&self) -> &str {
        "file"
    }

    /// The document's own shape is returned as-is; the orchestrator rejects
    /// it if it differs from the requested one.
    fn load(&self, _shape: GridShape) -> Result<SignalBatch, ProviderError> {
        let doc = self.read_document()?;
        let grid = RawGrid::new(
            GridShape::new(doc.rows, doc.cols),
            samples(doc.observed_rain),
            samples(doc.typical_rain),
            samples(doc.soil_moisture),
            samples(doc.ndvi_anomaly),
            samples(doc.persistence_weeks),
        )?;
        tracing::debug!(path = %self.path.display(), rows = doc.rows, cols = doc.cols, "loaded grid document");
        Ok(SignalBatch {
            grid,
            freshness_min: doc.freshness_min,
        })
    }
}
