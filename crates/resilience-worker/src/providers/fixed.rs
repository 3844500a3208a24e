//! A provider that hands back a grid it was built with.

use resilience_core::errors::ProviderError;
use resilience_core::traits::{SignalBatch, SignalProvider};
use resilience_core::types::{GridShape, RawGrid};

/// Serves a prepared grid on every load. Useful for replays and tests.
#[derive(Debug, Clone)]
pub struct FixedProvider {
    name: String,
    batch: SignalBatch,
}

impl FixedProvider {
    pub fn new(grid: RawGrid) -> Self {
        Self {
            name: "fixed".to_string(),
            batch: SignalBatch {
                grid,
                freshness_min: 0.0,
            },
        }
    }

    pub fn with_freshness(mut self, freshness_min: f64) -> Self {
        self.batch.freshness_min = freshness_min;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl SignalProvider for FixedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, _shape: GridShape) -> Result<SignalBatch, ProviderError> {
        Ok(self.batch.clone())
    }
}
