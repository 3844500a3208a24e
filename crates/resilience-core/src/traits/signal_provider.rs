//! The signal provider contract.

use crate::errors::ProviderError;
use crate::types::{GridShape, RawGrid};

/// One provider pull: the raw grid plus how old the data is.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalBatch {
    pub grid: RawGrid,
    /// Minutes since the underlying sources last updated.
    pub freshness_min: f64,
}

/// Anything that can supply the four raw signals per cell.
///
/// The synthetic generator and a satellite adapter are interchangeable as
/// long as they honor the requested shape.
pub trait SignalProvider {
    /// Adapter tag written to run rows and provenance.
    fn name(&self) -> &str;

    /// Produce one raw grid of the given shape.
    fn load(&self, shape: GridShape) -> Result<SignalBatch, ProviderError>;
}
