//! Domain types shared across the worker crates.

pub mod grid;
pub mod metric;
pub mod records;
pub mod region;
pub mod severity;

pub use grid::{GridShape, RawGrid};
pub use metric::Metric;
pub use records::{AlertDetails, AlertRecord, IndicatorRecord, Provenance, RunRecord};
pub use region::GridCell;
pub use severity::{Confidence, Polarity, Severity, Thresholds};
