//! Severity classification, index aggregation, and confidence estimation.
//!
//! Every function here is pure and element-wise: no cell's result depends
//! on another cell, so grids are processed in parallel with `rayon`.

pub mod aggregation;
pub mod classifier;
pub mod confidence;
pub mod indices;

pub use aggregation::composite_max;
pub use classifier::{classify, classify_grid};
pub use confidence::confidence_from_inputs;
pub use indices::{compute_scores, CellScores, IndexGrid, ScoringThresholds};
