//! The scoring worker: pulls a raw signal grid from a provider, scores it,
//! and persists one run as a unit.

pub mod alerts;
pub mod cells;
pub mod orchestrator;
pub mod providers;
pub mod summary;

pub use orchestrator::Orchestrator;
pub use summary::RunSummary;
