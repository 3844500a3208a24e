//! Configuration for the worker.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod grid_config;
pub mod resilience_config;
pub mod run_config;
pub mod scoring_config;
pub mod storage_config;

pub use grid_config::GridConfig;
pub use resilience_config::ResilienceConfig;
pub use run_config::RunConfig;
pub use scoring_config::{ScoringConfig, ThresholdSet};
pub use storage_config::StorageConfig;
