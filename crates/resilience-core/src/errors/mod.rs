//! Error handling for the scoring worker.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod provider_error;
pub mod run_error;
pub mod scoring_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use provider_error::ProviderError;
pub use run_error::RunError;
pub use scoring_error::ScoringError;
pub use storage_error::StorageError;
