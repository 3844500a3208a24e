//! Core types, errors, configuration, tracing, and constants shared by the
//! resilience scoring worker crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
