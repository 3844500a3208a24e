//! Seams between the worker and its collaborators.

pub mod signal_provider;

pub use signal_provider::{SignalBatch, SignalProvider};
