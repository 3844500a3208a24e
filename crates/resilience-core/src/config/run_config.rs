//! Run configuration: producer tags and adapter selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ADAPTER, DEFAULT_ALERT_WINDOW_DAYS, DEFAULT_RUN_NOTES, DEFAULT_SYNTHETIC_SEED, VERSION,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// Producer version tag. Default: crate version.
    pub version: Option<String>,
    /// Signal adapter: "synthetic" or "file". Default: "synthetic".
    pub adapter: Option<String>,
    /// Free-text notes stored on the run row.
    pub notes: Option<String>,
    /// JSON grid document read by the "file" adapter.
    pub input_path: Option<PathBuf>,
    /// Seed for the synthetic adapter. Default: 7.
    pub seed: Option<u64>,
    /// Days before the run time at which alert validity starts. Default: 30.
    pub alert_window_days: Option<u32>,
}

impl RunConfig {
    pub fn effective_version(&self) -> String {
        self.version.clone().unwrap_or_else(|| VERSION.to_string())
    }

    pub fn effective_adapter(&self) -> &str {
        self.adapter.as_deref().unwrap_or(DEFAULT_ADAPTER)
    }

    pub fn effective_notes(&self) -> &str {
        self.notes.as_deref().unwrap_or(DEFAULT_RUN_NOTES)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SYNTHETIC_SEED)
    }

    pub fn effective_alert_window_days(&self) -> u32 {
        self.alert_window_days.unwrap_or(DEFAULT_ALERT_WINDOW_DAYS)
    }
}
