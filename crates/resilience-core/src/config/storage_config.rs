//! Storage configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATABASE_URL, DEFAULT_INITIAL_BACKOFF_MS, DEFAULT_MAX_ATTEMPTS};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite path, or ":memory:". Default: "resilience.db".
    pub database_url: Option<String>,
    /// Attempts for a run write that hits lock contention. Default: 3.
    pub max_attempts: Option<u32>,
    /// First backoff between attempts; doubles each retry. Default: 100ms.
    pub initial_backoff_ms: Option<u64>,
}

impl StorageConfig {
    pub fn effective_database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    pub fn effective_max_attempts(&self) -> u32 {
        self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    pub fn effective_initial_backoff_ms(&self) -> u64 {
        self.initial_backoff_ms.unwrap_or(DEFAULT_INITIAL_BACKOFF_MS)
    }
}
