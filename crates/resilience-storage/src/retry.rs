//! Retry with exponential backoff for writes that hit lock contention.

use std::time::Duration;

use resilience_core::config::StorageConfig;
use resilience_core::errors::StorageError;

/// Upper bound on a single backoff sleep.
const MAX_BACKOFF: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. Always at least 1.
    pub max_attempts: u32,
    /// Sleep before the second attempt; doubles each retry.
    pub initial_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            max_attempts: config.effective_max_attempts().max(1),
            initial_backoff: Duration::from_millis(config.effective_initial_backoff_ms()),
        }
    }

    /// Sleep before attempt `attempt` (1-based, so attempt 2 is the first retry).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let doublings = attempt.saturating_sub(2).min(16);
        self.initial_backoff
            .saturating_mul(1u32 << doublings)
            .min(MAX_BACKOFF)
    }
}

/// Run `op` until it succeeds, fails with a non-transient error, or the
/// policy's attempts are used up. `op` receives the 1-based attempt number.
///
/// Only [`StorageError::is_transient`] errors are retried; anything else
/// surfaces immediately.
pub fn with_retry<T, F>(policy: &RetryPolicy, what: &str, mut op: F) -> Result<T, StorageError>
where
    F: FnMut(u32) -> Result<T, StorageError>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && attempt < max_attempts => {
                let backoff = policy.backoff_for(attempt + 1);
                tracing::warn!(
                    what,
                    attempt,
                    max_attempts,
                    backoff_ms = backoff.as_millis() as u64,
                    error = %e,
                    "transient storage error, retrying"
                );
                std::thread::sleep(backoff);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            initial_backoff: Duration::from_millis(1),
        }
    }

    fn busy() -> StorageError {
        StorageError::Busy {
            message: "database is locked".to_string(),
        }
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            max_attempts: 10,
            initial_backoff: Duration::from_millis(100),
        };
        assert_eq!(policy.backoff_for(2), Duration::from_millis(100));
        assert_eq!(policy.backoff_for(3), Duration::from_millis(200));
        assert_eq!(policy.backoff_for(4), Duration::from_millis(400));
        assert_eq!(policy.backoff_for(30), MAX_BACKOFF);
    }

    #[test]
    fn retries_busy_until_success() {
        let mut calls = 0;
        let result = with_retry(&fast(3), "test", |attempt| {
            calls += 1;
            if attempt < 3 {
                Err(busy())
            } else {
                Ok(attempt)
            }
        });
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls, 3);
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let mut calls = 0;
        let result: Result<(), _> = with_retry(&fast(2), "test", |_| {
            calls += 1;
            Err(busy())
        });
        assert!(matches!(result, Err(StorageError::Busy { .. })));
        assert_eq!(calls, 2);
    }

    #[test]
    fn hard_errors_are_not_retried() {
        let mut calls = 0;
        let result: Result<(), _> = with_retry(&fast(5), "test", |_| {
            calls += 1;
            Err(StorageError::SqliteError {
                message: "UNIQUE constraint failed".to_string(),
            })
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn policy_from_config_never_zero() {
        let config = StorageConfig {
            max_attempts: Some(0),
            initial_backoff_ms: Some(50),
            ..Default::default()
        };
        let policy = RetryPolicy::from_config(&config);
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.initial_backoff, Duration::from_millis(50));
    }
}
