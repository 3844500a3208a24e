//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "RESILIENCE_LOG";

/// Filter used when `RESILIENCE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "resilience=info";

/// Initialize the worker's tracing/logging system.
///
/// Reads `RESILIENCE_LOG` for per-crate log levels, e.g.
/// `RESILIENCE_LOG=resilience_storage=debug,resilience_worker=info`.
///
/// Events go to stderr so stdout carries only the run summary.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // try_init: a test harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
