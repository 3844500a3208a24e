//! `resilience-worker`: run one scoring pass and exit.
//!
//! Exit status is 0 on a committed run and 1 otherwise. The run summary is
//! printed to stdout as one JSON line.

use resilience_core::config::ResilienceConfig;
use resilience_core::errors::{ErrorCode, RunError};
use resilience_core::tracing::init_tracing;
use resilience_storage::DatabaseManager;
use resilience_worker::providers::build_provider;
use resilience_worker::{Orchestrator, RunSummary};

fn run() -> Result<RunSummary, RunError> {
    let config_path = ResilienceConfig::discover_path();
    let config = ResilienceConfig::load(config_path.as_deref())?;
    let provider = build_provider(&config)?;
    let orchestrator = Orchestrator::new(&config)?;
    let db = DatabaseManager::open_url(config.storage.effective_database_url())?;

    let summary = orchestrator.run_once(provider.as_ref(), &db)?;
    if let Err(e) = db.checkpoint() {
        tracing::warn!(error = %e, "WAL checkpoint failed after commit");
    }
    Ok(summary)
}

fn main() {
    init_tracing();

    match run() {
        Ok(summary) => match serde_json::to_string(&summary) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!(error = %e, "failed to render run summary"),
        },
        Err(e) => {
            tracing::error!(code = e.error_code(), "{}", e.operator_string());
            std::process::exit(1);
        }
    }
}
