//! One scoring pass: load, score, persist.
//!
//! Everything a run writes (the run row, region upserts, eight indicators
//! per cell and the composite alerts) goes through a single `BEGIN IMMEDIATE`
//! transaction. A failure anywhere rolls the whole run back; lock contention
//! is retried with backoff.

use std::time::Instant;

use chrono::{DateTime, Utc};
use resilience_core::config::ResilienceConfig;
use resilience_core::constants::PROVENANCE_ASSUMPTION;
use resilience_core::errors::{ConfigError, ProviderError, RunError, StorageError};
use resilience_core::traits::SignalProvider;
use resilience_core::types::{
    Confidence, GridShape, IndicatorRecord, Metric, Provenance, RawGrid, RunRecord, Severity,
};
use resilience_scoring::{compute_scores, confidence_from_inputs, IndexGrid, ScoringThresholds};
use resilience_storage::connection::writer::with_immediate_transaction;
use resilience_storage::queries::{alerts, format_utc, indicators, regions, runs};
use resilience_storage::{with_retry, DatabaseManager, RetryPolicy};
use rusqlite::Transaction;

use crate::alerts::{build_alert, AlertWindow};
use crate::cells::{address_grid, CellAddress};
use crate::summary::RunSummary;

/// Drives runs with settings resolved once from [`ResilienceConfig`].
#[derive(Debug, Clone)]
pub struct Orchestrator {
    shape: GridShape,
    step_deg: f64,
    thresholds: ScoringThresholds,
    cadence_min: f64,
    version: String,
    notes: String,
    alert_window_days: u32,
    retry: RetryPolicy,
}

/// Row counts produced by one committed transaction.
#[derive(Debug, Default, Clone, Copy)]
struct WriteCounts {
    run_db_id: i64,
    new_regions: usize,
    indicators: usize,
    alerts_elevated: usize,
    alerts_severe: usize,
}

/// Everything computed before the write transaction opens.
struct PreparedRun<'a> {
    run: RunRecord,
    grid: &'a RawGrid,
    scores: &'a IndexGrid,
    addresses: &'a [CellAddress],
    confidence: Confidence,
    provenance: String,
    updated_utc: String,
    window: AlertWindow,
}

impl Orchestrator {
    pub fn new(config: &ResilienceConfig) -> Result<Self, RunError> {
        ResilienceConfig::validate(config)?;
        Ok(Self {
            shape: config.grid.effective_shape(),
            step_deg: config.grid.effective_step_deg(),
            thresholds: ScoringThresholds::from_config(&config.scoring)?,
            cadence_min: config.scoring.effective_cadence_min(),
            version: config.run.effective_version(),
            notes: config.run.effective_notes().to_string(),
            alert_window_days: config.run.effective_alert_window_days(),
            retry: RetryPolicy::from_config(&config.storage),
        })
    }

    /// Run one pass stamped with the current wall clock.
    pub fn run_once(
        &self,
        provider: &dyn SignalProvider,
        db: &DatabaseManager,
    ) -> Result<RunSummary, RunError> {
        self.run_once_at(provider, db, Utc::now())
    }

    /// Run one pass stamped with `now`.
    ///
    /// Nothing is written unless the provider's grid matches the configured
    /// shape and every cell has a distinct identifier.
    pub fn run_once_at(
        &self,
        provider: &dyn SignalProvider,
        db: &DatabaseManager,
        now: DateTime<Utc>,
    ) -> Result<RunSummary, RunError> {
        let started = Instant::now();
        let adapter = provider.name().to_string();

        let batch = provider.load(self.shape)?;
        let actual = batch.grid.shape();
        if actual != self.shape {
            return Err(ProviderError::UnexpectedShape {
                rows: self.shape.rows,
                cols: self.shape.cols,
                actual_rows: actual.rows,
                actual_cols: actual.cols,
            }
            .into());
        }

        let addresses = address_grid(self.shape, self.step_deg)?;
        let scores = compute_scores(&batch.grid, &self.thresholds)?;
        let missing_pct = batch.grid.missing_pct();
        let confidence = confidence_from_inputs(missing_pct, batch.freshness_min, self.cadence_min);

        let run = RunRecord {
            run_id: RunRecord::run_id_for(now),
            run_time: now,
            version: self.version.clone(),
            adapter: adapter.clone(),
            notes: self.notes.clone(),
        };
        let provenance = indicators::encode_provenance(&Provenance {
            adapter: adapter.clone(),
            assumption: PROVENANCE_ASSUMPTION.to_string(),
            run_id: run.run_id.clone(),
        })?;
        let window = AlertWindow::ending_at(now, self.alert_window_days).ok_or_else(|| {
            ConfigError::ValidationFailed {
                field: "run.alert_window_days".to_string(),
                message: format!(
                    "{} days before {} is outside the supported date range",
                    self.alert_window_days, run.run_id
                ),
            }
        })?;
        let prepared = PreparedRun {
            run,
            grid: &batch.grid,
            scores: &scores,
            addresses: &addresses,
            confidence,
            provenance,
            updated_utc: format_utc(now),
            window,
        };

        tracing::info!(
            run_id = %prepared.run.run_id,
            adapter = %adapter,
            cells = addresses.len(),
            missing_pct,
            freshness_min = batch.freshness_min,
            confidence = %confidence,
            "scored grid, persisting run"
        );

        let mut attempts = 0;
        let counts = with_retry(&self.retry, "persist run", |attempt| {
            attempts = attempt;
            db.with_writer(|conn| with_immediate_transaction(conn, |tx| prepared.write(tx)))
        })?;

        let summary = RunSummary {
            run_id: prepared.run.run_id,
            run_db_id: counts.run_db_id,
            adapter,
            cells: addresses.len(),
            new_regions: counts.new_regions,
            indicators: counts.indicators,
            alerts_elevated: counts.alerts_elevated,
            alerts_severe: counts.alerts_severe,
            confidence,
            missing_pct,
            freshness_min: batch.freshness_min,
            attempts,
            duration_ms: started.elapsed().as_millis() as u64,
        };
        tracing::info!(
            run_id = %summary.run_id,
            cells = summary.cells,
            confidence = %summary.confidence,
            new_regions = summary.new_regions,
            indicators = summary.indicators,
            alerts_elevated = summary.alerts_elevated,
            alerts_severe = summary.alerts_severe,
            attempts = summary.attempts,
            duration_ms = summary.duration_ms,
            "run committed"
        );
        Ok(summary)
    }
}

impl PreparedRun<'_> {
    fn write(&self, tx: &Transaction<'_>) -> Result<WriteCounts, StorageError> {
        let mut counts = WriteCounts {
            run_db_id: runs::insert_run(tx, &self.run)?,
            ..Default::default()
        };

        for address in self.addresses {
            if regions::upsert_region(tx, &address.cell)? {
                counts.new_regions += 1;
            }

            let cell = self.scores.cell(address.index);
            for indicator in self.cell_indicators(address) {
                indicators::insert_indicator(
                    tx,
                    counts.run_db_id,
                    &indicator,
                    &self.provenance,
                    &self.updated_utc,
                )?;
                counts.indicators += 1;
            }

            if let Some(alert) = build_alert(
                &address.region_id,
                &cell,
                self.confidence,
                self.window,
                self.run.run_time,
            ) {
                alerts::insert_alert(tx, counts.run_db_id, &alert)?;
                match alert.severity {
                    Severity::Severe => counts.alerts_severe += 1,
                    _ => counts.alerts_elevated += 1,
                }
            }
        }
        Ok(counts)
    }

    /// The four raw signals with their own severities, then the four indices.
    fn cell_indicators(&self, address: &CellAddress) -> [IndicatorRecord; 8] {
        let i = address.index;
        let cell = self.scores.cell(i);
        let record = |metric: Metric, value: f64, severity: Severity| IndicatorRecord {
            region_id: address.region_id.clone(),
            metric,
            value: Some(value).filter(|v| v.is_finite()),
            severity,
            confidence: self.confidence,
        };
        let index = |metric: Metric, severity: Severity| {
            record(metric, f64::from(severity.level()), severity)
        };
        [
            record(Metric::RainAnom, cell.rain_anom, cell.rain_sev),
            record(Metric::SoilPct, self.grid.soil_moisture()[i], cell.soil_sev),
            record(Metric::NdviAnom, self.grid.ndvi_anomaly()[i], cell.veg_sev),
            record(Metric::PersistenceWk, self.grid.persistence_weeks()[i], cell.pers_sev),
            index(Metric::Wsi, cell.wsi),
            index(Metric::Fsi, cell.fsi),
            index(Metric::Msi, cell.msi),
            index(Metric::Cri, cell.cri),
        ]
    }
}
