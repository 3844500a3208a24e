//! Property tests over whole runs: alert emission and addressing.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use resilience_core::config::ResilienceConfig;
use resilience_core::types::{GridShape, RawGrid};
use resilience_scoring::{compute_scores, ScoringThresholds};
use resilience_storage::queries::{alerts, indicators};
use resilience_storage::DatabaseManager;
use resilience_worker::cells::address_grid;
use resilience_worker::providers::FixedProvider;
use resilience_worker::Orchestrator;

const ROWS: usize = 3;
const COLS: usize = 4;

fn cell_samples() -> impl Strategy<Value = [f64; 5]> {
    (
        0.0f64..20.0,
        1.0f64..20.0,
        0.0f64..1.0,
        -0.6f64..0.6,
        (0u8..9).prop_map(f64::from),
    )
        .prop_map(|(obs, typ, soil, ndvi, pers)| [obs, typ, soil, ndvi, pers])
}

fn grid() -> impl Strategy<Value = RawGrid> {
    prop::collection::vec(cell_samples(), ROWS * COLS).prop_map(|cells| {
        let mut grid = RawGrid::uniform(GridShape::new(ROWS, COLS), 1.0, 1.0, 0.5, 0.0, 0.0).unwrap();
        for (index, samples) in cells.into_iter().enumerate() {
            grid.set_cell(index / COLS, index % COLS, samples);
        }
        grid
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn one_alert_per_cell_at_or_above_warning(grid in grid()) {
        let config = ResilienceConfig::from_toml(&format!("[grid]\nrows = {ROWS}\ncols = {COLS}\n")).unwrap();
        let expected = compute_scores(&grid, &ScoringThresholds::default())
            .unwrap()
            .cri
            .iter()
            .filter(|s| s.level() >= 2)
            .count();

        let db = DatabaseManager::open_in_memory().unwrap();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let summary = Orchestrator::new(&config)
            .unwrap()
            .run_once_at(&FixedProvider::new(grid), &db, now)
            .unwrap();

        prop_assert_eq!(summary.alerts(), expected);
        let (alert_rows, cri_rows) = db
            .with_writer(|conn| {
                let alert_rows = alerts::query_for_run(conn, summary.run_db_id)?;
                let cri_rows: Vec<_> = indicators::query_for_run(conn, summary.run_db_id)?
                    .into_iter()
                    .filter(|r| r.metric == "cri")
                    .collect();
                Ok((alert_rows, cri_rows))
            })
            .unwrap();
        prop_assert_eq!(alert_rows.len(), expected);
        for cri in &cri_rows {
            let alerted = alert_rows.iter().any(|a| a.region_id == cri.region_id);
            prop_assert_eq!(alerted, cri.severity >= 2);
        }
    }

    #[test]
    fn addressing_is_a_pure_function_of_shape_and_step(
        rows in 1usize..40,
        cols in 1usize..40,
        step in prop::sample::select(vec![0.1f64, 0.25, 0.5, 1.0]),
    ) {
        let shape = GridShape::new(rows, cols);
        let first = address_grid(shape, step).unwrap();
        let second = address_grid(shape, step).unwrap();
        prop_assert_eq!(first.len(), rows * cols);
        prop_assert_eq!(first, second);
    }
}
