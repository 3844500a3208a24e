//! Scoring throughput over a global grid.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resilience_core::types::{GridShape, RawGrid};
use resilience_scoring::{compute_scores, ScoringThresholds};

fn banded_grid(shape: GridShape) -> RawGrid {
    let n = shape.len();
    let observed = (0..n).map(|i| 5.0 + (i % 37) as f64).collect();
    let typical = (0..n).map(|i| 10.0 + (i % 11) as f64).collect();
    let soil = (0..n).map(|i| (i % 100) as f64 / 100.0).collect();
    let ndvi = (0..n).map(|i| ((i % 60) as f64 - 30.0) / 100.0).collect();
    let persistence = (0..n).map(|i| (i % 9) as f64).collect();
    RawGrid::new(shape, observed, typical, soil, ndvi, persistence).unwrap()
}

fn bench_compute_scores(c: &mut Criterion) {
    let thresholds = ScoringThresholds::default();
    let default_grid = banded_grid(GridShape::new(120, 240));
    c.bench_function("compute_scores_120x240", |b| {
        b.iter(|| compute_scores(black_box(&default_grid), &thresholds).unwrap())
    });

    let fine_grid = banded_grid(GridShape::new(720, 1440));
    c.bench_function("compute_scores_720x1440", |b| {
        b.iter(|| compute_scores(black_box(&fine_grid), &thresholds).unwrap())
    });
}

criterion_group!(benches, bench_compute_scores);
criterion_main!(benches);
