//! Property tests for the classifier, aggregator, and confidence estimator.

use proptest::prelude::*;
use resilience_core::types::{Confidence, GridShape, RawGrid, Severity, Thresholds};
use resilience_scoring::{
    classify, composite_max, compute_scores, confidence_from_inputs, ScoringThresholds,
};

fn severity() -> impl Strategy<Value = Severity> {
    (0u8..=3).prop_map(|l| Severity::from_level(l).unwrap())
}

/// Strictly ascending cut points with some room between them.
fn ascending() -> impl Strategy<Value = (f64, f64, f64)> {
    (-100.0f64..100.0, 0.01f64..50.0, 0.01f64..50.0).prop_map(|(a, d1, d2)| (a, a + d1, a + d1 + d2))
}

proptest! {
    #[test]
    fn higher_worse_bands_hold((t1, t2, t3) in ascending(), x in -300.0f64..300.0) {
        let t = Thresholds::higher_worse(t1, t2, t3);
        let expected = if x < t1 {
            0
        } else if x < t2 {
            1
        } else if x < t3 {
            2
        } else {
            3
        };
        prop_assert_eq!(classify(x, &t).level(), expected);
    }

    #[test]
    fn lower_worse_bands_hold((t3, t2, t1) in ascending(), x in -300.0f64..300.0) {
        let t = Thresholds::lower_worse(t1, t2, t3);
        let expected = if x >= t1 {
            0
        } else if x >= t2 {
            1
        } else if x >= t3 {
            2
        } else {
            3
        };
        prop_assert_eq!(classify(x, &t).level(), expected);
    }

    #[test]
    fn composite_max_commutes(pairs in prop::collection::vec((severity(), severity()), 0..64)) {
        let (a, b): (Vec<Severity>, Vec<Severity>) = pairs.into_iter().unzip();
        prop_assert_eq!(composite_max(&[&a, &b]).unwrap(), composite_max(&[&b, &a]).unwrap());
    }

    #[test]
    fn composite_max_is_idempotent(a in prop::collection::vec(severity(), 0..64)) {
        prop_assert_eq!(composite_max(&[&a, &a]).unwrap(), a);
    }

    #[test]
    fn composite_max_dominates_inputs(triples in prop::collection::vec((severity(), severity(), severity()), 1..64)) {
        let a: Vec<Severity> = triples.iter().map(|t| t.0).collect();
        let b: Vec<Severity> = triples.iter().map(|t| t.1).collect();
        let c: Vec<Severity> = triples.iter().map(|t| t.2).collect();
        let out = composite_max(&[&a, &b, &c]).unwrap();
        for i in 0..out.len() {
            prop_assert!(out[i] >= a[i] && out[i] >= b[i] && out[i] >= c[i]);
            prop_assert!(out[i] == a[i] || out[i] == b[i] || out[i] == c[i]);
            prop_assert!(out[i].level() <= 3);
        }
    }

    #[test]
    fn cri_is_max_of_domain_indices(
        cells in prop::collection::vec(
            (0.0f64..60.0, 0.0f64..60.0, 0.0f64..1.0, -0.6f64..0.6, 0.0f64..9.0),
            1..48,
        )
    ) {
        let n = cells.len();
        let grid = RawGrid::new(
            GridShape::new(1, n),
            cells.iter().map(|c| c.0).collect(),
            cells.iter().map(|c| c.1).collect(),
            cells.iter().map(|c| c.2).collect(),
            cells.iter().map(|c| c.3).collect(),
            cells.iter().map(|c| c.4.floor()).collect(),
        )
        .unwrap();
        let scores = compute_scores(&grid, &ScoringThresholds::default()).unwrap();
        for i in 0..n {
            let c = scores.cell(i);
            prop_assert_eq!(c.msi, Severity::None);
            prop_assert_eq!(c.cri, c.wsi.max(c.fsi).max(c.msi));
            prop_assert_eq!(c.wsi, c.rain_sev.max(c.soil_sev).max(c.pers_sev));
            prop_assert_eq!(c.fsi, c.veg_sev.max(c.pers_sev).max(c.rain_sev));
        }
    }

    #[test]
    fn too_much_missing_is_always_low(missing in 10.0f64..100.0, fresh in 0.0f64..1000.0, cadence in 1.0f64..500.0) {
        prop_assert_eq!(confidence_from_inputs(missing, fresh, cadence), Confidence::Low);
    }

    #[test]
    fn freshness_bands(missing in 0.0f64..9.99, cadence in 1.0f64..500.0, factor in 0.0f64..4.0) {
        let fresh = cadence * factor;
        let expected = if fresh <= cadence {
            Confidence::High
        } else if fresh <= cadence * 2.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        };
        prop_assert_eq!(confidence_from_inputs(missing, fresh, cadence), expected);
    }
}
