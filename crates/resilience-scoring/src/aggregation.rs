//! Index aggregation: the worst contributing severity wins.

use rayon::prelude::*;
use resilience_core::errors::ScoringError;
use resilience_core::types::Severity;

/// Element-wise maximum over equal-length severity layers.
///
/// Order-independent and idempotent. No layers yields an empty result.
pub fn composite_max<L>(layers: &[L]) -> Result<Vec<Severity>, ScoringError>
where
    L: AsRef<[Severity]> + Sync,
{
    let Some((first, rest)) = layers.split_first() else {
        return Ok(Vec::new());
    };
    let first = first.as_ref();
    for layer in rest {
        let layer = layer.as_ref();
        if layer.len() != first.len() {
            return Err(ScoringError::LengthMismatch {
                left: first.len(),
                right: layer.len(),
            });
        }
    }
    Ok((0..first.len())
        .into_par_iter()
        .map(|i| {
            rest.iter()
                .fold(first[i], |acc, layer| acc.max(layer.as_ref()[i]))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sev(levels: &[u8]) -> Vec<Severity> {
        levels
            .iter()
            .map(|&l| Severity::from_level(l).unwrap())
            .collect()
    }

    #[test]
    fn pairwise_max() {
        let a = sev(&[0, 1, 2, 0]);
        let b = sev(&[1, 0, 1, 3]);
        assert_eq!(composite_max(&[&a, &b]).unwrap(), sev(&[1, 1, 2, 3]));
    }

    #[test]
    fn three_layers() {
        let a = sev(&[0, 0, 1]);
        let b = sev(&[0, 2, 0]);
        let c = sev(&[3, 0, 0]);
        assert_eq!(composite_max(&[&a, &b, &c]).unwrap(), sev(&[3, 2, 1]));
    }

    #[test]
    fn all_zero_placeholder_layer_is_neutral() {
        let a = sev(&[0, 1, 2, 3]);
        let zeros = vec![Severity::None; 4];
        assert_eq!(composite_max(&[&a, &zeros]).unwrap(), a);
    }

    #[test]
    fn single_layer_is_identity() {
        let a = sev(&[2, 0, 3]);
        assert_eq!(composite_max(&[&a]).unwrap(), a);
    }

    #[test]
    fn empty_inputs() {
        assert!(composite_max::<&[Severity]>(&[]).unwrap().is_empty());
        let empty: Vec<Severity> = Vec::new();
        assert!(composite_max(&[&empty, &empty]).unwrap().is_empty());
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let a = sev(&[0, 1]);
        let b = sev(&[0, 1, 2]);
        let err = composite_max(&[&a, &b]).unwrap_err();
        assert!(matches!(err, ScoringError::LengthMismatch { left: 2, right: 3 }));
    }
}
