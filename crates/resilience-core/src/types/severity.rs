//! Ordinal severity, threshold sets, and the confidence label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Ordinal stress level. The enum makes values outside 0..=3 unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Severity {
    #[default]
    None = 0,
    Watch = 1,
    Warning = 2,
    Severe = 3,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::None, Self::Watch, Self::Warning, Self::Severe];

    pub fn level(self) -> u8 {
        self as u8
    }

    /// Map a stored level back to a severity.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::None),
            1 => Some(Self::Watch),
            2 => Some(Self::Warning),
            3 => Some(Self::Severe),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Watch => "watch",
            Self::Warning => "warning",
            Self::Severe => "severe",
        }
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> Self {
        s.level()
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| format!("severity out of range: {level}"))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which direction of a signal indicates stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherWorse,
    LowerWorse,
}

/// Three cut points plus a polarity.
///
/// `HigherWorse` expects `t1 < t2 < t3`; `LowerWorse` expects `t1 > t2 > t3`
/// (e.g. soil moisture 0.30 / 0.20 / 0.10).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub t1: f64,
    pub t2: f64,
    pub t3: f64,
    pub polarity: Polarity,
}

impl Thresholds {
    pub const fn higher_worse(t1: f64, t2: f64, t3: f64) -> Self {
        Self {
            t1,
            t2,
            t3,
            polarity: Polarity::HigherWorse,
        }
    }

    pub const fn lower_worse(t1: f64, t2: f64, t3: f64) -> Self {
        Self {
            t1,
            t2,
            t3,
            polarity: Polarity::LowerWorse,
        }
    }

    /// Reject non-finite cut points and sets that are not strictly ordered
    /// for their polarity.
    pub fn validate(&self, signal: &str) -> Result<(), ScoringError> {
        let finite = self.t1.is_finite() && self.t2.is_finite() && self.t3.is_finite();
        let ordered = match self.polarity {
            Polarity::HigherWorse => self.t1 < self.t2 && self.t2 < self.t3,
            Polarity::LowerWorse => self.t1 > self.t2 && self.t2 > self.t3,
        };
        if finite && ordered {
            Ok(())
        } else {
            Err(ScoringError::InvalidThresholds {
                signal: signal.to_string(),
                t1: self.t1,
                t2: self.t2,
                t3: self.t3,
            })
        }
    }
}

/// Coarse trust label attached to a run's indicator values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_levels_roundtrip_through_u8() {
        for s in Severity::ALL {
            assert_eq!(Severity::from_level(s.level()), Some(s));
        }
        assert_eq!(Severity::from_level(4), None);
    }

    #[test]
    fn severity_serializes_as_integer() {
        let json = serde_json::to_string(&Severity::Severe).unwrap();
        assert_eq!(json, "3");
        let back: Severity = serde_json::from_str("2").unwrap();
        assert_eq!(back, Severity::Warning);
        assert!(serde_json::from_str::<Severity>("7").is_err());
    }

    #[test]
    fn threshold_ordering_depends_on_polarity() {
        assert!(Thresholds::higher_worse(0.15, 0.30, 0.50).validate("rain").is_ok());
        assert!(Thresholds::lower_worse(0.30, 0.20, 0.10).validate("soil").is_ok());
        assert!(Thresholds::higher_worse(0.30, 0.20, 0.10).validate("rain").is_err());
        assert!(Thresholds::lower_worse(0.10, 0.20, 0.30).validate("soil").is_err());
        assert!(Thresholds::higher_worse(0.1, 0.1, 0.2).validate("x").is_err());
        assert!(Thresholds::higher_worse(0.1, f64::NAN, 0.2).validate("x").is_err());
    }

    #[test]
    fn confidence_labels() {
        assert_eq!(Confidence::High.as_str(), "high");
        assert_eq!(Confidence::parse("medium"), Some(Confidence::Medium));
        assert_eq!(Confidence::parse("unknown"), None);
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), "\"low\"");
    }
}
