use scamintel_common::error::{ScamIntelError, ScamIntelResult};
use serde::{Deserialize, Serialize};

use crate::engine::{RiskLevel, Verdict};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Convex combination of the component scores. Text carries the most direct
/// intent evidence, metadata corroborates, the model slot is advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationWeights {
    pub text: f64,
    pub metadata: f64,
    pub ml: f64,
}

impl Default for CombinationWeights {
    fn default() -> Self {
        Self {
            text: 0.55,
            metadata: 0.30,
            ml: 0.15,
        }
    }
}

impl CombinationWeights {
    pub fn combine(&self, text: f64, metadata: f64, ml: f64) -> f64 {
        (self.text * text + self.metadata * metadata + self.ml * ml).clamp(0.0, 1.0)
    }

    fn validate(&self) -> ScamIntelResult<()> {
        for (name, weight) in [
            ("text", self.text),
            ("metadata", self.metadata),
            ("ml", self.ml),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScamIntelError::Validation(format!(
                    "{name} weight must be a non-negative number, got {weight}"
                )));
            }
        }
        let sum = self.text + self.metadata + self.ml;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScamIntelError::Validation(format!(
                "combination weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub scam: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self { scam: 0.5 }
    }
}

impl VerdictThresholds {
    pub fn classify(&self, final_score: f64) -> Verdict {
        if final_score >= self.scam {
            Verdict::LikelyScam
        } else {
            Verdict::LikelyLegitimate
        }
    }
}

/// Lower edges of the medium and high bands; low starts at 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBands {
    pub medium: f64,
    pub high: f64,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            medium: 0.3,
            high: 0.6,
        }
    }
}

impl RiskBands {
    pub fn classify(&self, final_score: f64) -> RiskLevel {
        if final_score >= self.high {
            RiskLevel::High
        } else if final_score >= self.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub weights: CombinationWeights,
    pub thresholds: VerdictThresholds,
    pub bands: RiskBands,
}

impl ScoringPolicy {
    pub fn validate(&self) -> ScamIntelResult<()> {
        self.weights.validate()?;

        let scam = self.thresholds.scam;
        if !(scam > 0.0 && scam <= 1.0) {
            return Err(ScamIntelError::Validation(format!(
                "scam threshold must lie in (0, 1], got {scam}"
            )));
        }

        let RiskBands { medium, high } = self.bands;
        if !(medium > 0.0 && medium < high && high <= 1.0) {
            return Err(ScamIntelError::Validation(format!(
                "risk bands must satisfy 0 < medium < high <= 1, got medium={medium} high={high}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_valid() {
        let policy = ScoringPolicy::default();
        policy.validate().expect("default policy must validate");
        let w = &policy.weights;
        assert!(
            (w.text + w.metadata + w.ml - 1.0).abs() < 1e-9,
            "weights should sum to 1.0"
        );
        assert!(w.text > w.metadata && w.metadata > w.ml, "text must dominate");
    }

    #[test]
    fn combine_is_convex() {
        let w = CombinationWeights::default();
        assert_eq!(w.combine(0.0, 0.0, 0.0), 0.0);
        assert!((w.combine(1.0, 1.0, 1.0) - 1.0).abs() < 1e-9);
        assert!((w.combine(1.0, 0.0, 0.0) - 0.55).abs() < 1e-9);
    }

    #[test]
    fn weights_not_summing_to_one_rejected() {
        let policy = ScoringPolicy {
            weights: CombinationWeights {
                text: 0.6,
                metadata: 0.3,
                ml: 0.3,
            },
            ..ScoringPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(ScamIntelError::Validation(_))
        ));
    }

    #[test]
    fn negative_or_nan_weight_rejected() {
        let negative = CombinationWeights {
            text: 1.2,
            metadata: -0.2,
            ml: 0.0,
        };
        assert!(negative.validate().is_err());

        let nan = CombinationWeights {
            text: f64::NAN,
            metadata: 0.5,
            ml: 0.5,
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn inverted_bands_rejected() {
        let policy = ScoringPolicy {
            bands: RiskBands {
                medium: 0.7,
                high: 0.4,
            },
            ..ScoringPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn zero_scam_threshold_rejected() {
        let policy = ScoringPolicy {
            thresholds: VerdictThresholds { scam: 0.0 },
            ..ScoringPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn verdict_boundary_is_inclusive() {
        let t = VerdictThresholds::default();
        assert_eq!(t.classify(0.5), Verdict::LikelyScam);
        assert_eq!(t.classify(0.499_999), Verdict::LikelyLegitimate);
    }

    #[test]
    fn bands_cover_unit_interval() {
        let bands = RiskBands::default();
        assert_eq!(bands.classify(0.0), RiskLevel::Low);
        assert_eq!(bands.classify(0.299), RiskLevel::Low);
        assert_eq!(bands.classify(0.3), RiskLevel::Medium);
        assert_eq!(bands.classify(0.599), RiskLevel::Medium);
        assert_eq!(bands.classify(0.6), RiskLevel::High);
        assert_eq!(bands.classify(1.0), RiskLevel::High);
    }

    #[test]
    fn bands_are_monotonic() {
        let bands = RiskBands::default();
        let mut previous = bands.classify(0.0);
        for step in 0..=100 {
            let level = bands.classify(step as f64 / 100.0);
            assert!(level >= previous, "band decreased at {step}");
            previous = level;
        }
    }
}
