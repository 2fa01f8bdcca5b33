use std::fmt;

use scamintel_common::error::ScamIntelResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringPolicy;
use crate::detectors::{Detector, MetadataRiskDetector, NullModelDetector, TextRiskDetector};
use crate::input::AnalysisInput;
use crate::signal::DetectorSignal;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyScam,
    LikelyLegitimate,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikelyScam => "likely_scam",
            Self::LikelyLegitimate => "likely_legitimate",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub risk_level: RiskLevel,
    pub final_score: f64,
    pub text_rule_score: f64,
    pub ml_score: f64,
    pub metadata_score: f64,
    /// Text entries first, then metadata, then the model slot.
    pub rationale: Vec<String>,
    /// Per-detector signals in the same order.
    pub signals: Vec<DetectorSignal>,
}

/// Runs the detectors over one input and folds their signals into a verdict.
///
/// The policy is fixed at construction; every call to [`analyze`](Self::analyze)
/// applies it identically.
pub struct ScamIntelligenceSystem {
    policy: ScoringPolicy,
    text: Box<dyn Detector>,
    metadata: Box<dyn Detector>,
    ml: Box<dyn Detector>,
}

impl Default for ScamIntelligenceSystem {
    fn default() -> Self {
        Self {
            policy: ScoringPolicy::default(),
            text: Box::new(TextRiskDetector::new()),
            metadata: Box::new(MetadataRiskDetector::new()),
            ml: Box::new(NullModelDetector),
        }
    }
}

impl ScamIntelligenceSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ScoringPolicy) -> ScamIntelResult<Self> {
        policy.validate()?;
        Ok(Self {
            policy,
            ..Self::default()
        })
    }

    /// Replace the model slot. The combination weights stay untouched.
    pub fn with_ml_detector(mut self, detector: Box<dyn Detector>) -> Self {
        self.ml = detector;
        self
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let text = self.text.detect(input).clamped();
        let metadata = self.metadata.detect(input).clamped();
        let ml = self.ml.detect(input).clamped();

        let final_score = self
            .policy
            .weights
            .combine(text.score, metadata.score, ml.score);
        let verdict = self.policy.thresholds.classify(final_score);
        let risk_level = self.policy.bands.classify(final_score);

        debug!(
            text_score = text.score,
            metadata_score = metadata.score,
            ml_score = ml.score,
            final_score,
            %verdict,
            "analysis complete"
        );

        let rationale = [&text, &metadata, &ml]
            .iter()
            .flat_map(|s| s.rationale.iter().cloned())
            .collect();

        AnalysisResult {
            verdict,
            risk_level,
            final_score,
            text_rule_score: text.score,
            ml_score: ml.score,
            metadata_score: metadata.score,
            rationale,
            signals: vec![text, metadata, ml],
        }
    }
}
