use serde::{Deserialize, Serialize};

/// Output of one detector for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorSignal {
    pub label: String,
    pub score: f64,
    pub rationale: Vec<String>,
}

impl DetectorSignal {
    pub fn new(label: impl Into<String>, score: f64, rationale: Vec<String>) -> Self {
        Self {
            label: label.into(),
            score: clamp_score(score),
            rationale,
        }
    }

    /// Re-apply the `[0, 1]` bound. Signals from plug-in detectors go through this
    /// before they reach the combination step.
    pub fn clamped(mut self) -> Self {
        self.score = clamp_score(self.score);
        self
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0.0.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}
