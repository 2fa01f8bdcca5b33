use crate::input::AnalysisInput;
use crate::signal::DetectorSignal;

use super::Detector;

/// Placeholder for a learned model. Always neutral: score 0.0, no rationale.
///
/// Swap in a real model through
/// [`ScamIntelligenceSystem::with_ml_detector`](crate::engine::ScamIntelligenceSystem::with_ml_detector).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullModelDetector;

impl Detector for NullModelDetector {
    fn label(&self) -> &'static str {
        "ml"
    }

    fn detect(&self, _input: &AnalysisInput) -> DetectorSignal {
        DetectorSignal::new(self.label(), 0.0, Vec::new())
    }
}
