use tracing::trace;

use crate::input::AnalysisInput;
use crate::patterns::{
    PatternLibrary, PRESSURE_MAX_WEIGHT, PRESSURE_MIN_COUNT, PRESSURE_STEP_WEIGHT,
    UPPERCASE_EMPHASIS_WEIGHT,
};
use crate::signal::DetectorSignal;

use super::Detector;

pub struct TextRiskDetector {
    library: &'static PatternLibrary,
}

impl Default for TextRiskDetector {
    fn default() -> Self {
        Self {
            library: PatternLibrary::global(),
        }
    }
}

impl TextRiskDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze_text(&self, text: &str) -> DetectorSignal {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return DetectorSignal::new(self.label(), 0.0, vec!["No text provided.".to_owned()]);
        }

        let mut score = 0.0;
        let mut rationale = Vec::new();

        for pattern in self.library.lexical() {
            if let Some(fragment) = pattern.find(&normalized) {
                trace!(rule = pattern.rule.name, weight = pattern.rule.weight, "text rule fired");
                score += pattern.rule.weight;
                rationale.push(format!(
                    "Matched {} phrase pattern: {} (\"{}\")",
                    pattern.rule.category.rationale_label(),
                    pattern.rule.name,
                    fragment
                ));
            }
        }

        let pressure = pressure_weight(&normalized);
        if pressure > 0.0 {
            trace!(weight = pressure, "punctuation pressure");
            score += pressure;
            rationale.push("Message uses pressure punctuation typical in scams.".to_owned());
        }

        if self.library.has_uppercase_emphasis(text) {
            score += UPPERCASE_EMPHASIS_WEIGHT;
            rationale.push("Contains uppercase pressure wording.".to_owned());
        }

        if rationale.is_empty() {
            rationale.push("No obvious high-risk text patterns were detected.".to_owned());
        }
        DetectorSignal::new(self.label(), score.min(1.0), rationale)
    }
}

/// `!` and `$` together count as pressure; below the minimum count it is ignored.
fn pressure_weight(normalized: &str) -> f64 {
    let count = normalized.chars().filter(|c| matches!(c, '!' | '$')).count();
    if count < PRESSURE_MIN_COUNT {
        0.0
    } else {
        (count as f64 * PRESSURE_STEP_WEIGHT).min(PRESSURE_MAX_WEIGHT)
    }
}

impl Detector for TextRiskDetector {
    fn label(&self) -> &'static str {
        "text"
    }

    fn detect(&self, input: &AnalysisInput) -> DetectorSignal {
        self.analyze_text(&input.text)
    }
}
