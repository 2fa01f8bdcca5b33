use scamintel_config::AppConfig;
use scamintel_scoring::AnalysisResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignalScores {
    pub text_rule_score: f64,
    pub ml_score: f64,
    pub metadata_score: f64,
}

/// JSON shape printed by the CLI.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub verdict: &'static str,
    pub risk_level: &'static str,
    pub final_score: f64,
    pub signals: SignalScores,
    pub rationale: &'a [String],
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AnalysisResult, config: &AppConfig) -> Self {
        Self {
            verdict: result.verdict.as_str(),
            risk_level: result.risk_level.as_str(),
            final_score: config.round_score(result.final_score),
            signals: SignalScores {
                text_rule_score: config.round_score(result.text_rule_score),
                ml_score: config.round_score(result.ml_score),
                metadata_score: config.round_score(result.metadata_score),
            },
            rationale: &result.rationale,
        }
    }

    pub fn to_json(&self, compact: bool) -> serde_json::Result<String> {
        if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        }
    }
}
