//! Property-based tests for the scoring engine
//!
//! Invariants checked for arbitrary inputs:
//! - Every score lies in [0, 1]
//! - analyze is deterministic
//! - Adding a high-risk phrase never lowers the text score
//! - Rationale is ordered text, metadata, model

use proptest::prelude::*;
use scamintel_scoring::{AnalysisInput, ScamIntelligenceSystem};

fn printable(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[ -~]{{0,{max}}}")).unwrap()
}

fn analysis_input() -> impl Strategy<Value = AnalysisInput> {
    (
        printable(200),
        prop::collection::vec(printable(60), 0..4),
        prop::collection::vec(printable(40), 0..4),
        prop::collection::vec(printable(20), 0..4),
    )
        .prop_map(|(text, urls, emails, phones)| AnalysisInput {
            text,
            urls,
            emails,
            phones,
        })
}

const HIGH_RISK_PHRASES: &[&str] = &[
    "urgent",
    "wire transfer",
    "verification code",
    "double your money",
    "lottery",
];

proptest! {
    #[test]
    fn prop_scores_are_bounded(input in analysis_input()) {
        let result = ScamIntelligenceSystem::new().analyze(&input);
        for score in [
            result.final_score,
            result.text_rule_score,
            result.metadata_score,
            result.ml_score,
        ] {
            prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
        }
    }

    #[test]
    fn prop_analyze_is_deterministic(input in analysis_input()) {
        let system = ScamIntelligenceSystem::new();
        prop_assert_eq!(system.analyze(&input), system.analyze(&input));
    }

    #[test]
    fn prop_high_risk_phrase_never_lowers_text_score(
        text in printable(200),
        phrase in prop::sample::select(HIGH_RISK_PHRASES),
    ) {
        let system = ScamIntelligenceSystem::new();
        let before = system.analyze(&AnalysisInput::new(text.clone()));
        let after = system.analyze(&AnalysisInput::new(format!("{text} {phrase}")));
        prop_assert!(
            after.text_rule_score >= before.text_rule_score,
            "{} < {}",
            after.text_rule_score,
            before.text_rule_score
        );
    }

    #[test]
    fn prop_rationale_concatenates_signals_in_order(input in analysis_input()) {
        let result = ScamIntelligenceSystem::new().analyze(&input);
        let expected: Vec<String> = result
            .signals
            .iter()
            .flat_map(|s| s.rationale.clone())
            .collect();
        prop_assert_eq!(&result.rationale, &expected);
        prop_assert!(result.rationale.len() >= 2);
        prop_assert_eq!(result.signals[0].label.as_str(), "text");
        prop_assert_eq!(result.signals[1].label.as_str(), "metadata");
        prop_assert_eq!(result.signals[2].label.as_str(), "ml");
    }

    #[test]
    fn prop_verdict_follows_threshold(input in analysis_input()) {
        let result = ScamIntelligenceSystem::new().analyze(&input);
        let scam = result.final_score >= 0.5;
        prop_assert_eq!(scam, result.verdict == scamintel_scoring::Verdict::LikelyScam);
    }
}
