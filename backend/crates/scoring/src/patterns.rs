//! Static rule tables for the detectors.
//!
//! Lexical rules are matched against normalized (trimmed, lowercased) text and
//! fire at most once per analysis. Weights are curated so that a typical scam
//! message lands well inside `[0, 1]`; the detectors still clamp for
//! adversarial inputs that trip every rule at once.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCategory {
    HighRiskLexical,
    SocialEngineering,
}

impl PatternCategory {
    /// Phrase used when a rule of this category shows up in a rationale.
    pub fn rationale_label(&self) -> &'static str {
        match self {
            Self::HighRiskLexical => "high-risk",
            Self::SocialEngineering => "social-engineering",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub name: &'static str,
    pub category: PatternCategory,
    pub expression: &'static str,
    pub weight: f64,
}

/// Explicit scam vocabulary.
pub const HIGH_RISK_LEXICAL: &[PatternRule] = &[
    PatternRule {
        name: "urgency",
        category: PatternCategory::HighRiskLexical,
        expression: r"\b(urgent|immediately|act now|last chance)\b",
        weight: 0.18,
    },
    PatternRule {
        name: "payment_instrument",
        category: PatternCategory::HighRiskLexical,
        expression: r"\b(wire transfer|gift cards?|crypto|bitcoin|vouchers?)\b",
        weight: 0.22,
    },
    PatternRule {
        name: "credential_request",
        category: PatternCategory::HighRiskLexical,
        expression: r"\b(password|otp|verification code|bank details|ssn)\b",
        weight: 0.24,
    },
    PatternRule {
        name: "guaranteed_return",
        category: PatternCategory::HighRiskLexical,
        expression: r"\b(guaranteed returns?|double your money|risk-free)\b",
        weight: 0.20,
    },
    PatternRule {
        name: "prize_lottery",
        category: PatternCategory::HighRiskLexical,
        expression: r"\b(congratulations,? you (have )?won|lottery|prize claim)\b",
        weight: 0.18,
    },
];

/// Pressure and impersonation framing.
pub const SOCIAL_ENGINEERING: &[PatternRule] = &[
    PatternRule {
        name: "authority_impersonation",
        category: PatternCategory::SocialEngineering,
        expression: r"\b(police|tax authority|irs|court notice)\b",
        weight: 0.15,
    },
    PatternRule {
        name: "suspended_account",
        category: PatternCategory::SocialEngineering,
        expression: r"\b(account (is |has been )?suspended|security alert|confirm (your )?identity)\b",
        weight: 0.15,
    },
    PatternRule {
        name: "secrecy_coercion",
        category: PatternCategory::SocialEngineering,
        expression: r"\b(do not tell anyone|don't tell anyone|keep this confidential)\b",
        weight: 0.12,
    },
];

// Structural text heuristics.
pub const PRESSURE_MIN_COUNT: usize = 3;
pub const PRESSURE_STEP_WEIGHT: f64 = 0.02;
pub const PRESSURE_MAX_WEIGHT: f64 = 0.12;
pub const UPPERCASE_EMPHASIS_WEIGHT: f64 = 0.05;

/// Substrings checked case-insensitively against URLs and email addresses.
pub const SUSPICIOUS_TLDS: &[&str] = &[".xyz", ".top", ".click", ".gq", ".tk", ".work"];

pub const URL_OBFUSCATION_WEIGHT: f64 = 0.20;
pub const URL_SUSPICIOUS_TLD_WEIGHT: f64 = 0.15;
pub const URL_HYPHEN_WEIGHT: f64 = 0.08;
pub const URL_HYPHEN_MIN_COUNT: usize = 3;
pub const EMAIL_DIGIT_RUN_WEIGHT: f64 = 0.08;
pub const EMAIL_SUSPICIOUS_TLD_WEIGHT: f64 = 0.10;
pub const PHONE_IRREGULAR_WEIGHT: f64 = 0.05;
pub const PHONE_DIGITS_MIN: usize = 10;
pub const PHONE_DIGITS_MAX: usize = 15;

#[derive(Debug)]
pub struct CompiledPattern {
    pub rule: &'static PatternRule,
    regex: Regex,
}

impl CompiledPattern {
    /// First matched fragment, if any. A rule never counts more than once.
    pub fn find<'t>(&self, normalized: &'t str) -> Option<&'t str> {
        self.regex.find(normalized).map(|m| m.as_str())
    }
}

/// Compiled, process-wide view of the rule tables.
#[derive(Debug)]
pub struct PatternLibrary {
    lexical: Vec<CompiledPattern>,
    ipv4_literal: Regex,
    digit_run: Regex,
    digit: Regex,
    uppercase_word: Regex,
}

static LIBRARY: Lazy<PatternLibrary> = Lazy::new(PatternLibrary::compile);

impl PatternLibrary {
    /// Shared instance, compiled on first use.
    pub fn global() -> &'static PatternLibrary {
        &LIBRARY
    }

    fn compile() -> Self {
        let lexical = HIGH_RISK_LEXICAL
            .iter()
            .chain(SOCIAL_ENGINEERING.iter())
            .map(|rule| CompiledPattern {
                rule,
                regex: built_in(rule.expression),
            })
            .collect();

        Self {
            lexical,
            ipv4_literal: built_in(r"\d{1,3}(?:\.\d{1,3}){3}"),
            digit_run: built_in(r"\d{4,}"),
            digit: built_in(r"\d"),
            uppercase_word: built_in(r"\b[A-Z]{4,}\b"),
        }
    }

    /// Lexical rules in evaluation order: high-risk first, then social engineering.
    pub fn lexical(&self) -> &[CompiledPattern] {
        &self.lexical
    }

    pub fn has_ipv4_literal(&self, value: &str) -> bool {
        self.ipv4_literal.is_match(value)
    }

    pub fn has_digit_run(&self, value: &str) -> bool {
        self.digit_run.is_match(value)
    }

    /// Decimal digits of any script, so full-width or Arabic-Indic numbers count too.
    pub fn digit_count(&self, value: &str) -> usize {
        self.digit.find_iter(value).count()
    }

    /// Expects the original, non-normalized text.
    pub fn has_uppercase_emphasis(&self, original: &str) -> bool {
        self.uppercase_word.is_match(original)
    }
}

fn built_in(expression: &str) -> Regex {
    Regex::new(expression).unwrap_or_else(|e| panic!("invalid built-in pattern {expression}: {e}"))
}

pub fn has_suspicious_tld(lowered: &str) -> bool {
    SUSPICIOUS_TLDS.iter().any(|tld| lowered.contains(tld))
}
