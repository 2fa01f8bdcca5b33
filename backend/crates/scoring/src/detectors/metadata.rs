use tracing::trace;

use crate::input::AnalysisInput;
use crate::patterns::{
    has_suspicious_tld, PatternLibrary, EMAIL_DIGIT_RUN_WEIGHT, EMAIL_SUSPICIOUS_TLD_WEIGHT,
    PHONE_DIGITS_MAX, PHONE_DIGITS_MIN, PHONE_IRREGULAR_WEIGHT, URL_HYPHEN_MIN_COUNT,
    URL_HYPHEN_WEIGHT, URL_OBFUSCATION_WEIGHT, URL_SUSPICIOUS_TLD_WEIGHT,
};
use crate::signal::DetectorSignal;

use super::Detector;

/// Structural heuristics over URLs, email addresses and phone numbers.
///
/// Entries are never rejected: anything unparseable simply fails to match.
/// Blank URLs and emails are skipped; a blank phone counts as irregular.
pub struct MetadataRiskDetector {
    library: &'static PatternLibrary,
}

impl Default for MetadataRiskDetector {
    fn default() -> Self {
        Self {
            library: PatternLibrary::global(),
        }
    }
}

/// Running total plus the evidence behind it.
#[derive(Default)]
struct Findings {
    score: f64,
    rationale: Vec<String>,
}

impl Findings {
    fn add(&mut self, weight: f64, reason: String) {
        trace!(weight, reason = %reason, "metadata rule fired");
        self.score += weight;
        self.rationale.push(reason);
    }
}

impl MetadataRiskDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze_metadata(
        &self,
        urls: &[String],
        emails: &[String],
        phones: &[String],
    ) -> DetectorSignal {
        let mut findings = Findings::default();

        for url in non_blank(urls) {
            self.check_url(url, &mut findings);
        }
        for email in non_blank(emails) {
            self.check_email(email, &mut findings);
        }
        // Phones are never skipped: a blank number has zero digits and is irregular.
        for phone in phones {
            self.check_phone(phone, &mut findings);
        }

        let Findings {
            score,
            mut rationale,
        } = findings;
        if rationale.is_empty() {
            rationale.push("Metadata did not include common scam risk indicators.".to_owned());
        }
        DetectorSignal::new(self.label(), score.min(1.0), rationale)
    }

    fn check_url(&self, url: &str, findings: &mut Findings) {
        let lowered = url.to_lowercase();
        if lowered.contains('@') || self.library.has_ipv4_literal(&lowered) {
            findings.add(
                URL_OBFUSCATION_WEIGHT,
                format!("URL looks obfuscated or IP-based: {url}"),
            );
        }
        if has_suspicious_tld(&lowered) {
            findings.add(
                URL_SUSPICIOUS_TLD_WEIGHT,
                format!("URL uses suspicious top-level domain: {url}"),
            );
        }
        if lowered.matches('-').count() >= URL_HYPHEN_MIN_COUNT {
            findings.add(
                URL_HYPHEN_WEIGHT,
                format!("URL has excessive hyphenation: {url}"),
            );
        }
    }

    fn check_email(&self, email: &str, findings: &mut Findings) {
        let lowered = email.to_lowercase();
        if self.library.has_digit_run(&lowered) {
            findings.add(
                EMAIL_DIGIT_RUN_WEIGHT,
                format!("Email contains unusual numeric pattern: {email}"),
            );
        }
        if has_suspicious_tld(&lowered) {
            findings.add(
                EMAIL_SUSPICIOUS_TLD_WEIGHT,
                format!("Email domain has suspicious top-level domain: {email}"),
            );
        }
    }

    fn check_phone(&self, phone: &str, findings: &mut Findings) {
        let digits = self.library.digit_count(phone);
        if !(PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits) {
            findings.add(
                PHONE_IRREGULAR_WEIGHT,
                format!("Phone format is irregular: {phone}"),
            );
        }
    }
}

fn non_blank(values: &[String]) -> impl Iterator<Item = &str> {
    values.iter().map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl Detector for MetadataRiskDetector {
    fn label(&self) -> &'static str {
        "metadata"
    }

    fn detect(&self, input: &AnalysisInput) -> DetectorSignal {
        self.analyze_metadata(&input.urls, &input.emails, &input.phones)
    }
}
