use crate::config::AnalyzerConfig;
use crate::message::EmailMessage;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

// Reward promises only count as an indicator when paired with this term.
const VERIFICATION_TERM: &str = "verificare";

/// Importance of a finding. Ordering matters: scoring weight and highlight
/// style both derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Informational,
    Medium,
    High,
}

impl Severity {
    pub fn weight(&self) -> u32 {
        match self {
            Severity::High => 4,
            Severity::Medium => 2,
            Severity::Informational => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Informational => "informational",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorKind {
    UrgencyLanguage,
    AggressiveSubjectFormatting,
    SuspiciousUrl,
    SensitiveDataRequest,
    TooGoodToBeTrueOffer,
    CategorySpecificRecommendation,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::UrgencyLanguage => "urgency-language",
            IndicatorKind::AggressiveSubjectFormatting => "aggressive-subject-formatting",
            IndicatorKind::SuspiciousUrl => "suspicious-url",
            IndicatorKind::SensitiveDataRequest => "sensitive-data-request",
            IndicatorKind::TooGoodToBeTrueOffer => "too-good-to-be-true-offer",
            IndicatorKind::CategorySpecificRecommendation => "category-specific-recommendation",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected indicator. Produced fresh per analysis call, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: IndicatorKind,
    pub rationale: String,
    /// Literal triggering text: full subject, URL, body excerpt or matched
    /// term. Empty for category recommendations.
    pub matched_text: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Findings in detection order, never significance-sorted.
    pub findings: Vec<Finding>,
    pub total_risk_score: u32,
    /// Kind of the first high-severity finding; `None` when no high finding
    /// exists. Medium findings never become the primary risk.
    pub primary_risk: Option<IndicatorKind>,
}

impl AnalysisResult {
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let total_risk_score = findings.iter().map(|f| f.severity.weight()).sum();
        let primary_risk = findings
            .iter()
            .find(|f| f.severity == Severity::High)
            .map(|f| f.kind);

        AnalysisResult {
            findings,
            total_risk_score,
            primary_risk,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.total_risk_score)
    }
}

/// Coarse classification of the total score for report display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 10 => RiskLevel::High,
            s if s >= 5 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// Rule-based indicator extractor. Checks run in a fixed order; the order is
/// load-bearing because `primary_risk` is the first high-severity hit.
pub struct IndicatorAnalyzer {
    config: AnalyzerConfig,
    url_regex: Regex,
    sensitive_matchers: Vec<(String, Regex)>,
}

impl Default for IndicatorAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl IndicatorAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        // Scheme plus a maximal run of RFC 3986 characters.
        let url_regex = Regex::new(r"(?i)https?://[a-z0-9._~:/?#@!$&'()*+,;=%\[\]-]+").unwrap();

        // One literal matcher per term so match offsets land in the
        // original-cased body. Escaped literals cannot fail to compile.
        let sensitive_matchers = config
            .sensitive_terms
            .iter()
            .map(|term| {
                let matcher = RegexBuilder::new(&regex::escape(term))
                    .case_insensitive(true)
                    .build()
                    .unwrap();
                (term.clone(), matcher)
            })
            .collect();

        IndicatorAnalyzer {
            config,
            url_regex,
            sensitive_matchers,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run every check against one message and reduce the findings to a
    /// scored result. Pure: identical input yields an identical result.
    pub fn analyze(&self, email: &EmailMessage, category: &str) -> AnalysisResult {
        let mut findings = Vec::new();

        self.check_urgency(email, &mut findings);
        self.check_formatting(email, &mut findings);
        self.check_urls(email, &mut findings);
        self.check_sensitive_request(email, &mut findings);
        self.check_reward_offer(email, &mut findings);
        self.check_category(category, &mut findings);

        AnalysisResult::from_findings(findings)
    }

    // At most one finding no matter how many vocabulary terms the subject hits.
    fn check_urgency(&self, email: &EmailMessage, findings: &mut Vec<Finding>) {
        let subject_lower = email.subject.to_lowercase();
        if self
            .config
            .urgency_terms
            .iter()
            .any(|term| subject_lower.contains(term.as_str()))
        {
            log::debug!("Urgency tone in subject: {}", email.subject);
            findings.push(Finding {
                kind: IndicatorKind::UrgencyLanguage,
                rationale: "Emailurile frauduloase folosesc adesea un ton de urgență pentru a te determina să acționezi impulsiv, fără să analizezi conținutul.".to_string(),
                matched_text: email.subject.clone(),
                severity: Severity::High,
            });
        }
    }

    fn check_formatting(&self, email: &EmailMessage, findings: &mut Vec<Finding>) {
        if is_all_caps(&email.subject) || email.subject.matches('!').count() > 1 {
            findings.push(Finding {
                kind: IndicatorKind::AggressiveSubjectFormatting,
                rationale: "Utilizarea excesivă a majusculelor sau a semnelor de exclamare este o tehnică de manipulare emoțională.".to_string(),
                matched_text: email.subject.clone(),
                severity: Severity::Medium,
            });
        }
    }

    // One finding per extracted URL, with all triggered reasons comma-joined.
    fn check_urls(&self, email: &EmailMessage, findings: &mut Vec<Finding>) {
        for m in self.url_regex.find_iter(&email.body) {
            let url = m.as_str();
            let reasons = self.url_suspicions(url);
            if reasons.is_empty() {
                continue;
            }
            log::debug!("Suspicious URL {}: {}", url, reasons.join(", "));
            findings.push(Finding {
                kind: IndicatorKind::SuspiciousUrl,
                rationale: format!(
                    "Link-ul conține indicatori de fraudă: {}",
                    reasons.join(", ")
                ),
                matched_text: url.to_string(),
                severity: Severity::High,
            });
        }
    }

    fn url_suspicions(&self, url: &str) -> Vec<String> {
        let url_lower = url.to_lowercase();
        let mut reasons = Vec::new();

        if self
            .config
            .url_shorteners
            .iter()
            .any(|domain| url_lower.contains(domain.as_str()))
        {
            reasons.push("URL scurtat care ascunde destinația reală".to_string());
        }

        for brand in &self.config.impersonated_brands {
            if url_lower.contains(brand.as_str())
                && !url_lower.ends_with(&format!(".com/{brand}"))
                && !url_lower.ends_with(&format!(".ro/{brand}"))
                && url_lower.contains(&format!("{brand}-"))
            {
                reasons.push(format!("Domeniu care imită '{brand}' dar nu este oficial"));
            }
        }

        if url_lower.matches('.').count() > 2 {
            reasons.push("Utilizarea subdomeniilor pentru a masca adresa reală".to_string());
        }

        if let Some(host) = url_host(&url_lower) {
            for tld in &self.config.suspicious_tlds {
                if host.ends_with(&format!(".{tld}")) {
                    reasons.push(format!("Extensie de domeniu neobișnuită (.{tld})"));
                }
            }
        }

        reasons
    }

    // First vocabulary term present in the body supplies the excerpt; terms
    // are checked in configured order, not by occurrence position.
    fn check_sensitive_request(&self, email: &EmailMessage, findings: &mut Vec<Finding>) {
        for (term, matcher) in &self.sensitive_matchers {
            if let Some(m) = matcher.find(&email.body) {
                log::debug!("Sensitive-data term '{}' at byte {}", term, m.start());
                findings.push(Finding {
                    kind: IndicatorKind::SensitiveDataRequest,
                    rationale: "Emailul cere date confidențiale. Companiile legitime nu solicită niciodată informații sensibile prin email.".to_string(),
                    matched_text: excerpt_around(&email.body, m.start()),
                    severity: Severity::High,
                });
                return;
            }
        }
    }

    fn check_reward_offer(&self, email: &EmailMessage, findings: &mut Vec<Finding>) {
        let body_lower = email.body.to_lowercase();
        if !body_lower.contains(VERIFICATION_TERM) {
            return;
        }
        if let Some(term) = self
            .config
            .reward_terms
            .iter()
            .find(|term| body_lower.contains(term.as_str()))
        {
            findings.push(Finding {
                kind: IndicatorKind::TooGoodToBeTrueOffer,
                rationale: "Promisiunile de câștiguri sau premii neașteptate sunt tactici comune de phishing.".to_string(),
                matched_text: term.clone(),
                severity: Severity::Medium,
            });
        }
    }

    // Unknown category is not an error, it simply adds no advice.
    fn check_category(&self, category: &str, findings: &mut Vec<Finding>) {
        if let Some(advice) = self.config.category_advice.get(category) {
            findings.push(Finding {
                kind: IndicatorKind::CategorySpecificRecommendation,
                rationale: advice.clone(),
                matched_text: String::new(),
                severity: Severity::Informational,
            });
        }
    }
}

// At least one cased character and no lower-case ones.
fn is_all_caps(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

// Host part of an already-lowercased URL. Manual scheme strip as a fallback
// for inputs the parser rejects.
fn url_host(url: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(url) {
        if let Some(host) = parsed.host_str() {
            return Some(host.to_string());
        }
    }

    let rest = url.split("://").nth(1)?;
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

// Roughly 20 characters of context before the match start and 50 after,
// clamped to the text and always on UTF-8 boundaries.
fn excerpt_around(body: &str, start: usize) -> String {
    let begin = body[..start]
        .char_indices()
        .rev()
        .nth(19)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = body[start..]
        .char_indices()
        .nth(50)
        .map(|(i, _)| start + i)
        .unwrap_or(body.len());
    body[begin..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> IndicatorAnalyzer {
        IndicatorAnalyzer::default()
    }

    #[test]
    fn test_reference_scenario() {
        let email = EmailMessage::new(
            "URGENT: Verificați contul!!!",
            "Accesați http://bit.ly/secure-check și introduceți parola.",
        );
        let result = analyzer().analyze(&email, "");

        let kinds: Vec<IndicatorKind> = result.findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IndicatorKind::UrgencyLanguage,
                IndicatorKind::AggressiveSubjectFormatting,
                IndicatorKind::SuspiciousUrl,
                IndicatorKind::SensitiveDataRequest,
            ]
        );
        assert_eq!(result.total_risk_score, 14);
        assert_eq!(result.primary_risk, Some(IndicatorKind::UrgencyLanguage));
        assert_eq!(result.risk_level(), RiskLevel::High);

        let url = &result.findings[2];
        assert_eq!(url.matched_text, "http://bit.ly/secure-check");
        assert!(url.rationale.contains("URL scurtat"));

        let sensitive = &result.findings[3];
        assert!(sensitive.matched_text.contains("parola"));
    }

    #[test]
    fn test_empty_email_scores_zero() {
        let email = EmailMessage::new("", "");
        let result = analyzer().analyze(&email, "");
        assert!(result.findings.is_empty());
        assert_eq!(result.total_risk_score, 0);
        assert_eq!(result.primary_risk, None);
        assert_eq!(result.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_empty_email_known_category_is_informational_only() {
        let email = EmailMessage::new("", "");
        let result = analyzer().analyze(&email, "Fraudă bancară");
        assert_eq!(result.findings.len(), 1);
        let finding = &result.findings[0];
        assert_eq!(finding.kind, IndicatorKind::CategorySpecificRecommendation);
        assert_eq!(finding.severity, Severity::Informational);
        assert!(finding.matched_text.is_empty());
        assert!(finding.rationale.contains("Băncile"));
        assert_eq!(result.total_risk_score, 0);
        assert_eq!(result.primary_risk, None);
    }

    #[test]
    fn test_unknown_category_adds_nothing() {
        let email = EmailMessage::new("", "");
        let result = analyzer().analyze(&email, "Necunoscut");
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_urgency_fires_once_regardless_of_repeats() {
        let email = EmailMessage::new("Urgent URGENT urgent imediat", "");
        let result = analyzer().analyze(&email, "");
        let urgency: Vec<&Finding> = result
            .findings
            .iter()
            .filter(|f| f.kind == IndicatorKind::UrgencyLanguage)
            .collect();
        assert_eq!(urgency.len(), 1);
        assert_eq!(urgency[0].matched_text, "Urgent URGENT urgent imediat");
        assert_eq!(urgency[0].severity, Severity::High);
    }

    #[test]
    fn test_all_caps_subject_flags_formatting() {
        let email = EmailMessage::new("CONT RESTRICTIONAT", "");
        let result = analyzer().analyze(&email, "");
        assert_eq!(result.findings.len(), 1);
        assert_eq!(
            result.findings[0].kind,
            IndicatorKind::AggressiveSubjectFormatting
        );
        assert_eq!(result.findings[0].severity, Severity::Medium);
        assert_eq!(result.total_risk_score, 2);
        // Medium findings never become the primary risk.
        assert_eq!(result.primary_risk, None);
    }

    #[test]
    fn test_single_exclamation_is_not_aggressive() {
        let email = EmailMessage::new("Mulțumim pentru comandă!", "");
        let result = analyzer().analyze(&email, "");
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_digits_only_subject_is_not_all_caps() {
        let email = EmailMessage::new("12345", "");
        let result = analyzer().analyze(&email, "");
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_shortener_url_finding() {
        let email = EmailMessage::new("", "vezi http://bit.ly/x inainte de weekend");
        let result = analyzer().analyze(&email, "");
        assert_eq!(result.findings.len(), 1);
        let finding = &result.findings[0];
        assert_eq!(finding.kind, IndicatorKind::SuspiciousUrl);
        assert_eq!(finding.matched_text, "http://bit.ly/x");
        assert!(finding.rationale.contains("URL scurtat"));
        assert_eq!(result.total_risk_score, 4);
    }

    #[test]
    fn test_two_suspicious_urls_two_findings() {
        let email = EmailMessage::new(
            "",
            "vezi http://bit.ly/unu apoi http://tinyurl.com/doi inainte de weekend",
        );
        let result = analyzer().analyze(&email, "");
        let urls: Vec<&Finding> = result
            .findings
            .iter()
            .filter(|f| f.kind == IndicatorKind::SuspiciousUrl)
            .collect();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].matched_text, "http://bit.ly/unu");
        assert_eq!(urls[1].matched_text, "http://tinyurl.com/doi");
        assert_eq!(result.total_risk_score, 8);
    }

    #[test]
    fn test_url_with_multiple_reasons_single_finding() {
        let email = EmailMessage::new("", "acceseaza http://bt.secure.paypal-verify.top/update");
        let result = analyzer().analyze(&email, "");
        let urls: Vec<&Finding> = result
            .findings
            .iter()
            .filter(|f| f.kind == IndicatorKind::SuspiciousUrl)
            .collect();
        assert_eq!(urls.len(), 1);
        let rationale = &urls[0].rationale;
        assert!(rationale.starts_with("Link-ul conține indicatori de fraudă: "));
        assert!(rationale.contains("imită 'paypal'"));
        assert!(rationale.contains("subdomeniilor"));
        assert!(rationale.contains("(.top)"));
    }

    #[test]
    fn test_brand_impersonation_requires_hyphen() {
        // "paypal" present but no "paypal-" fragment and an official suffix.
        let email = EmailMessage::new("", "detalii pe https://www.example.com/paypal");
        let result = analyzer().analyze(&email, "");
        assert!(result
            .findings
            .iter()
            .all(|f| f.kind != IndicatorKind::SuspiciousUrl));
    }

    #[test]
    fn test_suspicious_tld_matches_host_suffix_only() {
        let flagged = EmailMessage::new("", "date pe http://example.info/raport");
        let result = analyzer().analyze(&flagged, "");
        assert_eq!(result.findings.len(), 1);
        assert!(result.findings[0].rationale.contains("(.info)"));

        // "info" in the path must not count against the host.
        let clean = EmailMessage::new("", "date pe http://example.com/info/raport");
        let result = analyzer().analyze(&clean, "");
        assert!(result.findings.is_empty());
    }

    #[test]
    fn test_deep_subdomain_flagged() {
        let email = EmailMessage::new("", "portal http://bt.secure.online-auth.example.com/login");
        let result = analyzer().analyze(&email, "");
        let url = result
            .findings
            .iter()
            .find(|f| f.kind == IndicatorKind::SuspiciousUrl)
            .unwrap();
        assert!(url.rationale.contains("subdomeniilor"));
    }

    #[test]
    fn test_sensitive_term_order_picks_excerpt_source() {
        // Both "parola" and "card" occur; "parola" outranks it in the table.
        let email = EmailMessage::new(
            "",
            "Introduceți parola și datele de card pentru continuare.",
        );
        let result = analyzer().analyze(&email, "");
        let sensitive = result
            .findings
            .iter()
            .find(|f| f.kind == IndicatorKind::SensitiveDataRequest)
            .unwrap();
        assert!(sensitive.matched_text.contains("parola"));
        assert_eq!(sensitive.severity, Severity::High);
    }

    #[test]
    fn test_sensitive_finding_is_single() {
        let email = EmailMessage::new("", "cont card pin cvv parola login");
        let result = analyzer().analyze(&email, "");
        let count = result
            .findings
            .iter()
            .filter(|f| f.kind == IndicatorKind::SensitiveDataRequest)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_excerpt_window_bounds() {
        let body = format!("{}parola{}", "a".repeat(30), "b".repeat(60));
        let email = EmailMessage::new("", body);
        let result = analyzer().analyze(&email, "");
        let sensitive = &result.findings[0];
        let expected = format!("{}parola{}", "a".repeat(20), "b".repeat(44));
        assert_eq!(sensitive.matched_text, expected);
    }

    #[test]
    fn test_excerpt_clamps_at_text_edges() {
        let email = EmailMessage::new("", "parola");
        let result = analyzer().analyze(&email, "");
        assert_eq!(result.findings[0].matched_text, "parola");
    }

    #[test]
    fn test_excerpt_respects_multibyte_boundaries() {
        let body = format!("{}parola{}", "ă".repeat(30), "ț".repeat(60));
        let email = EmailMessage::new("", body);
        let result = analyzer().analyze(&email, "");
        let excerpt = &result.findings[0].matched_text;
        assert_eq!(excerpt.chars().count(), 20 + 50);
        assert!(excerpt.contains("parola"));
    }

    #[test]
    fn test_reward_offer_requires_verification_context() {
        let without = EmailMessage::new("", "Ați câștigat un premiu gratuit");
        let result = analyzer().analyze(&without, "");
        assert!(result
            .findings
            .iter()
            .all(|f| f.kind != IndicatorKind::TooGoodToBeTrueOffer));

        let with = EmailMessage::new("", "Ați câștigat un premiu, urmați pașii de verificare");
        let result = analyzer().analyze(&with, "");
        let offer = result
            .findings
            .iter()
            .find(|f| f.kind == IndicatorKind::TooGoodToBeTrueOffer)
            .unwrap();
        assert_eq!(offer.severity, Severity::Medium);
        assert_eq!(offer.matched_text, "câștigat");
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let email = EmailMessage::new(
            "URGENT: Verificați contul!!!",
            "Accesați http://bit.ly/secure-check și introduceți parola.",
        );
        let a = analyzer();
        assert_eq!(
            a.analyze(&email, "Fraudă bancară"),
            a.analyze(&email, "Fraudă bancară")
        );
    }

    #[test]
    fn test_scoring_law() {
        let high = Finding {
            kind: IndicatorKind::SuspiciousUrl,
            rationale: String::new(),
            matched_text: String::new(),
            severity: Severity::High,
        };
        let medium = Finding {
            kind: IndicatorKind::TooGoodToBeTrueOffer,
            rationale: String::new(),
            matched_text: String::new(),
            severity: Severity::Medium,
        };
        let info = Finding {
            kind: IndicatorKind::CategorySpecificRecommendation,
            rationale: String::new(),
            matched_text: String::new(),
            severity: Severity::Informational,
        };

        let result = AnalysisResult::from_findings(vec![
            info.clone(),
            high.clone(),
            medium.clone(),
            high.clone(),
            info,
        ]);
        assert_eq!(result.total_risk_score, 4 * 2 + 2);
        assert_eq!(result.primary_risk, Some(IndicatorKind::SuspiciousUrl));

        let result = AnalysisResult::from_findings(vec![medium]);
        assert_eq!(result.total_risk_score, 2);
        assert_eq!(result.primary_risk, None);
    }

    #[test]
    fn test_primary_risk_takes_first_high_in_order() {
        let email = EmailMessage::new(
            "Alertă importantă",
            "Accesați http://bit.ly/x pentru detalii",
        );
        let result = analyzer().analyze(&email, "");
        // Urgency (step 1) precedes URL analysis (step 3).
        assert_eq!(result.primary_risk, Some(IndicatorKind::UrgencyLanguage));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Informational < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(9), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(10), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(14), RiskLevel::High);
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&IndicatorKind::CategorySpecificRecommendation).unwrap();
        assert_eq!(json, "\"category-specific-recommendation\"");
        let json = serde_json::to_string(&IndicatorKind::SuspiciousUrl).unwrap();
        assert_eq!(json, "\"suspicious-url\"");
    }
}
