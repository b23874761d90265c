use crate::analyzer::{Finding, IndicatorKind, Severity};
use crate::config::AnalyzerConfig;
use regex::{Regex, RegexBuilder};

pub const HIGH_STYLE: &str =
    "background-color: #ffcccc; border-bottom: 2px solid red; padding: 2px;";
pub const MEDIUM_STYLE: &str =
    "background-color: #fff2cc; border-bottom: 2px solid orange; padding: 2px;";
pub const INFORMATIONAL_STYLE: &str =
    "background-color: #e6f3ff; border-bottom: 2px solid blue; padding: 2px;";

const URGENCY_TOOLTIP: &str = "Ton de urgență: Poate indica o tentativă de phishing";
const SENSITIVE_TOOLTIP: &str = "Solicitare informații sensibile: Risc ridicat de phishing";

pub fn style_for(severity: Severity) -> &'static str {
    match severity {
        Severity::High => HIGH_STYLE,
        Severity::Medium => MEDIUM_STYLE,
        Severity::Informational => INFORMATIONAL_STYLE,
    }
}

#[derive(Debug)]
struct Span {
    start: usize,
    end: usize,
    severity: Severity,
    tooltip: String,
}

impl Span {
    fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Wraps indicator occurrences in severity-styled markup. Passes run only for
/// indicator kinds actually present in the finding list; the word and phrase
/// vocabularies define which spans to wrap once a pass is enabled.
pub struct TextHighlighter {
    urgency_matchers: Vec<Regex>,
    phrase_matchers: Vec<Regex>,
}

impl Default for TextHighlighter {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl TextHighlighter {
    pub fn new(config: &AnalyzerConfig) -> Self {
        let urgency_matchers = config
            .highlight_urgency_terms
            .iter()
            .map(|term| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
                    .case_insensitive(true)
                    .build()
                    .unwrap()
            })
            .collect();

        let phrase_matchers = config
            .sensitive_phrases
            .iter()
            .map(|phrase| {
                RegexBuilder::new(&regex::escape(phrase))
                    .case_insensitive(true)
                    .build()
                    .unwrap()
            })
            .collect();

        TextHighlighter {
            urgency_matchers,
            phrase_matchers,
        }
    }

    /// Produce a marked-up copy of `text`. Byte ranges already claimed by an
    /// earlier pass are never re-wrapped, so inserted markup stays intact.
    /// With no matching findings the input comes back unchanged.
    pub fn highlight(&self, text: &str, findings: &[Finding]) -> String {
        let mut accepted: Vec<Span> = Vec::new();

        for candidate in self.collect_candidates(text, findings) {
            if accepted.iter().any(|span| span.overlaps(&candidate)) {
                continue;
            }
            accepted.push(candidate);
        }

        if accepted.is_empty() {
            return text.to_string();
        }
        accepted.sort_by_key(|span| span.start);

        let mut output = String::with_capacity(text.len() * 2);
        let mut cursor = 0;
        for span in &accepted {
            output.push_str(&text[cursor..span.start]);
            output.push_str(&format!(
                "<span style=\"{}\" title=\"{}\">{}</span>",
                style_for(span.severity),
                escape_attribute(&span.tooltip),
                &text[span.start..span.end]
            ));
            cursor = span.end;
        }
        output.push_str(&text[cursor..]);
        output
    }

    // Candidates in pass order: URLs, then urgency words, then sensitive
    // phrases. Pass order is the priority order for overlap resolution.
    fn collect_candidates(&self, text: &str, findings: &[Finding]) -> Vec<Span> {
        let mut candidates = Vec::new();

        for finding in findings {
            if finding.kind != IndicatorKind::SuspiciousUrl || finding.matched_text.is_empty() {
                continue;
            }
            for (start, matched) in text.match_indices(finding.matched_text.as_str()) {
                candidates.push(Span {
                    start,
                    end: start + matched.len(),
                    severity: Severity::High,
                    tooltip: format!("URL suspect: {}", finding.rationale),
                });
            }
        }

        if findings
            .iter()
            .any(|f| f.kind == IndicatorKind::UrgencyLanguage)
        {
            for matcher in &self.urgency_matchers {
                for m in matcher.find_iter(text) {
                    candidates.push(Span {
                        start: m.start(),
                        end: m.end(),
                        severity: Severity::Medium,
                        tooltip: URGENCY_TOOLTIP.to_string(),
                    });
                }
            }
        }

        if findings
            .iter()
            .any(|f| f.kind == IndicatorKind::SensitiveDataRequest)
        {
            for matcher in &self.phrase_matchers {
                if let Some(m) = matcher.find(text) {
                    candidates.push(Span {
                        start: m.start(),
                        end: m.end(),
                        severity: Severity::High,
                        tooltip: SENSITIVE_TOOLTIP.to_string(),
                    });
                }
            }
        }

        candidates
    }
}

fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_finding(url: &str, rationale: &str) -> Finding {
        Finding {
            kind: IndicatorKind::SuspiciousUrl,
            rationale: rationale.to_string(),
            matched_text: url.to_string(),
            severity: Severity::High,
        }
    }

    fn kind_finding(kind: IndicatorKind) -> Finding {
        Finding {
            kind,
            rationale: "r".to_string(),
            matched_text: "m".to_string(),
            severity: Severity::High,
        }
    }

    #[test]
    fn test_no_findings_returns_input_unchanged() {
        let highlighter = TextHighlighter::default();
        let text = "Acționați acum pe http://bit.ly/x și introduceți parola";
        assert_eq!(highlighter.highlight(text, &[]), text);
    }

    #[test]
    fn test_url_span_carries_rationale_tooltip() {
        let highlighter = TextHighlighter::default();
        let finding = url_finding(
            "http://bit.ly/x",
            "Link-ul conține indicatori de fraudă: URL scurtat care ascunde destinația reală",
        );
        let out = highlighter.highlight("Click http://bit.ly/x pentru premiu", &[finding]);
        assert!(out.contains(
            "title=\"URL suspect: Link-ul conține indicatori de fraudă: URL scurtat care ascunde destinația reală\""
        ));
        assert!(out.contains(">http://bit.ly/x</span>"));
        assert!(out.contains(HIGH_STYLE));
        assert_eq!(out.matches("<span").count(), 1);
    }

    #[test]
    fn test_urgency_pass_requires_urgency_finding() {
        let highlighter = TextHighlighter::default();
        let text = "Acționați acum";
        // A URL finding alone must not enable the urgency word pass.
        let unrelated = url_finding("http://bit.ly/x", "r");
        assert_eq!(highlighter.highlight(text, &[unrelated]), text);

        let out = highlighter.highlight(text, &[kind_finding(IndicatorKind::UrgencyLanguage)]);
        assert!(out.contains(&format!(
            "<span style=\"{}\" title=\"{}\">acum</span>",
            MEDIUM_STYLE, URGENCY_TOOLTIP
        )));
    }

    #[test]
    fn test_urgency_wraps_whole_words_preserving_case() {
        let highlighter = TextHighlighter::default();
        let out = highlighter.highlight(
            "ACUM, nu acumulați întrebări",
            &[kind_finding(IndicatorKind::UrgencyLanguage)],
        );
        assert!(out.contains(">ACUM</span>"));
        // "acum" inside another word stays untouched.
        assert!(out.contains("nu acumulați întrebări"));
        assert_eq!(out.matches("<span").count(), 1);
    }

    #[test]
    fn test_urgency_wraps_every_occurrence() {
        let highlighter = TextHighlighter::default();
        let out = highlighter.highlight(
            "urgent, repetăm: urgent",
            &[kind_finding(IndicatorKind::UrgencyLanguage)],
        );
        assert_eq!(out.matches("<span").count(), 2);
    }

    #[test]
    fn test_sensitive_phrase_wraps_first_occurrence_only() {
        let highlighter = TextHighlighter::default();
        let text = "Verificați contul azi. Mâine verificați contul din nou.";
        let out = highlighter.highlight(text, &[kind_finding(IndicatorKind::SensitiveDataRequest)]);
        assert_eq!(out.matches("<span").count(), 1);
        assert!(out.contains(">Verificați contul</span>"));
        assert!(out.contains("Mâine verificați contul din nou."));
    }

    #[test]
    fn test_overlapping_phrases_keep_first_span() {
        let highlighter = TextHighlighter::default();
        let text = "Confirmați datele cardului imediat";
        let out = highlighter.highlight(text, &[kind_finding(IndicatorKind::SensitiveDataRequest)]);
        // "confirmați datele" wins; the overlapping "datele cardului" is skipped.
        assert!(out.contains(">Confirmați datele</span>"));
        assert!(out.contains(" cardului imediat"));
        assert_eq!(out.matches("<span").count(), 1);
    }

    #[test]
    fn test_later_pass_never_corrupts_url_span() {
        let highlighter = TextHighlighter::default();
        let url = "http://urgent-acum.bit.ly/x";
        let findings = vec![
            url_finding(url, "r"),
            kind_finding(IndicatorKind::UrgencyLanguage),
        ];
        let out = highlighter.highlight(&format!("Vezi {url} azi"), &findings);
        // The urgency words inside the wrapped URL are left alone.
        assert_eq!(out.matches("<span").count(), 1);
        assert!(out.contains(&format!(">{url}</span>")));
    }

    #[test]
    fn test_tooltip_attribute_is_escaped() {
        let highlighter = TextHighlighter::default();
        let finding = url_finding("http://x.info/a", "motiv \"special\" <b>&");
        let out = highlighter.highlight("pe http://x.info/a", &[finding]);
        assert!(out.contains("URL suspect: motiv &quot;special&quot; &lt;b&gt;&amp;"));
    }

    #[test]
    fn test_unmatched_url_finding_changes_nothing() {
        let highlighter = TextHighlighter::default();
        let finding = url_finding("http://bit.ly/alt", "r");
        let text = "fără linkul respectiv";
        assert_eq!(highlighter.highlight(text, &[finding]), text);
    }

    #[test]
    fn test_severity_styles_are_distinct() {
        assert_ne!(style_for(Severity::High), style_for(Severity::Medium));
        assert_ne!(
            style_for(Severity::Medium),
            style_for(Severity::Informational)
        );
    }
}
