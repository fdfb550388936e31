//! Resume-evaluation parser: turns the ATS-style narrative returned by the
//! resume-evaluation service into an `EvaluationSummary`. Never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::evaluation::EvaluationSummary;
use crate::narrative::scan::{contains_ci, labelled_section};
use crate::narrative::vocab::{
    DEFAULT_IMPROVEMENTS, DEFAULT_KEYWORDS, DEFAULT_STRENGTHS, EVALUATION_KEYWORDS,
    IMPROVEMENT_LABELS, MIN_IMPROVEMENT_CHARS, POSITIVE_PATTERNS, SECTION_TERMINATOR,
    STRENGTH_LABELS,
};

/// Score patterns, tried in order; the first that matches anywhere wins.
static SCORE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)Percentage Match:?\s*([0-9]+)%",
        r"(?i)Match:?\s*([0-9]+)%",
        r"(?i)Score:?\s*([0-9]+)%",
        r"(?i)([0-9]+)%\s*match",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("score regex is valid"))
    .collect()
});

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = EVALUATION_KEYWORDS
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("keyword regex is valid")
});

pub fn parse_evaluation(text: &str) -> EvaluationSummary {
    let improvements_text = first_section(text, IMPROVEMENT_LABELS);
    let strengths_text = first_section(text, STRENGTH_LABELS);

    let improvements: Vec<String> = sentences(improvements_text)
        .filter(|s| s.chars().count() > MIN_IMPROVEMENT_CHARS)
        .collect();

    let strengths: Vec<String> = sentences(strengths_text)
        .filter(|s| POSITIVE_PATTERNS.iter().any(|p| contains_ci(s, p)))
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    let haystack = format!("{strengths_text} {improvements_text}");
    for m in KEYWORD_RE.find_iter(&haystack) {
        let k = m.as_str().to_lowercase();
        if !keywords.contains(&k) {
            keywords.push(k);
        }
    }

    EvaluationSummary {
        score: extract_score(text),
        strengths: or_default(strengths, DEFAULT_STRENGTHS),
        improvements: or_default(improvements, DEFAULT_IMPROVEMENTS),
        keywords: or_default(keywords, DEFAULT_KEYWORDS),
    }
}

fn extract_score(text: &str) -> u8 {
    SCORE_RES
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|c| c.get(1))
        // ASCII digits only, so the parse can fail solely on overflow.
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX).min(100) as u8)
        .unwrap_or(0)
}

/// Body of the first label (in priority order) that appears in `text`.
fn first_section<'a>(text: &'a str, labels: &[&str]) -> &'a str {
    labels
        .iter()
        .find_map(|label| labelled_section(text, label, SECTION_TERMINATOR))
        .map(str::trim)
        .unwrap_or("")
}

/// Splits on periods and newlines, dropping list markers and blanks.
fn sentences(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(['.', '\n'])
        .map(|s| s.trim_start_matches(|c: char| c.is_whitespace() || c == '-' || c == '*'))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn or_default(found: Vec<String>, default: &[&str]) -> Vec<String> {
    if found.is_empty() {
        default.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATS_RESPONSE: &str = "**Percentage Match: 78%**\n\n**Keywords Missing:**\n- Kubernetes experience.\n- GraphQL\n- CI/CD pipelines\n\n**Final Thoughts:** The candidate has strong React skills. Needs polish on cloud deployment. Overall a good fit for the web development team.";

    #[test]
    fn test_score_from_percentage_match_label() {
        assert_eq!(parse_evaluation(ATS_RESPONSE).score, 78);
    }

    #[test]
    fn test_score_alternatives() {
        assert_eq!(parse_evaluation("Score: 64%").score, 64);
        assert_eq!(parse_evaluation("roughly a 55% match overall").score, 55);
        assert_eq!(parse_evaluation("no numbers at all").score, 0);
    }

    #[test]
    fn test_score_clamped_to_100() {
        assert_eq!(parse_evaluation("Match: 250%").score, 100);
        assert_eq!(parse_evaluation("Match: 99999999999999999999999%").score, 100);
    }

    #[test]
    fn test_improvements_from_missing_keywords() {
        let summary = parse_evaluation(ATS_RESPONSE);
        assert_eq!(
            summary.improvements,
            vec!["Kubernetes experience", "GraphQL", "CI/CD pipelines"]
        );
    }

    #[test]
    fn test_short_improvement_lines_dropped() {
        let summary = parse_evaluation("Keywords Missing:\n- Go\n- Terraform");
        assert_eq!(summary.improvements, vec!["Terraform"]);
    }

    #[test]
    fn test_strengths_keep_positive_sentences_only() {
        let summary = parse_evaluation(ATS_RESPONSE);
        assert_eq!(
            summary.strengths,
            vec![
                "The candidate has strong React skills",
                "Overall a good fit for the web development team"
            ]
        );
    }

    #[test]
    fn test_keywords_are_whole_words_lowercased_and_unique() {
        let summary = parse_evaluation(ATS_RESPONSE);
        assert_eq!(
            summary.keywords,
            vec!["react", "cloud", "web", "development"]
        );
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let summary = parse_evaluation("The service is unavailable.");
        assert_eq!(summary.score, 0);
        assert_eq!(summary.strengths.len(), 3);
        assert_eq!(summary.strengths[0], "Strong technical background");
        assert_eq!(summary.improvements[1], "Add quantifiable achievements");
        assert_eq!(
            summary.keywords,
            vec!["development", "full-stack", "web", "frameworks"]
        );
    }

    #[test]
    fn test_fallback_labels_used_in_priority_order() {
        let text = "Areas for Improvement: Add metrics to every bullet.\n\n**Strengths:** Excellent Python depth.";
        let summary = parse_evaluation(text);
        assert_eq!(summary.improvements, vec!["Add metrics to every bullet"]);
        assert_eq!(summary.strengths, vec!["Excellent Python depth"]);
        assert_eq!(summary.keywords, vec!["python"]);
    }
}
