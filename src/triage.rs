// WHY: Triage runs before any expensive pattern work so that garbage scans,
// catalogue indexes, and foreign-language material never reach the cleanup
// stages. One pass over the characters, one pass over the lines.

use crate::language::LangResult;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Catalogue-index line shapes: a short line trailing off into digits, or the
/// "NAME, Forename ... digits" register form.
static CATALOG_NAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[A-Z][A-Za-z'’-]+,\s+[A-Z].*\d\s*$").unwrap()
});
static CATALOG_TRAILING_NUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.{0,40}\s\d{1,5}[.,]?\s*$").unwrap());

/// Decision thresholds, tuned on corpus samples. Exposed so the driver can
/// override them from the command line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TriageThresholds {
    /// Reject below this share of alphabetic characters.
    pub min_alpha_ratio: f64,
    /// Reject documents shorter than this many characters.
    pub min_char_count: usize,
    /// Reject above this share of catalogue-index lines.
    pub max_list_pattern_ratio: f64,
    /// Flag for review above this line-length coefficient of variation.
    pub max_line_length_cv: f64,
    /// Flag for review above this share of fragment lines.
    pub max_fragment_ratio: f64,
}

impl Default for TriageThresholds {
    fn default() -> Self {
        Self {
            min_alpha_ratio: 0.6,
            min_char_count: 500,
            max_list_pattern_ratio: 0.3,
            max_line_length_cv: 1.5,
            max_fragment_ratio: 0.4,
        }
    }
}

/// Structural signals computed in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageMetrics {
    pub line_count: usize,
    pub char_count: usize,
    pub alpha_ratio: f64,
    pub mean_words_per_line: f64,
    pub line_length_cv: f64,
    pub fragment_ratio: f64,
    pub list_pattern_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageAction {
    Process,
    Review,
    Reject,
}

/// The judgment for one document. Problems appear in severity order: reject
/// reasons first, so the first entry is the reportable rejection cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResult {
    pub action: TriageAction,
    pub problems: Vec<String>,
    pub metrics: TriageMetrics,
    pub detected_lang: String,
    pub lang_confidence: f64,
    pub is_english: bool,
}

impl TriageResult {
    /// The first-hit rejection reason, if this document was rejected.
    pub fn reject_reason(&self) -> Option<&str> {
        if self.action == TriageAction::Reject {
            self.problems.first().map(|s| s.as_str())
        } else {
            None
        }
    }
}

/// Compute structural metrics over `text` in O(chars).
///
/// Character accounting treats punctuation as neutral: the alpha ratio is
/// alphabetic characters over non-whitespace, non-punctuation characters, so
/// comma-separated registers are judged on their letters and digits rather
/// than their separators. Line statistics are over non-empty lines.
pub fn compute_metrics(text: &str) -> TriageMetrics {
    let mut char_count = 0usize;
    let mut alpha = 0usize;
    let mut countable = 0usize;

    for c in text.chars() {
        char_count += 1;
        if c.is_whitespace() || is_neutral_punctuation(c) {
            continue;
        }
        countable += 1;
        if c.is_alphabetic() {
            alpha += 1;
        }
    }

    let alpha_ratio = if countable > 0 {
        alpha as f64 / countable as f64
    } else {
        0.0
    };

    let mut line_count = 0usize;
    let mut length_sum = 0.0f64;
    let mut length_sq_sum = 0.0f64;
    let mut word_total = 0usize;
    let mut fragment_lines = 0usize;
    let mut list_lines = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        line_count += 1;
        let len = line.chars().count() as f64;
        length_sum += len;
        length_sq_sum += len * len;
        let words = line.split_whitespace().count();
        word_total += words;
        if words <= 3 {
            fragment_lines += 1;
        }
        if CATALOG_NAME_DATE.is_match(line) || CATALOG_TRAILING_NUM.is_match(line) {
            list_lines += 1;
        }
    }

    let (mean_words_per_line, line_length_cv, fragment_ratio, list_pattern_ratio) =
        if line_count > 0 {
            let n = line_count as f64;
            let mean_len = length_sum / n;
            let cv = if line_count > 1 && mean_len > 0.0 {
                let variance = (length_sq_sum - n * mean_len * mean_len) / (n - 1.0);
                variance.max(0.0).sqrt() / mean_len
            } else {
                0.0
            };
            (
                word_total as f64 / n,
                cv,
                fragment_lines as f64 / n,
                list_lines as f64 / n,
            )
        } else {
            (0.0, 0.0, 0.0, 0.0)
        };

    TriageMetrics {
        line_count,
        char_count,
        alpha_ratio,
        mean_words_per_line,
        line_length_cv,
        fragment_ratio,
        list_pattern_ratio,
    }
}

fn is_neutral_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c, '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' | '\u{2013}' | '\u{2014}' | '\u{2026}')
}

/// Judge a document from its metrics and language verdict.
pub fn evaluate(text: &str, lang: &LangResult, thresholds: &TriageThresholds) -> TriageResult {
    let metrics = compute_metrics(text);
    let mut problems = Vec::new();

    if metrics.alpha_ratio < thresholds.min_alpha_ratio {
        problems.push("low_alpha_ratio".to_string());
    }
    if !lang.is_english {
        problems.push("non_english".to_string());
    }
    if metrics.char_count < thresholds.min_char_count {
        problems.push("too_short".to_string());
    }
    if metrics.list_pattern_ratio > thresholds.max_list_pattern_ratio {
        problems.push("catalog_index".to_string());
    }

    let reject = !problems.is_empty();

    if metrics.line_length_cv > thresholds.max_line_length_cv {
        problems.push("multicolumn".to_string());
    }
    if metrics.fragment_ratio > thresholds.max_fragment_ratio {
        problems.push("fragmented".to_string());
    }

    let action = if reject {
        TriageAction::Reject
    } else if !problems.is_empty() {
        TriageAction::Review
    } else {
        TriageAction::Process
    };

    TriageResult {
        action,
        problems,
        metrics,
        detected_lang: lang.detected_lang.clone(),
        lang_confidence: lang.confidence,
        is_english: lang.is_english,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LangResult {
        LangResult {
            is_english: true,
            detected_lang: "eng".to_string(),
            confidence: 0.95,
        }
    }

    fn prose(paragraphs: usize) -> String {
        "The expedition left the harbour at dawn and made steady progress along \
         the coast, the crew watching the weather with growing unease as the \
         clouds gathered over the northern headlands.\n\n"
            .repeat(paragraphs)
    }

    #[test]
    fn ordinary_prose_passes() {
        let result = evaluate(&prose(5), &english(), &TriageThresholds::default());
        assert_eq!(result.action, TriageAction::Process);
        assert!(result.problems.is_empty());
    }

    #[test]
    fn catalog_index_is_rejected_with_catalog_reason() {
        let text = "Smith, John, 1843, 12\n".repeat(200);
        let result = evaluate(&text, &english(), &TriageThresholds::default());
        assert_eq!(result.action, TriageAction::Reject);
        assert_eq!(result.reject_reason(), Some("catalog_index"));
        assert!(result.metrics.list_pattern_ratio > 0.3);
    }

    #[test]
    fn short_document_is_rejected() {
        let result = evaluate(
            "A single decent sentence, but far too little of it.",
            &english(),
            &TriageThresholds::default(),
        );
        assert_eq!(result.action, TriageAction::Reject);
        assert_eq!(result.reject_reason(), Some("too_short"));
    }

    #[test]
    fn non_english_is_rejected() {
        let lang = LangResult {
            is_english: false,
            detected_lang: "fra".to_string(),
            confidence: 0.9,
        };
        let result = evaluate(&prose(5), &lang, &TriageThresholds::default());
        assert_eq!(result.action, TriageAction::Reject);
        assert_eq!(result.reject_reason(), Some("non_english"));
    }

    #[test]
    fn digit_noise_is_low_alpha() {
        let text = "0214 9983 1277 5541 8876 3321 0012 7644\n".repeat(40);
        let result = evaluate(&text, &english(), &TriageThresholds::default());
        assert_eq!(result.action, TriageAction::Reject);
        assert!(result.problems.contains(&"low_alpha_ratio".to_string()));
    }

    #[test]
    fn fragmented_text_is_flagged_for_review() {
        let mut text = prose(4);
        for _ in 0..200 {
            text.push_str("torn edge\n");
        }
        let result = evaluate(&text, &english(), &TriageThresholds::default());
        assert_eq!(result.action, TriageAction::Review);
        assert!(result.problems.contains(&"fragmented".to_string()));
    }

    #[test]
    fn empty_input_rejects() {
        let result = evaluate("", &english(), &TriageThresholds::default());
        assert_eq!(result.action, TriageAction::Reject);
        assert_eq!(result.metrics.char_count, 0);
        assert_eq!(result.metrics.line_count, 0);
    }

    #[test]
    fn whitespace_only_rejects() {
        let result = evaluate("   \n\n \t \n", &english(), &TriageThresholds::default());
        assert_eq!(result.action, TriageAction::Reject);
    }

    #[test]
    fn metrics_single_pass_matches_direct_counts() {
        let text = "alpha beta gamma\nshort 12\n\nlonger line with several words here\n";
        let m = compute_metrics(text);
        assert_eq!(m.line_count, 3);
        assert_eq!(m.char_count, text.chars().count());
        assert!(m.fragment_ratio > 0.0);
    }
}
