// WHY: Vocabulary extraction is the review channel for everything the pattern
// tables refuse to touch. It runs as a second pass over cleaned files and
// produces candidates a human (or a loaded dictionary) can rule on.

use crate::dictionary;
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Word shape shared by extraction and noise stripping: letters with internal
/// apostrophes.
pub static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:[A-Za-z][A-Za-z']*[A-Za-z]|[A-Za-z])\b").unwrap());

static CONSONANT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[bcdfghjklmnpqrstvwxz]{4,}").unwrap());
static TRIPLE_REPEAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:aaa|bbb|ccc|ddd|eee|fff|ggg|hhh|iii|jjj|kkk|lll|mmm|nnn|ooo|ppp|qqq|rrr|sss|ttt|uuu|vvv|www|xxx|yyy|zzz)",
    )
    .unwrap()
});
static LOWER_THEN_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z][A-Z]").unwrap());
static UPPER_RUN_THEN_LOWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,}[a-z]").unwrap());
static RN_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^rn[a-z]").unwrap());

/// Legitimate shapes that look odd but must not be flagged: Roman numerals,
/// Mc/Mac surnames, -ville place names.
static SKIP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$",
        r"^M[ac][A-Z][a-z]+$",
        r"^Mac[A-Z][a-z]+$",
        r"^[A-Z][a-z]+ville$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Orphan affixes that survive as standalone tokens when a line break or
/// stray space severs them from their stem.
const ORPHAN_FRAGMENTS: &[&str] = &[
    "ing", "ion", "ed", "ly", "er", "ent", "ess", "pre", "con", "ter", "ous", "ful",
];

/// Vocabulary that cannot occur in pre-1914 text.
const MODERN_VOCAB: &[&str] = &[
    "google", "internet", "website", "online", "email", "software", "webpage", "download",
    "upload", "blog", "ebook", "hyperlink",
];

/// Function words too common to be worth reviewing.
static SKIP_WORDS: LazyLock<std::collections::HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
        "can", "need", "this", "that", "these", "those", "it", "its", "he", "she", "they",
        "him", "her", "them", "his", "their", "my", "your", "our", "who", "which", "what",
        "where", "when", "why", "how", "all", "each", "every", "both", "few", "more", "most",
        "other", "some", "such", "no", "not", "only", "same", "so", "than", "too", "very",
        "just", "also", "now", "i", "you", "we", "me", "us",
    ]
    .into_iter()
    .collect()
});

/// Why a token was flagged. Single-letter codes appear in the candidates file
/// and drive noise-category selection downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspicionCode {
    Garbage,
    Repeated,
    MixedCase,
    Confusable,
    Fragment,
    Modern,
}

impl SuspicionCode {
    pub fn code(&self) -> char {
        match self {
            SuspicionCode::Garbage => 'G',
            SuspicionCode::Repeated => 'R',
            SuspicionCode::MixedCase => 'M',
            SuspicionCode::Confusable => 'C',
            SuspicionCode::Fragment => 'F',
            SuspicionCode::Modern => 'X',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuspicionCode::Garbage => "garbage",
            SuspicionCode::Repeated => "repeated",
            SuspicionCode::MixedCase => "mixed_case",
            SuspicionCode::Confusable => "confusable",
            SuspicionCode::Fragment => "fragment",
            SuspicionCode::Modern => "modern",
        }
    }

    pub fn reason(&self) -> String {
        format!("{}:{}", self.code(), self.label())
    }
}

/// One unique token accumulated across the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordInfo {
    /// First-seen form, upgraded to a capitalized sighting when one appears.
    pub word: String,
    pub word_lower: String,
    pub frequency: u64,
    pub is_capitalized: bool,
    pub is_suspicious: bool,
    pub suspicious_reason: String,
    /// Surrounding text of the first occurrence, whitespace-collapsed.
    pub context: String,
}

/// Classify a token against the suspicion rules, first match wins.
pub fn classify(word: &str) -> Option<SuspicionCode> {
    if CONSONANT_RUN.is_match(word) {
        return Some(SuspicionCode::Garbage);
    }
    if TRIPLE_REPEAT.is_match(word) {
        return Some(SuspicionCode::Repeated);
    }
    if LOWER_THEN_UPPER.is_match(word) || UPPER_RUN_THEN_LOWER.is_match(word) {
        return Some(SuspicionCode::MixedCase);
    }
    if RN_START.is_match(word) {
        return Some(SuspicionCode::Confusable);
    }
    let lower = word.to_lowercase();
    if word.chars().count() <= 3 && ORPHAN_FRAGMENTS.contains(&lower.as_str()) {
        return Some(SuspicionCode::Fragment);
    }
    if MODERN_VOCAB.contains(&lower.as_str()) {
        return Some(SuspicionCode::Modern);
    }
    None
}

/// Accumulate vocabulary from `text` into `acc`, keyed by lowercase token.
/// Returns the number of tokens considered.
pub fn extract_from_text(
    text: &str,
    context_chars: usize,
    acc: &mut HashMap<String, WordInfo>,
) -> u64 {
    let mut total = 0u64;

    for m in WORD_PATTERN.find_iter(text) {
        let word = m.as_str();
        if word.len() < 2 {
            continue;
        }
        let word_lower = word.to_lowercase();
        if SKIP_WORDS.contains(word_lower.as_str())
            || dictionary::whitelist_contains(&word_lower)
            || SKIP_PATTERNS.iter().any(|p| p.is_match(word))
        {
            continue;
        }
        total += 1;

        let is_cap = word.chars().next().is_some_and(|c| c.is_uppercase());
        if let Some(entry) = acc.get_mut(&word_lower) {
            entry.frequency += 1;
            if is_cap {
                entry.is_capitalized = true;
                if !entry.word.chars().next().is_some_and(|c| c.is_uppercase()) {
                    entry.word = word.to_string();
                }
            }
            continue;
        }

        let mut suspicion = classify(word);
        // A loaded dictionary outranks the shape heuristics.
        if suspicion.is_some() && dictionary::dictionaries_loaded() && dictionary::is_known_word(word)
        {
            suspicion = None;
        }
        acc.insert(
            word_lower.clone(),
            WordInfo {
                word: word.to_string(),
                word_lower,
                frequency: 1,
                is_capitalized: is_cap,
                is_suspicious: suspicion.is_some(),
                suspicious_reason: suspicion.map(|s| s.reason()).unwrap_or_default(),
                context: extract_context(text, m.start(), m.end(), context_chars),
            },
        );
    }
    total
}

/// Extract vocabulary from one file on disk.
pub fn extract_from_file(
    path: &Path,
    context_chars: usize,
    acc: &mut HashMap<String, WordInfo>,
) -> Result<u64> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(extract_from_text(&content, context_chars, acc))
}

/// Slice out up to `context_chars` characters either side of a match,
/// expanded to word boundaries, whitespace-collapsed, and ellipsized.
fn extract_context(text: &str, start: usize, end: usize, context_chars: usize) -> String {
    let ctx_start = text[..start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);
    let ctx_end = text[end..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, _)| end + i)
        .unwrap_or(end);

    // Widen to whole ASCII words so the snippet never opens mid-token.
    let bytes = text.as_bytes();
    let mut s = ctx_start;
    while s > 0 && text.is_char_boundary(s - 1) && bytes[s - 1].is_ascii_alphanumeric() {
        s -= 1;
    }
    let mut e = ctx_end.min(text.len());
    while e < text.len() && text.is_char_boundary(e) && bytes[e].is_ascii_alphanumeric() {
        e += 1;
    }
    while !text.is_char_boundary(e) {
        e += 1;
    }

    let mut snippet = text[s..e].split_whitespace().collect::<Vec<_>>().join(" ");
    if s > 0 {
        snippet.insert_str(0, "...");
    }
    if e < text.len() {
        snippet.push_str("...");
    }
    snippet
}

/// Write the pipe-separated candidates file, suspicious entries first, then
/// by descending frequency. Dictionary-known non-suspicious words are
/// omitted: they need no review.
pub fn write_candidates(
    path: &Path,
    candidates: &HashMap<String, WordInfo>,
    min_freq: u64,
) -> Result<usize> {
    let mut filtered: Vec<&WordInfo> = candidates
        .values()
        .filter(|c| c.frequency >= min_freq)
        .filter(|c| {
            c.is_suspicious
                || !dictionary::dictionaries_loaded()
                || !dictionary::is_known_word(&c.word)
        })
        .collect();
    filtered.sort_by(|a, b| {
        b.is_suspicious
            .cmp(&a.is_suspicious)
            .then(b.frequency.cmp(&a.frequency))
            .then(a.word_lower.cmp(&b.word_lower))
    });

    let mut out = String::new();
    out.push_str("# Vocabulary candidates for review\n");
    out.push_str("#\n");
    out.push_str("# Format: FREQ | FLAGS | CAT | WORD | CONTEXT\n");
    out.push_str("# Flags: C=capitalized, ?=suspicious\n");
    out.push_str("# Category codes: G=garbage, R=repeated, M=mixed_case, C=confusable, F=fragment, X=modern\n");
    out.push_str(&format!("# Total candidates: {}\n", filtered.len()));
    out.push_str("#\n");

    for c in &filtered {
        let flags = format!(
            "{}{}",
            if c.is_capitalized { 'C' } else { ' ' },
            if c.is_suspicious { '?' } else { ' ' }
        );
        let cat = c
            .suspicious_reason
            .chars()
            .next()
            .filter(|_| c.is_suspicious)
            .unwrap_or('-');
        out.push_str(&format!(
            "{:6} | {} | {}  | {:20} | {}\n",
            c.frequency, flags, cat, c.word, c.context
        ));
    }

    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(filtered.len())
}

/// Load a whitelist file: one word per line, `#` comments.
pub fn load_whitelist_file(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consonant_clusters_are_garbage() {
        assert_eq!(classify("xkcdqrs"), Some(SuspicionCode::Garbage));
    }

    #[test]
    fn stuttered_letters_are_repeated() {
        assert_eq!(classify("Meee"), Some(SuspicionCode::Repeated));
    }

    #[test]
    fn midword_case_flip_is_mixed_case() {
        assert_eq!(classify("BosTon"), Some(SuspicionCode::MixedCase));
        assert_eq!(classify("THe"), Some(SuspicionCode::MixedCase));
    }

    #[test]
    fn rn_onset_is_confusable() {
        assert_eq!(classify("rnorning"), Some(SuspicionCode::Confusable));
    }

    #[test]
    fn orphan_affix_is_fragment() {
        assert_eq!(classify("ing"), Some(SuspicionCode::Fragment));
        assert_eq!(classify("ter"), Some(SuspicionCode::Fragment));
    }

    #[test]
    fn modern_terms_are_flagged() {
        assert_eq!(classify("email"), Some(SuspicionCode::Modern));
    }

    #[test]
    fn ordinary_words_pass() {
        assert_eq!(classify("carriage"), None);
        assert_eq!(classify("London"), None);
        assert_eq!(classify("rhythm"), None);
    }

    #[test]
    fn roman_numerals_and_surnames_are_skipped() {
        let mut acc = HashMap::new();
        extract_from_text("XVIII McDonald MacArthur Nashville remained", 40, &mut acc);
        assert!(!acc.contains_key("xviii"));
        assert!(!acc.contains_key("mcdonald"));
        assert!(!acc.contains_key("macarthur"));
        assert!(!acc.contains_key("nashville"));
        assert!(acc.contains_key("remained"));
    }

    #[test]
    fn capitalized_sighting_upgrades_entry() {
        let mut acc = HashMap::new();
        extract_from_text("wessex is old. Wessex again.", 40, &mut acc);
        let entry = &acc["wessex"];
        assert_eq!(entry.frequency, 2);
        assert!(entry.is_capitalized);
        assert_eq!(entry.word, "Wessex");
    }

    #[test]
    fn duplicates_collapse_by_lowercase() {
        let mut acc = HashMap::new();
        let total = extract_from_text("Harbour harbour HARBOUR", 40, &mut acc);
        assert_eq!(total, 3);
        assert_eq!(acc.len(), 1);
        assert_eq!(acc["harbour"].frequency, 3);
    }

    #[test]
    fn context_is_collapsed_and_ellipsized() {
        let text = "a long   preamble before the curious zzyzzx token and then more text after it";
        let mut acc = HashMap::new();
        extract_from_text(text, 12, &mut acc);
        let ctx = &acc["zzyzzx"].context;
        assert!(ctx.contains("zzyzzx"));
        assert!(!ctx.contains("  "));
        assert!(ctx.starts_with("...") && ctx.ends_with("..."));
    }

    #[test]
    fn apostrophes_stay_internal() {
        let mut acc = HashMap::new();
        extract_from_text("the squire's dog", 40, &mut acc);
        assert!(acc.contains_key("squire's"));
    }

    #[test]
    fn skip_words_are_not_collected() {
        let mut acc = HashMap::new();
        extract_from_text("the and of with carriage", 40, &mut acc);
        assert_eq!(acc.len(), 1);
        assert!(acc.contains_key("carriage"));
    }
}
