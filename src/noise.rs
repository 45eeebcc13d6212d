// WHY: The last defence before training data: tokens a reviewer (or the
// default G/R selection) condemned in the candidates file are struck from the
// output wholesale. The set loads once and is shared read-only by every
// worker.

use crate::vocab::WORD_PATTERN;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{LazyLock, OnceLock};
use tracing::info;

/// Categories stripped when the caller does not choose: garbage and
/// repeated-letter stutter. Mixed-case and the rest stay reviewable.
pub const DEFAULT_CATEGORIES: &[char] = &['G', 'R'];

static NOISE_WORDS: OnceLock<HashSet<String>> = OnceLock::new();
static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Load the noise set from a vocabulary-candidates file
/// (`FREQ | FLAGS | CAT | WORD | CONTEXT`), keeping only the requested
/// categories. Returns the number of words loaded. One-shot: a second call
/// is refused and the loaded set retained.
pub fn init_noise_words(path: &Path, categories: &[char]) -> Result<usize> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut words = HashSet::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 4 {
            continue;
        }
        let cat = fields[2];
        let word = fields[3];
        if word.is_empty() || cat.chars().count() != 1 {
            continue;
        }
        let cat = cat.chars().next().unwrap().to_ascii_uppercase();
        if categories.contains(&cat) {
            words.insert(word.to_lowercase());
        }
    }

    let count = words.len();
    if NOISE_WORDS.set(words).is_err() {
        bail!("noise words already initialized");
    }
    info!("noise set initialized with {count} words from {}", path.display());
    Ok(count)
}

pub fn noise_words_loaded() -> bool {
    NOISE_WORDS.get().is_some()
}

/// Remove noise tokens from `text`. Matching tokens become a single space and
/// runs of spaces collapse afterwards. Returns the text and how many tokens
/// were stripped.
pub fn strip_noise(text: &str) -> (String, u64) {
    let Some(words) = NOISE_WORDS.get() else {
        return (text.to_string(), 0);
    };
    if words.is_empty() {
        return (text.to_string(), 0);
    }

    let mut out = String::with_capacity(text.len());
    let mut stripped = 0u64;
    let mut last = 0usize;

    for m in WORD_PATTERN.find_iter(text) {
        if words.contains(&m.as_str().to_lowercase()) {
            out.push_str(&text[last..m.start()]);
            out.push(' ');
            stripped += 1;
            last = m.end();
        }
    }
    out.push_str(&text[last..]);

    if stripped == 0 {
        return (out, 0);
    }
    (MULTI_SPACE.replace_all(&out, " ").into_owned(), stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn init_once() {
        static INIT: OnceLock<()> = OnceLock::new();
        INIT.get_or_init(|| {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "# Vocabulary candidates for review").unwrap();
            writeln!(file, "# Format: FREQ | FLAGS | CAT | WORD | CONTEXT").unwrap();
            writeln!(file, "   412 | C? | G  | qqxv                 | ...the qqxv stood...").unwrap();
            writeln!(file, "    88 |  ? | R  | Meee                 | ...Meee cried...").unwrap();
            writeln!(file, "    40 |  ? | M  | BosTon               | ...in BosTon...").unwrap();
            writeln!(file, "    12 | C  | -  | Wessex               | ...in Wessex...").unwrap();
            let count = init_noise_words(file.path(), DEFAULT_CATEGORIES).unwrap();
            // G and R rows only; M and unflagged rows stay.
            assert_eq!(count, 2);
        });
    }

    #[test]
    fn strips_selected_categories_only() {
        init_once();
        let (out, stripped) = strip_noise("the qqxv stood near BosTon while Meee cried");
        assert_eq!(out, "the stood near BosTon while cried");
        assert_eq!(stripped, 2);
    }

    #[test]
    fn stripping_is_case_insensitive() {
        init_once();
        let (out, stripped) = strip_noise("QQXV at dawn");
        assert_eq!(out.trim_start(), "at dawn");
        assert_eq!(stripped, 1);
    }

    #[test]
    fn clean_text_is_unchanged() {
        init_once();
        let input = "nothing suspicious here at all";
        let (out, stripped) = strip_noise(input);
        assert_eq!(out, input);
        assert_eq!(stripped, 0);
    }

    #[test]
    fn double_init_is_refused() {
        init_once();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  1 |  ? | G | other | ctx").unwrap();
        assert!(init_noise_words(file.path(), DEFAULT_CATEGORIES).is_err());
    }
}
