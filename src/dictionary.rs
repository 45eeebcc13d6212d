//! Process-wide word-membership oracle.
//!
//! Hunspell dictionaries for English, German, French, and Latin back the
//! vocabulary extractor's "is this a real word" checks. Historical corpora
//! quote all four languages freely, so membership in any of them clears a
//! token. Initialized once, read-only afterwards.

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{info, warn};
use zspell::Dictionary;

/// Language codes served, in reporting order. Each expects `<code>.aff` and
/// `<code>.dic` in the dictionary directory; a plain `<code>_words.txt` word
/// list is accepted as a fallback for languages whose affix files zspell
/// cannot digest (Latin, in practice).
const LANGUAGES: &[&str] = &["en", "de", "fr", "la"];

static DICTIONARIES: OnceLock<MultiLangDict> = OnceLock::new();
static WHITELIST: OnceLock<HashSet<String>> = OnceLock::new();

struct LangEntry {
    code: &'static str,
    dict: Option<Dictionary>,
    words: HashSet<String>,
}

impl LangEntry {
    fn loaded(&self) -> bool {
        self.dict.is_some() || !self.words.is_empty()
    }

    fn contains(&self, word: &str) -> bool {
        if let Some(ref d) = self.dict {
            if d.check_word(word) {
                return true;
            }
        }
        self.words.contains(word)
    }
}

struct MultiLangDict {
    entries: Vec<LangEntry>,
}

impl MultiLangDict {
    fn load(dir: &Path) -> Self {
        let entries = LANGUAGES
            .iter()
            .map(|code| LangEntry {
                code,
                dict: load_hunspell(dir, code),
                words: load_word_list(dir, code),
            })
            .collect();
        Self { entries }
    }

    fn any_loaded(&self) -> bool {
        self.entries.iter().any(|e| e.loaded())
    }

    fn check(&self, word: &str) -> bool {
        if self.entries.iter().any(|e| e.contains(word)) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.entries.iter().any(|e| e.contains(&lower))
    }

    fn languages(&self, word: &str) -> Vec<&'static str> {
        let lower = word.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.contains(word) || e.contains(&lower))
            .map(|e| e.code)
            .collect()
    }
}

fn load_hunspell(dir: &Path, code: &str) -> Option<Dictionary> {
    let aff_path = dir.join(format!("{code}.aff"));
    let dic_path = dir.join(format!("{code}.dic"));
    if !aff_path.exists() || !dic_path.exists() {
        return None;
    }

    let aff = match fs::read_to_string(&aff_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to read {}: {e}", aff_path.display());
            return None;
        }
    };
    let dic = match fs::read_to_string(&dic_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("failed to read {}: {e}", dic_path.display());
            return None;
        }
    };

    match zspell::builder().config_str(&aff).dict_str(&dic).build() {
        Ok(dict) => {
            info!("loaded {code} dictionary");
            Some(dict)
        }
        Err(e) => {
            warn!("failed to build {code} dictionary: {e}");
            None
        }
    }
}

fn load_word_list(dir: &Path, code: &str) -> HashSet<String> {
    let path = dir.join(format!("{code}_words.txt"));
    let Ok(content) = fs::read_to_string(&path) else {
        return HashSet::new();
    };
    let words: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();
    info!("loaded {} {code} words from word list", words.len());
    words
}

/// Load dictionaries from `dir`. Returns whether at least one language
/// loaded; a missing language is skipped with a warning. Calling this twice
/// is a programming error and the first set of dictionaries is retained.
pub fn init_dictionaries(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        bail!("dictionary directory not found: {}", dir.display());
    }
    let dict = MultiLangDict::load(dir);
    let loaded = dict.any_loaded();
    if DICTIONARIES.set(dict).is_err() {
        bail!("dictionaries already initialized");
    }
    Ok(loaded)
}

pub fn dictionaries_loaded() -> bool {
    DICTIONARIES.get().is_some_and(|d| d.any_loaded())
}

/// Case-insensitive membership across every loaded language.
pub fn is_known_word(word: &str) -> bool {
    DICTIONARIES.get().is_some_and(|d| d.check(word))
}

/// Which loaded languages recognize `word`.
pub fn word_languages(word: &str) -> Vec<&'static str> {
    DICTIONARIES
        .get()
        .map(|d| d.languages(word))
        .unwrap_or_default()
}

/// Install the reviewer-approved whitelist. Tokens on it are skipped wholesale
/// during vocabulary extraction. One-shot, like the dictionaries.
pub fn init_whitelist<I>(words: I) -> Result<usize>
where
    I: IntoIterator<Item = String>,
{
    let set: HashSet<String> = words.into_iter().map(|w| w.to_lowercase()).collect();
    let count = set.len();
    if WHITELIST.set(set).is_err() {
        bail!("whitelist already initialized");
    }
    info!("whitelist initialized with {count} words");
    Ok(count)
}

pub fn whitelist_contains(word_lower: &str) -> bool {
    WHITELIST.get().is_some_and(|w| w.contains(word_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_an_error() {
        let result = init_dictionaries(Path::new("/nonexistent/dictionaries"));
        assert!(result.is_err());
    }

    #[test]
    fn unloaded_service_knows_nothing() {
        // Safe regardless of other tests: a word no dictionary would carry.
        assert!(!is_known_word("zzxqqv"));
        assert!(word_languages("zzxqqv").is_empty());
    }
}
