// WHY: OCR correction patterns as static data, compiled exactly once per process.
// Substitution order is load-bearing: long-s repairs make words recognizable for
// the li/h pass, which in turn feeds the ll/U pass, and so on down the table.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

mod tables;

/// Correction category attached to every substitution pattern.
/// Used as the key for per-category accounting in cleanup reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LongS,
    LiHConfusion,
    LlUConfusion,
    RnMConfusion,
    Ligature,
    WordJoin,
    Watermark,
    Anachronism,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LongS => "long_s",
            Category::LiHConfusion => "li_h_confusion",
            Category::LlUConfusion => "ll_u_confusion",
            Category::RnMConfusion => "rn_m_confusion",
            Category::Ligature => "ligature",
            Category::WordJoin => "word_join",
            Category::Watermark => "watermark",
            Category::Anachronism => "anachronism",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authored form of a substitution pattern, before compilation.
pub struct PatternSpec {
    pub category: Category,
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub note: Option<&'static str>,
}

/// A compiled substitution pattern. Order within [`OCR_PATTERNS`] matches the
/// authored table order.
pub struct OcrPattern {
    pub category: Category,
    pub name: &'static str,
    pub regex: Regex,
    pub replacement: &'static str,
}

/// A count-only pattern documenting a historical-vs-OCR ambiguity.
/// These are reported for human review and never substituted.
pub struct ContextPattern {
    pub name: &'static str,
    pub regex: Regex,
    pub note: &'static str,
}

/// The full substitution table, compiled once on first access.
/// A malformed pattern aborts the process; the engine refuses to run with a
/// partial table.
pub static OCR_PATTERNS: LazyLock<Vec<OcrPattern>> = LazyLock::new(|| {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    tables::SUBSTITUTIONS
        .iter()
        .map(|spec| {
            assert!(!spec.name.is_empty(), "OCR pattern with empty name");
            if let Some(prev) = seen.insert(spec.name, spec.pattern) {
                panic!("duplicate OCR pattern name {:?} ({} / {})", spec.name, prev, spec.pattern);
            }
            let regex = Regex::new(spec.pattern)
                .unwrap_or_else(|e| panic!("invalid OCR pattern {:?}: {e}", spec.name));
            OcrPattern {
                category: spec.category,
                name: spec.name,
                regex,
                replacement: spec.replacement,
            }
        })
        .collect()
});

/// Count-only context patterns, compiled once on first access.
pub static CONTEXT_PATTERNS: LazyLock<Vec<ContextPattern>> = LazyLock::new(|| {
    tables::CONTEXT
        .iter()
        .map(|(name, pattern, note)| ContextPattern {
            name,
            regex: Regex::new(pattern)
                .unwrap_or_else(|e| panic!("invalid context pattern {:?}: {e}", name)),
            note,
        })
        .collect()
});

static NAME_INDEX: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    OCR_PATTERNS.iter().map(|p| (p.name, p.category)).collect()
});

/// Constant-time category lookup by pattern name, for reporting.
pub fn categorize(pattern_name: &str) -> Option<Category> {
    NAME_INDEX.get(pattern_name).copied()
}
