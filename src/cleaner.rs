// WHY: The write-path for a single document. Stages run in a fixed order:
// normalize, language, triage, boilerplate, unwrap, pattern substitution,
// optional noise stripping. Boilerplate comes out before the pattern pass so
// substitutions cannot rewrite the markers the stripper matches on.

use crate::boilerplate::{self, StrippedRegion};
use crate::language::{self, LangResult};
use crate::noise;
use crate::normalize;
use crate::patterns::{Category, CONTEXT_PATTERNS, OCR_PATTERNS};
use crate::triage::{self, TriageAction, TriageResult, TriageThresholds};
use crate::unwrap::{self, UnwrapStats};
use std::collections::BTreeMap;

/// Apply the substitution table in authored order, counting per category.
///
/// On text already free of the tracked errors this returns the input
/// byte-identical with zero substitutions.
pub fn clean_text(text: &str) -> (String, u64, BTreeMap<Category, u64>) {
    let mut result = text.to_string();
    let mut total = 0u64;
    let mut by_category: BTreeMap<Category, u64> = BTreeMap::new();

    for pattern in OCR_PATTERNS.iter() {
        let hits = pattern.regex.find_iter(&result).count() as u64;
        if hits == 0 {
            continue;
        }
        result = pattern
            .regex
            .replace_all(&result, pattern.replacement)
            .into_owned();
        total += hits;
        *by_category.entry(pattern.category).or_insert(0) += hits;
    }

    (result, total, by_category)
}

/// Count the context-dependent forms without touching the text.
pub fn count_context_patterns(text: &str) -> BTreeMap<&'static str, u64> {
    let mut counts = BTreeMap::new();
    for ctx in CONTEXT_PATTERNS.iter() {
        let hits = ctx.regex.find_iter(text).count() as u64;
        if hits > 0 {
            counts.insert(ctx.name, hits);
        }
    }
    counts
}

/// Pipeline knobs shared by every worker.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub lang_threshold: f64,
    pub thresholds: TriageThresholds,
    /// Strip the loaded noise set from the final text.
    pub strip_noise: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            lang_threshold: language::DEFAULT_CONFIDENCE_THRESHOLD,
            thresholds: TriageThresholds::default(),
            strip_noise: false,
        }
    }
}

/// Everything the pipeline learned about a successfully cleaned document.
#[derive(Debug)]
pub struct CleanedDocument {
    pub text: String,
    pub triage: TriageResult,
    pub boilerplate_regions: Vec<StrippedRegion>,
    pub boilerplate_chars: usize,
    pub unwrap: UnwrapStats,
    pub total_substitutions: u64,
    pub substitutions_by_category: BTreeMap<Category, u64>,
    pub context_counts: BTreeMap<&'static str, u64>,
    pub noise_words_stripped: u64,
    pub bytes_read: u64,
    pub modified: bool,
}

/// Outcome of running the pipeline over one document.
#[derive(Debug)]
pub enum DocumentOutcome {
    /// Triage (structural or language) refused the document; nothing written.
    Rejected(TriageResult),
    Cleaned(Box<CleanedDocument>),
}

/// Run the full per-document pipeline over already-decoded text.
pub fn process_document(raw: &str, bytes_read: u64, config: &PipelineConfig) -> DocumentOutcome {
    let (normalized, normalize_changed) = normalize::normalize(raw);

    let lang: LangResult = language::detect_language(&normalized, config.lang_threshold);
    let triage = triage::evaluate(&normalized, &lang, &config.thresholds);
    if triage.action == TriageAction::Reject {
        return DocumentOutcome::Rejected(triage);
    }

    let stripped = boilerplate::strip_boilerplate(&normalized);
    let (unwrapped, unwrap_stats) = unwrap::unwrap_lines(&stripped.text);
    let (cleaned, total_substitutions, substitutions_by_category) = clean_text(&unwrapped);
    let context_counts = count_context_patterns(&cleaned);

    let (final_text, noise_words_stripped) = if config.strip_noise && noise::noise_words_loaded() {
        noise::strip_noise(&cleaned)
    } else {
        (cleaned, 0)
    };

    let modified = normalize_changed
        || !stripped.regions.is_empty()
        || unwrap_stats.lines_joined > 0
        || unwrap_stats.spaces_normalized > 0
        || total_substitutions > 0
        || noise_words_stripped > 0
        || final_text != raw;

    DocumentOutcome::Cleaned(Box::new(CleanedDocument {
        text: final_text,
        triage,
        boilerplate_regions: stripped.regions,
        boilerplate_chars: stripped.total_chars_stripped,
        unwrap: unwrap_stats,
        total_substitutions,
        substitutions_by_category,
        context_counts,
        noise_words_stripped,
        bytes_read,
        modified,
    }))
}
