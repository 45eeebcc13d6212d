// WHY: Digitization boilerplate must come out before the OCR pattern pass,
// otherwise the substitutions rewrite the very markers this module matches.
// Removal is strictly line-oriented: a region is a contiguous run of whole
// lines, so stripping can never split a word.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Hosting services whose inserted text we recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoilerplateCategory {
    GoogleBooks,
    InternetArchive,
    Hathitrust,
    Jstor,
    Gutenberg,
    LibraryStamp,
    Generic,
}

impl BoilerplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoilerplateCategory::GoogleBooks => "google_books",
            BoilerplateCategory::InternetArchive => "internet_archive",
            BoilerplateCategory::Hathitrust => "hathitrust",
            BoilerplateCategory::Jstor => "jstor",
            BoilerplateCategory::Gutenberg => "gutenberg",
            BoilerplateCategory::LibraryStamp => "library_stamp",
            BoilerplateCategory::Generic => "generic",
        }
    }
}

/// One removed region. Line numbers are 0-based and `end_line` is the last
/// removed line, inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrippedRegion {
    pub category: BoilerplateCategory,
    pub pattern_name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub char_count: usize,
}

/// Result of stripping one document.
#[derive(Debug, Clone)]
pub struct StripOutcome {
    pub text: String,
    pub regions: Vec<StrippedRegion>,
    pub total_chars_stripped: usize,
}

enum PatternKind {
    /// Start marker through end marker, inclusive. If no end marker appears
    /// within `max_span` lines the pattern does not fire, unless `to_eof`
    /// turns the tail of the document into the region.
    Block {
        start: Regex,
        end: Regex,
        max_span: usize,
        to_eof: bool,
    },
    /// A single matched line plus a fixed number of neighbours each way.
    Footprint {
        line: Regex,
        before: usize,
        after: usize,
    },
}

struct BoilerplatePattern {
    category: BoilerplateCategory,
    name: &'static str,
    kind: PatternKind,
}

fn block(
    category: BoilerplateCategory,
    name: &'static str,
    start: &str,
    end: &str,
    max_span: usize,
) -> BoilerplatePattern {
    BoilerplatePattern {
        category,
        name,
        kind: PatternKind::Block {
            start: Regex::new(start).unwrap_or_else(|e| panic!("bad start for {name}: {e}")),
            end: Regex::new(end).unwrap_or_else(|e| panic!("bad end for {name}: {e}")),
            max_span,
            to_eof: false,
        },
    }
}

fn tail_block(
    category: BoilerplateCategory,
    name: &'static str,
    start: &str,
) -> BoilerplatePattern {
    BoilerplatePattern {
        category,
        name,
        kind: PatternKind::Block {
            start: Regex::new(start).unwrap_or_else(|e| panic!("bad start for {name}: {e}")),
            // [^\s\S] matches nothing; the region always runs to end of file.
            end: Regex::new(r"[^\s\S]").unwrap(),
            max_span: usize::MAX,
            to_eof: true,
        },
    }
}

fn footprint(
    category: BoilerplateCategory,
    name: &'static str,
    line: &str,
    before: usize,
    after: usize,
) -> BoilerplatePattern {
    BoilerplatePattern {
        category,
        name,
        kind: PatternKind::Footprint {
            line: Regex::new(line).unwrap_or_else(|e| panic!("bad pattern for {name}: {e}")),
            before,
            after,
        },
    }
}

/// The region pattern table, in priority order: when regions would overlap,
/// the earliest-defined pattern claims the lines and later ones skip them.
static REGION_PATTERNS: LazyLock<Vec<BoilerplatePattern>> = LazyLock::new(|| {
    use BoilerplateCategory::*;
    vec![
        // Project Gutenberg: header up to the START marker, the END marker to
        // the end of file, and the license block when it survives mid-file.
        block(
            Gutenberg,
            "gutenberg_header",
            r"(?i)^\s*(?:The\s+)?Project\s+Gutenberg(?:'s)?\s",
            r"(?i)\*{3}\s*START\s+OF\s+(?:THE|THIS)\s+PROJECT\s+GUTENBERG",
            120,
        ),
        tail_block(
            Gutenberg,
            "gutenberg_end",
            r"(?i)\*{3}\s*END\s+OF\s+(?:THE|THIS)\s+PROJECT\s+GUTENBERG",
        ),
        block(
            Gutenberg,
            "gutenberg_license",
            r"(?i)Project\s+Gutenberg(?:-tm)?\s+(?:License|Literary\s+Archive)",
            r"(?i)TRADEMARK|electronic\s+works|distribute\s+copies",
            60,
        ),
        footprint(
            Gutenberg,
            "gutenberg_start_marker",
            r"(?i)\*{3}\s*START\s+OF\s+(?:THE|THIS)\s+PROJECT\s+GUTENBERG",
            0,
            0,
        ),
        // Google Books: the front-matter disclaimer ends at the books URL.
        block(
            GoogleBooks,
            "google_books_disclaimer",
            r"(?i)^\s*(?:Digitized\s+by\s+Google|This\s+is\s+a\s+digital\s+copy\s+of\s+a\s+book)",
            r"(?i)books\s*\.\s*(?:google|qooqle)\s*\.\s*com|full\s+text\s+of\s+this\s+book\s+on\s+the\s+web",
            60,
        ),
        block(
            GoogleBooks,
            "google_books_mission",
            r"(?i)mission\s+is\s+to\s+organize\s+the\s+world'?s\s+information",
            r"(?i)Book\s+Search",
            40,
        ),
        // Internet Archive front matter with the details URL underneath.
        block(
            InternetArchive,
            "ia_digitized_header",
            r"(?i)Digitized\s+by\s+(?:the\s+)?Internet\s+Archive",
            r"(?i)https?://(?:www\.)?archive\.org/details/\S+",
            12,
        ),
        block(
            Hathitrust,
            "hathitrust_notice",
            r"(?i)(?:Generated|Digitized)\s+(?:by|for|at)\s+HathiTrust",
            r"(?i)www\.hathitrust\.org|public\s+domain|Google-digitized",
            10,
        ),
        block(
            Jstor,
            "jstor_early_journal",
            r"(?i)Early\s+Journal\s+Content\s+on\s+J?STOR|^\s*J?STOR\s+is\s+a",
            r"(?i)public\s+domain|freely\s+available|about\s+JSTOR",
            40,
        ),
        // Single-line leftovers once the blocks above have had their chance.
        footprint(
            GoogleBooks,
            "google_watermark_line",
            r"(?i)^\s*(?:Digitized\s+by\s+(?:Google|G[o0]{2}gle|[VLC]j?OOQ\S*)|.{0,8}(?:VjOOQIC|CjOOQlC|OOglC|byGoogle|GoOglc).{0,8})\s*$",
            0,
            0,
        ),
        footprint(
            GoogleBooks,
            "google_books_url",
            r"(?i)^\s*(?:https?\s*:\s*//\s*)?books\s*\.\s*(?:google|qooqle)\s*\.\s*com\S*\s*$",
            0,
            0,
        ),
        footprint(
            InternetArchive,
            "ia_digitized_line",
            r"(?i)^\s*Digitized\s+by\s+(?:the\s+)?Internet\s+Archive.*$",
            0,
            1,
        ),
        footprint(
            InternetArchive,
            "ia_generated_footer",
            r"(?i)^\s*Generated\s+(?:at|by|on)\s+.*archive\.org.*$",
            0,
            0,
        ),
        footprint(
            InternetArchive,
            "ia_details_url",
            r"(?i)^\s*https?://(?:www\.)?archive\.org/details/\S+\s*$",
            0,
            0,
        ),
        footprint(
            Hathitrust,
            "hathitrust_line",
            r"(?i)^\s*.{0,20}www\.hathitrust\.org.{0,40}$",
            0,
            0,
        ),
        footprint(
            LibraryStamp,
            "university_library_stamp",
            r"(?i)^\s*(?:THE\s+)?UNIVERSITY\s+OF\s+\w+\s*$",
            0,
            1,
        ),
        footprint(LibraryStamp, "library_date_due", r"(?i)^\s*DATE\s+DUE\s*$", 0, 3),
        footprint(
            LibraryStamp,
            "library_circulate_card",
            r"(?i)(?:CIRCULATE|IITILATE)\s+CAR[DK]",
            0,
            0,
        ),
        footprint(
            LibraryStamp,
            "library_barcode",
            r"^\s*\d\s+\d{4}\s+\d{3}\s+\d+\s+\d+\s*$",
            0,
            0,
        ),
        footprint(
            Generic,
            "generic_digitized",
            r"(?i)^\s*(?:This\s+book\s+was\s+)?[Dd]igitized\s+(?:by|from|at)\s+.*(?:Library|Archive|University).{0,20}$",
            0,
            0,
        ),
    ]
});

/// Remove every recognized boilerplate region from `text`.
///
/// Lines claimed by one pattern are invisible to the rest of the table, and
/// each region is reported with its category, pattern name, and line range.
pub fn strip_boilerplate(text: &str) -> StripOutcome {
    let lines: Vec<&str> = text.lines().collect();
    let n = lines.len();
    let mut removed = vec![false; n];
    let mut regions: Vec<StrippedRegion> = Vec::new();

    for pattern in REGION_PATTERNS.iter() {
        match &pattern.kind {
            PatternKind::Block {
                start,
                end,
                max_span,
                to_eof,
            } => {
                let mut i = 0;
                while i < n {
                    if removed[i] || !start.is_match(lines[i]) {
                        i += 1;
                        continue;
                    }
                    let limit = if *max_span == usize::MAX {
                        n
                    } else {
                        (i + max_span).min(n)
                    };
                    let mut region_end = None;
                    for (offset, line) in lines[i..limit].iter().enumerate() {
                        // The start line itself is not an end marker.
                        if offset > 0 && end.is_match(line) {
                            region_end = Some(i + offset);
                            break;
                        }
                    }
                    let region_end = match (region_end, to_eof) {
                        (Some(j), _) => j,
                        (None, true) => n - 1,
                        (None, false) => {
                            i += 1;
                            continue;
                        }
                    };
                    mark_region(&lines, &mut removed, &mut regions, pattern, i, region_end);
                    i = region_end + 1;
                }
            }
            PatternKind::Footprint {
                line,
                before,
                after,
            } => {
                for i in 0..n {
                    if removed[i] || !line.is_match(lines[i]) {
                        continue;
                    }
                    let start = i.saturating_sub(*before);
                    let end = (i + after).min(n - 1);
                    mark_region(&lines, &mut removed, &mut regions, pattern, start, end);
                }
            }
        }
    }

    if regions.is_empty() {
        return StripOutcome {
            text: text.to_string(),
            regions,
            total_chars_stripped: 0,
        };
    }

    regions.sort_by_key(|r| r.start_line);

    let trailing_newline = text.ends_with('\n');
    let mut kept: Vec<&str> = Vec::with_capacity(n);
    for (i, line) in lines.iter().enumerate() {
        if !removed[i] {
            kept.push(line);
        }
    }
    let mut out = kept.join("\n");
    if trailing_newline && !out.is_empty() {
        out.push('\n');
    }

    let total: usize = regions.iter().map(|r| r.char_count).sum();
    StripOutcome {
        text: out,
        regions,
        total_chars_stripped: total,
    }
}

fn mark_region(
    lines: &[&str],
    removed: &mut [bool],
    regions: &mut Vec<StrippedRegion>,
    pattern: &BoilerplatePattern,
    start: usize,
    end: usize,
) {
    // Trim the claim to lines nobody has taken yet, keeping it contiguous.
    let mut s = start;
    while s <= end && removed[s] {
        s += 1;
    }
    let mut e = end;
    while e > s && removed[e] {
        e -= 1;
    }
    if s > end || removed[s] {
        return;
    }
    // Count only lines this pattern newly claims, so region totals always
    // reconcile with the rebuilt text.
    let mut chars = 0usize;
    for idx in s..=e {
        if !removed[idx] {
            removed[idx] = true;
            chars += lines[idx].chars().count() + 1;
        }
    }
    regions.push(StrippedRegion {
        category: pattern.category,
        pattern_name: pattern.name.to_string(),
        start_line: s,
        end_line: e,
        char_count: chars,
    });
}
