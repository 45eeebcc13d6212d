// WHY: Print-width line breaks are cosmetic; paragraph breaks are semantic.
// This pass joins the former and keeps the latter, and repairs words the
// typesetter hyphenated across lines.

use crate::dictionary;
use serde::{Deserialize, Serialize};

/// Counts of what the unwrapper changed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UnwrapStats {
    pub lines_joined: u64,
    pub words_dehyphenated: u64,
    pub spaces_normalized: u64,
}

/// Punctuation that marks a line break as a real sentence/paragraph boundary.
fn ends_sentence(line: &str) -> bool {
    matches!(
        line.chars().last(),
        Some('.') | Some('!') | Some('?') | Some('"') | Some('\u{201D}')
    )
}

/// Trailing word fragment before a line-final hyphen.
fn hyphen_prefix(line: &str) -> &str {
    let body = &line[..line.len() - 1];
    let start = body
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '\'')
        .last()
        .map(|(i, _)| i)
        .unwrap_or(body.len());
    &body[start..]
}

/// Leading word fragment of the continuation line.
fn continuation_word(line: &str) -> &str {
    let trimmed = line.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_alphanumeric() && c != '\'')
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

/// Join cosmetic line breaks and dehyphenate words split across lines.
///
/// Per boundary, in order: a hyphen-broken word continuing in lowercase is
/// rejoined (the hyphen survives when the fragment before it is capitalized,
/// a proper-noun compound, or when a loaded dictionary knows the hyphenated
/// compound); a blank line or sentence-terminal punctuation keeps the break;
/// anything else becomes a single space.
pub fn unwrap_lines(text: &str) -> (String, UnwrapStats) {
    let mut stats = UnwrapStats::default();
    let mut out = String::with_capacity(text.len());
    let mut cur = String::new();
    let mut first = true;

    for raw in text.lines() {
        let line = raw.trim_end();
        if first {
            cur.push_str(line);
            first = false;
            continue;
        }

        let cur_blank = cur.trim().is_empty();
        let next_blank = line.trim().is_empty();
        let next_lower = line
            .trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_lowercase());

        if !cur_blank && cur.ends_with('-') && next_lower {
            let prefix = hyphen_prefix(&cur);
            let keep_hyphen = prefix.chars().next().is_some_and(|c| c.is_uppercase())
                || known_compound(prefix, continuation_word(line));
            if keep_hyphen {
                cur.push_str(line.trim_start());
            } else {
                cur.pop();
                cur.push_str(line.trim_start());
                stats.words_dehyphenated += 1;
            }
            stats.lines_joined += 1;
        } else if cur_blank || next_blank || ends_sentence(&cur) {
            out.push_str(&cur);
            out.push('\n');
            cur = line.to_string();
        } else {
            cur.push(' ');
            cur.push_str(line.trim_start());
            stats.spaces_normalized += 1;
        }
    }

    out.push_str(&cur);
    if text.ends_with('\n') && !out.ends_with('\n') {
        out.push('\n');
    }
    (out, stats)
}

fn known_compound(prefix: &str, suffix: &str) -> bool {
    if prefix.is_empty() || suffix.is_empty() || !dictionary::dictionaries_loaded() {
        return false;
    }
    dictionary::is_known_word(&format!("{prefix}-{suffix}"))
}
