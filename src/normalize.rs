// WHY: Encoding repair runs before every other stage so that language
// detection, triage, and the pattern tables all see the same clean view of
// the document. NFC first, so already-correct text passes through untouched.

use unicode_normalization::UnicodeNormalization;

/// UTF-8 byte pairs that were decoded as Latin-1 somewhere upstream and
/// re-encoded, plus the curly-quote and dash forms of the same accident.
const MOJIBAKE_PAIRS: &[(&str, &str)] = &[
    // Accented vowels and consonants
    ("\u{00C3}\u{00A1}", "\u{00E1}"), // Ã¡ -> á
    ("\u{00C3}\u{00A9}", "\u{00E9}"), // Ã© -> é
    ("\u{00C3}\u{00AD}", "\u{00ED}"), // Ã­ -> í
    ("\u{00C3}\u{00B3}", "\u{00F3}"), // Ã³ -> ó
    ("\u{00C3}\u{00BA}", "\u{00FA}"), // Ãº -> ú
    ("\u{00C3}\u{00B1}", "\u{00F1}"), // Ã± -> ñ
    ("\u{00C3}\u{00BC}", "\u{00FC}"), // Ã¼ -> ü
    ("\u{00C3}\u{00B6}", "\u{00F6}"), // Ã¶ -> ö
    ("\u{00C3}\u{00A4}", "\u{00E4}"), // Ã¤ -> ä
    ("\u{00C3}\u{00A8}", "\u{00E8}"), // Ã¨ -> è
    ("\u{00C3}\u{00A0}", "\u{00E0}"), // Ã  -> à
    ("\u{00C3}\u{00A2}", "\u{00E2}"), // Ã¢ -> â
    ("\u{00C3}\u{00AA}", "\u{00EA}"), // Ãª -> ê
    ("\u{00C3}\u{00AE}", "\u{00EE}"), // Ã® -> î
    ("\u{00C3}\u{00B4}", "\u{00F4}"), // Ã´ -> ô
    ("\u{00C3}\u{00BB}", "\u{00FB}"), // Ã» -> û
    ("\u{00C3}\u{00A7}", "\u{00E7}"), // Ã§ -> ç
    ("\u{00C3}\u{00BF}", "\u{00FF}"), // Ã¿ -> ÿ
    ("\u{00C3}\u{00AF}", "\u{00EF}"), // Ã¯ -> ï
    ("\u{00C3}\u{00B8}", "\u{00F8}"), // Ã¸ -> ø
    ("\u{00C3}\u{00A6}", "\u{00E6}"), // Ã¦ -> æ
    ("\u{00C3}\u{00B0}", "\u{00F0}"), // Ã° -> ð
    ("\u{00C3}\u{00BD}", "\u{00FD}"), // Ã½ -> ý
    // Curly quotes
    ("\u{00E2}\u{20AC}\u{0153}", "\u{201C}"), // â€œ -> "
    ("\u{00E2}\u{20AC}\u{009D}", "\u{201D}"), // â€? -> "
    ("\u{00E2}\u{20AC}\u{02DC}", "\u{2018}"), // â€˜ -> '
    ("\u{00E2}\u{20AC}\u{2122}", "\u{2019}"), // â€™ -> '
    // Dashes and ellipsis
    ("\u{00E2}\u{20AC}\u{201C}", "\u{2014}"), // em dash
    ("\u{00E2}\u{20AC}\u{201D}", "\u{2013}"), // en dash
    ("\u{00E2}\u{20AC}\u{00A6}", "\u{2026}"), // ellipsis
    // Non-breaking space seen through the Latin-1 lens
    ("\u{00C2}\u{00A0}", " "),
];

/// HTML entities left behind by web-era hosting, including the double-encoded
/// forms. Double-encoded entries come first so `&amp;amp;` resolves in one
/// pass.
const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&amp;amp;", "&"),
    ("&amp;lt;", "<"),
    ("&amp;gt;", ">"),
    ("&amp;quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

/// Normalize a document: NFC composition, mojibake repair, whitespace
/// folding, HTML entity decoding. Returns the (possibly unchanged) text and
/// whether anything was modified. Never fails.
pub fn normalize(text: &str) -> (String, bool) {
    let composed: String = text.nfc().collect();
    let repaired = fix_mojibake(&composed);
    let folded = fold_whitespace(&repaired);
    let decoded = decode_entities(&folded);
    let changed = decoded != text;
    (decoded, changed)
}

fn fix_mojibake(text: &str) -> String {
    let mut result = text.to_string();
    for (broken, fixed) in MOJIBAKE_PAIRS {
        if result.contains(broken) {
            result = result.replace(broken, fixed);
        }
    }
    result
}

/// Collapse Unicode space variants to a plain space; zero-width characters
/// and the BOM are dropped outright.
fn fold_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => {
                result.push(' ');
            }
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            _ => result.push(c),
        }
    }
    result
}

fn decode_entities(text: &str) -> String {
    let mut result = text.to_string();
    for (entity, plain) in HTML_ENTITIES {
        if result.contains(entity) {
            result = result.replace(entity, plain);
        }
    }
    result
}
