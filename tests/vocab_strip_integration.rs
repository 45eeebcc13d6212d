// The second-pass flow: extract vocabulary candidates, review file format,
// then strip the condemned categories from the corpus.
//
// The whitelist and noise set are process-wide one-shot globals, so the whole
// flow lives in one test; the others stay off the globals.

use foxing::dictionary;
use foxing::driver::{run_strip_batch, run_vocab_batch};
use foxing::{noise, vocab};
use std::collections::HashMap;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{CLEAN_PARAGRAPH, TestFixture};

#[tokio::test]
async fn vocab_extraction_then_noise_stripping() {
    let fixture = TestFixture::new();

    // A corpus with planted noise: qqxv (garbage), Meee (repeated), and a
    // whitelisted oddity that must never surface.
    let body = format!(
        "{}The qqxv marks appear twice: qqxv again. Meee said the gull. \
         The zzyzzx place kept its name.\n",
        CLEAN_PARAGRAPH.repeat(2)
    );
    fixture.create_text_file("a.txt", &body);
    fixture.create_text_file("b.txt", &format!("{}Another qqxv sighting.\n", CLEAN_PARAGRAPH));

    let whitelisted = dictionary::init_whitelist(vec!["zzyzzx".to_string()]).unwrap();
    assert_eq!(whitelisted, 1);
    // Second init is refused, first set retained.
    assert!(dictionary::init_whitelist(vec!["other".to_string()]).is_err());

    let files = foxing::discovery::find_text_files(&fixture.root_path).await.unwrap();
    assert_eq!(files.len(), 2);
    let (total, candidates) = run_vocab_batch(files, 40, 4).await.unwrap();
    assert!(total > 0);

    // Whitelist respected: the token never appears among candidates.
    assert!(!candidates.contains_key("zzyzzx"));

    // Planted noise is flagged with the right codes, frequencies merged
    // across files.
    let qqxv = &candidates["qqxv"];
    assert!(qqxv.is_suspicious);
    assert!(qqxv.suspicious_reason.starts_with('G'));
    assert_eq!(qqxv.frequency, 3);

    let meee = &candidates["meee"];
    assert!(meee.is_suspicious);
    assert!(meee.suspicious_reason.starts_with('R'));
    assert!(meee.is_capitalized);

    // Ordinary prose words are present and unflagged.
    assert!(!candidates["expedition"].is_suspicious);

    // Write the review file and check its shape.
    let vocab_path = fixture.temp_dir.path().join("_vocab_candidates.txt");
    let written = vocab::write_candidates(&vocab_path, &candidates, 1).unwrap();
    assert!(written >= 2);
    let content = std::fs::read_to_string(&vocab_path).unwrap();
    let data_lines: Vec<&str> = content
        .lines()
        .filter(|l| !l.starts_with('#') && !l.trim().is_empty())
        .collect();
    for line in &data_lines {
        assert_eq!(line.split('|').count(), 5, "malformed line: {line}");
    }
    // Suspicious entries sort first.
    assert!(data_lines[0].split('|').nth(1).unwrap().contains('?'));

    // Load the G/R rows back as the noise set and strip the corpus in place.
    let loaded = noise::init_noise_words(&vocab_path, noise::DEFAULT_CATEGORIES).unwrap();
    assert_eq!(loaded, 2);
    assert!(noise::init_noise_words(&vocab_path, noise::DEFAULT_CATEGORIES).is_err());

    let files = foxing::discovery::find_text_files(&fixture.root_path).await.unwrap();
    let pairs: Vec<_> = files.iter().map(|f| (f.clone(), f.clone())).collect();
    let report = run_strip_batch(pairs, 4, None).await.unwrap();
    assert_eq!(report.files_processed, 2);
    assert_eq!(report.files_modified, 2);
    assert_eq!(report.total_words_stripped, 4);

    let a = std::fs::read_to_string(fixture.root_path.join("a.txt")).unwrap();
    assert!(!a.contains("qqxv"));
    assert!(!a.contains("Meee"));
    assert!(a.contains("zzyzzx"));
    assert!(a.contains("expedition"));
    assert!(!a.contains("  "), "spaces were not collapsed");
}

#[tokio::test]
async fn vocab_batch_merges_casing_across_files() {
    let fixture = TestFixture::new();
    fixture.create_text_file("one.txt", "the wessex downs stretched ahead");
    fixture.create_text_file("two.txt", "Wessex lay quiet; wessex slept");

    let files = foxing::discovery::find_text_files(&fixture.root_path).await.unwrap();
    let (_, candidates) = run_vocab_batch(files, 40, 2).await.unwrap();

    let entry = &candidates["wessex"];
    assert_eq!(entry.frequency, 3);
    assert!(entry.is_capitalized);
    assert_eq!(entry.word, "Wessex");
}

#[tokio::test]
async fn candidates_file_round_trips_through_noise_parser_fields() {
    // Build a candidates map by extraction and confirm the serialized rows
    // carry the single-letter category in field three, which the noise
    // loader keys on.
    let mut acc = HashMap::new();
    vocab::extract_from_text("the qqxv stood alone", 20, &mut acc);
    let fixture = TestFixture::new();
    let path = fixture.temp_dir.path().join("cands.txt");
    vocab::write_candidates(&path, &acc, 1).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let row = content
        .lines()
        .find(|l| l.contains("qqxv"))
        .expect("qqxv row missing");
    let fields: Vec<&str> = row.split('|').map(str::trim).collect();
    assert_eq!(fields[2], "G");
    assert_eq!(fields[3], "qqxv");
}
