// Batch driver behavior: mirrored outputs, audit logs, worker-count
// independence, restart skipping, and the aggregate report.

use foxing::driver::{run_clean_batch, DriverConfig};
use foxing::restart_log::RestartLog;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{french_document, CLEAN_PARAGRAPH, DAMAGED_PARAGRAPH, TestFixture};

fn standard_corpus(fixture: &TestFixture) -> Vec<(PathBuf, PathBuf)> {
    fixture.create_text_file("good/clean.txt", &CLEAN_PARAGRAPH.repeat(4));
    fixture.create_text_file("good/damaged.txt", &DAMAGED_PARAGRAPH.repeat(4));
    fixture.create_text_file("bad/catalog.txt", &"Smith, John, 1843, 12\n".repeat(200));
    fixture.create_text_file("bad/french.txt", &french_document());
    fixture.create_text_file("bad/short.txt", "Much too short.");

    ["good/clean.txt", "good/damaged.txt", "bad/catalog.txt", "bad/french.txt", "bad/short.txt"]
        .iter()
        .map(|rel| (fixture.root_path.join(rel), fixture.out_path.join(rel)))
        .collect()
}

fn config_with_workers(workers: usize) -> DriverConfig {
    DriverConfig {
        workers,
        ..DriverConfig::default()
    }
}

#[tokio::test]
async fn batch_writes_outputs_and_audit_logs() {
    let fixture = TestFixture::new();
    let pairs = standard_corpus(&fixture);

    let mut restart_log = RestartLog::default();
    let outcome = run_clean_batch(pairs, &fixture.out_path, config_with_workers(4), &mut restart_log)
        .await
        .unwrap();

    // Two survivors, three rejections, nothing failed.
    assert_eq!(outcome.report.files_processed, 5);
    assert_eq!(outcome.report.files_rejected, 3);
    assert_eq!(outcome.report.files_failed, 0);
    assert!(fixture.output_for("good/clean.txt").exists());
    assert!(fixture.output_for("good/damaged.txt").exists());
    assert!(!fixture.output_for("bad/catalog.txt").exists());
    assert!(!fixture.output_for("bad/french.txt").exists());
    assert!(!fixture.output_for("bad/short.txt").exists());

    // No stray temp files survive the rename discipline.
    assert!(!fixture.output_for("good/clean.txt.tmp").exists());

    let rejected = fixture.audit_records("rejected_files.jsonl");
    assert_eq!(rejected.len(), 3);
    let reasons: BTreeMap<String, String> = rejected
        .iter()
        .map(|r| {
            let path = r["path"].as_str().unwrap();
            let name = path.rsplit('/').next().unwrap().to_string();
            (name, r["reason"].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(reasons["catalog.txt"], "catalog_index");
    assert_eq!(reasons["french.txt"], "non_english");
    assert_eq!(reasons["short.txt"], "too_short");

    let french = rejected
        .iter()
        .find(|r| r["path"].as_str().unwrap().ends_with("french.txt"))
        .unwrap();
    assert_eq!(french["lang"], "fra");
    assert!(french["confidence"].as_f64().unwrap() > 0.5);

    // Every document gets a triage record, rejected or not.
    assert_eq!(fixture.audit_records("_triage_results.jsonl").len(), 5);

    // The aggregate report is on disk and internally consistent.
    let report: serde_json::Value =
        serde_json::from_str(&fixture.read_audit("_cleanup_report.json").unwrap()).unwrap();
    let per_category: u64 = report["per_category_totals"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(report["total_substitutions"].as_u64().unwrap(), per_category);
    assert!(report["total_substitutions"].as_u64().unwrap() >= 32);
}

#[tokio::test]
async fn worker_count_does_not_change_outputs() {
    let fixture_single = TestFixture::new();
    let fixture_many = TestFixture::new();

    let pairs_single = standard_corpus(&fixture_single);
    let pairs_many = standard_corpus(&fixture_many);

    let mut log_single = RestartLog::default();
    let mut log_many = RestartLog::default();
    run_clean_batch(pairs_single, &fixture_single.out_path, config_with_workers(1), &mut log_single)
        .await
        .unwrap();
    run_clean_batch(pairs_many, &fixture_many.out_path, config_with_workers(8), &mut log_many)
        .await
        .unwrap();

    for rel in ["good/clean.txt", "good/damaged.txt"] {
        let a = fixture_single.read_output(rel).unwrap();
        let b = fixture_many.read_output(rel).unwrap();
        assert_eq!(a, b, "output mismatch for {rel}");
    }
    for rel in ["bad/catalog.txt", "bad/french.txt", "bad/short.txt"] {
        assert!(!fixture_single.output_for(rel).exists());
        assert!(!fixture_many.output_for(rel).exists());
    }
}

#[tokio::test]
async fn boilerplate_regions_are_audited() {
    let fixture = TestFixture::new();
    let input = format!(
        "Digitized by Google\nThis book is provided for personal use.\n\
         https://books.google.com/books?id=q\n{}",
        CLEAN_PARAGRAPH.repeat(4)
    );
    fixture.create_text_file("book.txt", &input);
    let pairs = vec![(
        fixture.root_path.join("book.txt"),
        fixture.out_path.join("book.txt"),
    )];

    let mut restart_log = RestartLog::default();
    let outcome = run_clean_batch(pairs, &fixture.out_path, config_with_workers(2), &mut restart_log)
        .await
        .unwrap();

    assert_eq!(outcome.report.boilerplate_files, 1);
    assert!(outcome.report.boilerplate_chars > 0);

    let records = fixture.audit_records("_boilerplate_stripped.jsonl");
    assert_eq!(records.len(), 1);
    let region = &records[0]["regions"][0];
    assert_eq!(region["category"], "google_books");
    assert_eq!(region["pattern_name"], "google_books_disclaimer");
    assert_eq!(region["start_line"], 0);
    assert_eq!(region["end_line"], 2);
    assert!(region["char_count"].as_u64().unwrap() > 0);

    let cleaned = fixture.read_output("book.txt").unwrap();
    assert!(!cleaned.contains("Digitized"));
    assert!(cleaned.contains("expedition"));
}

#[tokio::test]
async fn completed_files_are_skipped_on_rerun() {
    let fixture = TestFixture::new();
    fixture.create_text_file("doc.txt", &DAMAGED_PARAGRAPH.repeat(4));
    let pairs = vec![(
        fixture.root_path.join("doc.txt"),
        fixture.out_path.join("doc.txt"),
    )];

    let mut restart_log = RestartLog::default();
    let first = run_clean_batch(
        pairs.clone(),
        &fixture.out_path,
        config_with_workers(2),
        &mut restart_log,
    )
    .await
    .unwrap();
    assert_eq!(first.report.files_processed, 1);
    assert_eq!(restart_log.completed_count(), 1);

    let second = run_clean_batch(
        pairs.clone(),
        &fixture.out_path,
        config_with_workers(2),
        &mut restart_log,
    )
    .await
    .unwrap();
    assert_eq!(second.report.files_processed, 0);
    assert_eq!(second.report.files_skipped, 1);

    // overwrite_all forces a reprocess.
    let config = DriverConfig {
        workers: 2,
        overwrite_all: true,
        ..DriverConfig::default()
    };
    let third = run_clean_batch(pairs, &fixture.out_path, config, &mut restart_log)
        .await
        .unwrap();
    assert_eq!(third.report.files_processed, 1);
}

#[tokio::test]
async fn unreadable_input_fails_only_that_file() {
    let fixture = TestFixture::new();
    fixture.create_text_file("good.txt", &CLEAN_PARAGRAPH.repeat(4));
    let pairs = vec![
        (
            fixture.root_path.join("missing.txt"),
            fixture.out_path.join("missing.txt"),
        ),
        (
            fixture.root_path.join("good.txt"),
            fixture.out_path.join("good.txt"),
        ),
    ];

    let mut restart_log = RestartLog::default();
    let outcome = run_clean_batch(pairs, &fixture.out_path, config_with_workers(2), &mut restart_log)
        .await
        .unwrap();

    assert_eq!(outcome.report.files_failed, 1);
    assert_eq!(outcome.report.files_processed, 1);
    assert!(fixture.output_for("good.txt").exists());

    let failed = outcome
        .file_stats
        .iter()
        .find(|s| s.status == "failed")
        .unwrap();
    assert!(failed.path.ends_with("missing.txt"));
    assert!(failed.error.is_some());
}

#[tokio::test]
async fn rerun_of_cleaned_corpus_is_byte_stable() {
    let fixture = TestFixture::new();
    fixture.create_text_file("doc.txt", &DAMAGED_PARAGRAPH.repeat(4));
    let pairs = vec![(
        fixture.root_path.join("doc.txt"),
        fixture.out_path.join("doc.txt"),
    )];

    let mut log = RestartLog::default();
    run_clean_batch(pairs, &fixture.out_path, config_with_workers(2), &mut log)
        .await
        .unwrap();
    let first_output = fixture.read_output("doc.txt").unwrap();

    // Clean the cleaned output into a third directory.
    let second_out = fixture.temp_dir.path().join("twice");
    let pairs = vec![(
        fixture.out_path.join("doc.txt"),
        second_out.join("doc.txt"),
    )];
    let mut log = RestartLog::default();
    let outcome = run_clean_batch(pairs, &second_out, config_with_workers(2), &mut log)
        .await
        .unwrap();

    assert_eq!(outcome.report.total_substitutions, 0);
    let second_output = std::fs::read_to_string(second_out.join("doc.txt")).unwrap();
    assert_eq!(first_output, second_output);
}
