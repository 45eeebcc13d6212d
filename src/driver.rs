// WHY: Batch orchestration. Work is distributed at file granularity across a
// semaphore-bounded task pool; workers share only read-only tables and the
// audit sinks. Outputs are written to a temp name and renamed into place so
// an interrupted run never leaves a half-written document.

use crate::audit::{BoilerplateRecord, JsonlSink, RejectedRecord, TriageRecord};
use crate::cleaner::{self, DocumentOutcome, PipelineConfig};
use crate::reader;
use crate::restart_log::{should_process_file, RestartLog};
use crate::vocab::WordInfo;
use anyhow::{Context, Result};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// Driver-level settings; pipeline knobs live in [`PipelineConfig`].
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub workers: usize,
    pub overwrite_all: bool,
    pub fail_fast: bool,
    pub quiet: bool,
    pub pipeline: PipelineConfig,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            workers: 24,
            overwrite_all: false,
            fail_fast: false,
            quiet: true,
            pipeline: PipelineConfig::default(),
        }
    }
}

/// Per-file processing statistics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileStats {
    /// Input path as given
    pub path: String,
    /// Processing status (success, rejected, skipped, failed)
    pub status: String,
    /// Bytes read from the input
    pub bytes: u64,
    /// Substitutions applied by the pattern engine
    pub substitutions: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in characters per second
    pub chars_per_sec: f64,
    /// Error message if processing failed
    pub error: Option<String>,
}

/// The aggregate written to `_cleanup_report.json`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct CleanupReport {
    pub files_processed: u64,
    pub files_modified: u64,
    pub files_failed: u64,
    pub files_skipped: u64,
    pub files_rejected: u64,
    pub total_substitutions: u64,
    pub total_bytes: u64,
    pub boilerplate_files: u64,
    pub boilerplate_chars: u64,
    pub noise_words_stripped: u64,
    pub per_category_totals: BTreeMap<String, u64>,
    pub context_pattern_totals: BTreeMap<String, u64>,
}

/// Everything a finished batch reports back to the caller.
#[derive(Debug)]
pub struct BatchOutcome {
    pub report: CleanupReport,
    pub file_stats: Vec<FileStats>,
    pub elapsed_ms: u64,
}

enum FileResult {
    Cleaned {
        stats: FileStats,
        modified: bool,
        by_category: BTreeMap<&'static str, u64>,
        context: BTreeMap<&'static str, u64>,
        boilerplate_chars: u64,
        had_boilerplate: bool,
        noise_stripped: u64,
    },
    Rejected(FileStats),
    Skipped(FileStats),
}

struct Sinks {
    rejected: JsonlSink,
    boilerplate: JsonlSink,
    triage: JsonlSink,
}

/// Clean `(input, output)` pairs across a bounded worker pool.
///
/// Rejected documents produce no output file; they are logged to
/// `rejected_files.jsonl`. Per-file errors are recorded and the batch
/// continues (unless `fail_fast`). The aggregate report is written to
/// `_cleanup_report.json` in `out_root`.
pub async fn run_clean_batch(
    pairs: Vec<(PathBuf, PathBuf)>,
    out_root: &Path,
    config: DriverConfig,
    restart_log: &mut RestartLog,
) -> Result<BatchOutcome> {
    let started = Instant::now();
    tokio::fs::create_dir_all(out_root)
        .await
        .with_context(|| format!("failed to create {}", out_root.display()))?;

    let sinks = Arc::new(Sinks {
        rejected: JsonlSink::create(&out_root.join("rejected_files.jsonl"))?,
        boilerplate: JsonlSink::create(&out_root.join("_boilerplate_stripped.jsonl"))?,
        triage: JsonlSink::create(&out_root.join("_triage_results.jsonl"))?,
    });

    // WHY: cooperative cancellation — on ctrl-c workers finish the file in
    // hand and remaining files are recorded as skipped
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = interrupted.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, finishing in-flight files");
                interrupted.store(true, Ordering::SeqCst);
            }
        });
    }

    let semaphore = Arc::new(Semaphore::new(config.workers.max(1)));
    let pipeline = Arc::new(config.pipeline.clone());
    let done = Arc::new(AtomicU64::new(0));
    let mut tasks = Vec::new();
    let mut skipped_before_start = Vec::new();

    for (input, output) in pairs {
        if !should_process_file(&input, restart_log, config.overwrite_all) {
            skipped_before_start.push(FileStats {
                path: input.to_string_lossy().to_string(),
                status: "skipped".to_string(),
                bytes: 0,
                substitutions: 0,
                processing_time_ms: 0,
                chars_per_sec: 0.0,
                error: None,
            });
            continue;
        }

        let semaphore = semaphore.clone();
        let sinks = sinks.clone();
        let pipeline = pipeline.clone();
        let interrupted = interrupted.clone();
        let done = done.clone();
        let quiet = config.quiet;

        tasks.push(tokio::spawn(async move {
            let _permit = semaphore.acquire().await.expect("semaphore closed");
            if interrupted.load(Ordering::SeqCst) {
                let stats = FileStats {
                    path: input.to_string_lossy().to_string(),
                    status: "skipped".to_string(),
                    bytes: 0,
                    substitutions: 0,
                    processing_time_ms: 0,
                    chars_per_sec: 0.0,
                    error: None,
                };
                return (input, output, Ok(FileResult::Skipped(stats)));
            }
            let result = process_one_file(&input, &output, &pipeline, &sinks).await;
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            if !quiet && n % 1000 == 0 {
                info!("processed {n} files");
            }
            (input, output, result)
        }));
    }

    let mut report = CleanupReport::default();
    let mut file_stats = skipped_before_start;
    report.files_skipped = file_stats.len() as u64;

    for joined in join_all(tasks).await {
        let (input, output, result) = match joined {
            Ok(t) => t,
            Err(e) => {
                report.files_failed += 1;
                warn!("worker panicked: {e}");
                continue;
            }
        };
        match result {
            Ok(FileResult::Cleaned {
                stats,
                modified,
                by_category,
                context,
                boilerplate_chars,
                had_boilerplate,
                noise_stripped,
            }) => {
                report.files_processed += 1;
                if modified {
                    report.files_modified += 1;
                }
                report.total_substitutions += stats.substitutions;
                report.total_bytes += stats.bytes;
                if had_boilerplate {
                    report.boilerplate_files += 1;
                }
                report.boilerplate_chars += boilerplate_chars;
                report.noise_words_stripped += noise_stripped;
                for (cat, n) in by_category {
                    *report.per_category_totals.entry(cat.to_string()).or_insert(0) += n;
                }
                for (name, n) in context {
                    *report
                        .context_pattern_totals
                        .entry(name.to_string())
                        .or_insert(0) += n;
                }
                restart_log.mark_completed(&input, &output);
                file_stats.push(stats);
            }
            Ok(FileResult::Rejected(stats)) => {
                report.files_processed += 1;
                report.files_rejected += 1;
                report.total_bytes += stats.bytes;
                file_stats.push(stats);
            }
            Ok(FileResult::Skipped(stats)) => {
                report.files_skipped += 1;
                file_stats.push(stats);
            }
            Err(e) => {
                report.files_failed += 1;
                let stats = FileStats {
                    path: input.to_string_lossy().to_string(),
                    status: "failed".to_string(),
                    bytes: 0,
                    substitutions: 0,
                    processing_time_ms: 0,
                    chars_per_sec: 0.0,
                    error: Some(e.to_string()),
                };
                file_stats.push(stats);
                if config.fail_fast {
                    flush_sinks(&sinks)?;
                    return Err(e);
                }
                warn!("failed to process {}: {e}", input.display());
            }
        }
    }

    flush_sinks(&sinks)?;

    let report_path = out_root.join("_cleanup_report.json");
    tokio::fs::write(&report_path, serde_json::to_string_pretty(&report)?)
        .await
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    Ok(BatchOutcome {
        report,
        file_stats,
        elapsed_ms: started.elapsed().as_millis() as u64,
    })
}

fn flush_sinks(sinks: &Sinks) -> Result<()> {
    sinks.rejected.flush()?;
    sinks.boilerplate.flush()?;
    sinks.triage.flush()
}

async fn process_one_file(
    input: &Path,
    output: &Path,
    pipeline: &PipelineConfig,
    sinks: &Sinks,
) -> Result<FileResult> {
    let start = Instant::now();
    let doc = reader::read_document_lossy(input).await?;
    let path_str = input.to_string_lossy().to_string();

    match cleaner::process_document(&doc.text, doc.bytes_read, pipeline) {
        DocumentOutcome::Rejected(triage) => {
            sinks.rejected.append(&RejectedRecord {
                path: path_str.clone(),
                reason: triage
                    .reject_reason()
                    .unwrap_or("rejected")
                    .to_string(),
                lang: triage.detected_lang.clone(),
                confidence: triage.lang_confidence,
                alpha_ratio: triage.metrics.alpha_ratio,
                list_pattern_ratio: triage.metrics.list_pattern_ratio,
            })?;
            sinks.triage.append(&TriageRecord {
                path: path_str.clone(),
                result: triage,
            })?;
            let elapsed = start.elapsed();
            Ok(FileResult::Rejected(FileStats {
                path: path_str,
                status: "rejected".to_string(),
                bytes: doc.bytes_read,
                substitutions: 0,
                processing_time_ms: elapsed.as_millis() as u64,
                chars_per_sec: 0.0,
                error: None,
            }))
        }
        DocumentOutcome::Cleaned(cleaned) => {
            sinks.triage.append(&TriageRecord {
                path: path_str.clone(),
                result: cleaned.triage.clone(),
            })?;
            if !cleaned.boilerplate_regions.is_empty() {
                sinks.boilerplate.append(&BoilerplateRecord {
                    path: path_str.clone(),
                    regions: cleaned.boilerplate_regions.clone(),
                })?;
            }

            write_atomic(output, cleaned.text.as_bytes()).await?;

            let elapsed = start.elapsed();
            let chars_per_sec = if elapsed.as_secs_f64() > 0.0 {
                doc.bytes_read as f64 / elapsed.as_secs_f64()
            } else {
                0.0
            };
            Ok(FileResult::Cleaned {
                stats: FileStats {
                    path: path_str,
                    status: "success".to_string(),
                    bytes: doc.bytes_read,
                    substitutions: cleaned.total_substitutions,
                    processing_time_ms: elapsed.as_millis() as u64,
                    chars_per_sec,
                    error: None,
                },
                modified: cleaned.modified,
                by_category: cleaned
                    .substitutions_by_category
                    .iter()
                    .map(|(c, n)| (c.as_str(), *n))
                    .collect(),
                context: cleaned.context_counts.clone(),
                boilerplate_chars: cleaned.boilerplate_chars as u64,
                had_boilerplate: !cleaned.boilerplate_regions.is_empty(),
                noise_stripped: cleaned.noise_words_stripped,
            })
        }
    }
}

/// Write `content` to `path` via a temp file in the same directory followed
/// by a rename, creating parent directories as needed.
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    tokio::fs::write(&tmp, content)
        .await
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    tokio::fs::rename(&tmp, path)
        .await
        .with_context(|| format!("failed to rename {} into place", tmp.display()))?;
    Ok(())
}

/// Extract vocabulary over many files with bounded concurrency, merging the
/// per-file maps. Returns (tokens_considered, merged candidates).
pub async fn run_vocab_batch(
    files: Vec<PathBuf>,
    context_chars: usize,
    workers: usize,
) -> Result<(u64, HashMap<String, WordInfo>)> {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = Vec::new();

    for path in files {
        let semaphore = semaphore.clone();
        tasks.push(tokio::spawn(async move {
            let _permit = semaphore.acquire().await.expect("semaphore closed");
            let mut local = HashMap::new();
            let total = crate::vocab::extract_from_file(&path, context_chars, &mut local);
            (path, total, local)
        }));
    }

    let mut merged: HashMap<String, WordInfo> = HashMap::new();
    let mut total_words = 0u64;
    for joined in join_all(tasks).await {
        let (path, total, local) = joined.context("vocab worker panicked")?;
        match total {
            Ok(n) => total_words += n,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                continue;
            }
        }
        for (key, info) in local {
            match merged.get_mut(&key) {
                Some(entry) => {
                    entry.frequency += info.frequency;
                    if info.is_capitalized {
                        entry.is_capitalized = true;
                        if !entry.word.chars().next().is_some_and(|c| c.is_uppercase()) {
                            entry.word = info.word;
                        }
                    }
                }
                None => {
                    merged.insert(key, info);
                }
            }
        }
    }
    Ok((total_words, merged))
}

/// Summary for a noise-stripping batch.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct StripReport {
    pub files_processed: u64,
    pub files_modified: u64,
    pub files_failed: u64,
    pub total_words_stripped: u64,
    pub total_bytes: u64,
}

/// A modified file, one line in `_strip_log.jsonl`.
#[derive(Serialize, Deserialize, Debug)]
pub struct StripRecord {
    pub path: String,
    pub words_stripped: u64,
}

/// Strip the loaded noise set over `(input, output)` pairs. In-place runs
/// pass identical paths; the write is atomic either way.
pub async fn run_strip_batch(
    pairs: Vec<(PathBuf, PathBuf)>,
    workers: usize,
    log: Option<Arc<JsonlSink>>,
) -> Result<StripReport> {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = Vec::new();

    for (input, output) in pairs {
        let semaphore = semaphore.clone();
        let log = log.clone();
        tasks.push(tokio::spawn(async move {
            let _permit = semaphore.acquire().await.expect("semaphore closed");
            let doc = reader::read_document_lossy(&input).await?;
            let (stripped, count) = crate::noise::strip_noise(&doc.text);
            if count > 0 || input != output {
                write_atomic(&output, stripped.as_bytes()).await?;
            }
            if count > 0 {
                if let Some(log) = log {
                    log.append(&StripRecord {
                        path: input.to_string_lossy().to_string(),
                        words_stripped: count,
                    })?;
                }
            }
            Ok::<(u64, u64), anyhow::Error>((doc.bytes_read, count))
        }));
    }

    let mut report = StripReport::default();
    for joined in join_all(tasks).await {
        match joined.context("strip worker panicked")? {
            Ok((bytes, count)) => {
                report.files_processed += 1;
                report.total_bytes += bytes;
                report.total_words_stripped += count;
                if count > 0 {
                    report.files_modified += 1;
                }
            }
            Err(e) => {
                report.files_failed += 1;
                warn!("strip failed: {e}");
            }
        }
    }
    if let Some(log) = log {
        log.flush()?;
    }
    Ok(report)
}
