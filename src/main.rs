use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::info;

use foxing::audit::JsonlSink;
use foxing::cleaner::PipelineConfig;
use foxing::driver::{self, DriverConfig, FileStats};
use foxing::restart_log::RestartLog;
use foxing::triage::TriageThresholds;
use foxing::{dictionary, discovery, language, noise, reader, triage, vocab};

#[derive(Parser, Debug)]
#[command(name = "foxing")]
#[command(about = "OCR cleanup and triage for digitized pre-1914 texts")]
#[command(
    long_about = "Foxing prepares OCR'd historical text for language-model training.\n\n\
It recursively scans a corpus of .txt files and runs each document through a\n\
deterministic pipeline: Unicode normalization, language detection, structural\n\
triage, boilerplate stripping, line unwrapping, and ~150 ordered OCR pattern\n\
corrections with per-category accounting.\n\nEXAMPLES:\n  \
foxing clean ./corpus_raw -o ./corpus_clean          # full cleanup pipeline\n  \
foxing triage ./corpus_raw --stats                   # judge without modifying\n  \
foxing vocab ./corpus_clean -o _vocab_candidates.txt # second-pass vocabulary\n  \
foxing strip ./corpus_clean --in-place --vocab _vocab_candidates.txt"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean a corpus directory into a mirror output directory
    Clean(CleanArgs),
    /// Judge documents structurally without modifying them
    Triage(TriageArgs),
    /// Extract vocabulary candidates from a cleaned corpus
    Vocab(VocabArgs),
    /// Strip reviewed noise words from a cleaned corpus
    Strip(StripArgs),
}

#[derive(Args, Debug)]
struct CleanArgs {
    /// Root directory to scan recursively for .txt files
    #[arg(value_name = "DIR")]
    input_dir: PathBuf,

    /// Output directory; inputs are mirrored under it
    #[arg(short, long, value_name = "DIR")]
    output_dir: PathBuf,

    /// Worker count for the file pool
    #[arg(long, default_value_t = 24)]
    workers: usize,

    /// Reprocess files already recorded as complete
    #[arg(long)]
    overwrite_all: bool,

    /// Clear the restart log before processing
    #[arg(long)]
    clear_restart_log: bool,

    /// Stop processing immediately on the first per-file error
    #[arg(long)]
    fail_fast: bool,

    /// Suppress all non-error output
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Write run statistics to this JSON file
    #[arg(long, value_name = "FILE")]
    stats_out: Option<PathBuf>,

    /// Hunspell dictionary directory (en/de/fr/la)
    #[arg(long, value_name = "DIR")]
    dict_dir: Option<PathBuf>,

    /// Vocabulary-candidates file; enables noise stripping in the pipeline
    #[arg(long, value_name = "FILE")]
    noise_vocab: Option<PathBuf>,

    /// Noise categories to strip (comma-separated codes)
    #[arg(long, default_value = "G,R")]
    noise_categories: String,

    /// Confidence required before a non-English verdict rejects a document
    #[arg(long, default_value_t = language::DEFAULT_CONFIDENCE_THRESHOLD)]
    lang_threshold: f64,

    /// Override: reject below this alphabetic ratio
    #[arg(long)]
    min_alpha_ratio: Option<f64>,

    /// Override: reject below this character count
    #[arg(long)]
    min_char_count: Option<usize>,

    /// Override: reject above this catalogue-line ratio
    #[arg(long)]
    max_list_ratio: Option<f64>,

    /// Override: flag for review above this line-length variation
    #[arg(long)]
    max_line_cv: Option<f64>,

    /// Override: flag for review above this fragment-line ratio
    #[arg(long)]
    max_fragment_ratio: Option<f64>,
}

#[derive(Args, Debug)]
struct TriageArgs {
    /// Directory to judge
    #[arg(value_name = "DIR")]
    input_dir: PathBuf,

    /// Output JSONL path (default: _triage_results.jsonl in the input dir)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = 24)]
    workers: usize,

    /// Skip language detection
    #[arg(long)]
    no_language: bool,

    #[arg(long, default_value_t = language::DEFAULT_CONFIDENCE_THRESHOLD)]
    lang_threshold: f64,

    /// Print a summary table when done
    #[arg(long)]
    stats: bool,
}

#[derive(Args, Debug)]
struct VocabArgs {
    /// Cleaned corpus directory
    #[arg(value_name = "DIR")]
    input_dir: PathBuf,

    /// Candidates file to write (default: _vocab_candidates.txt in the input dir)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Drop candidates seen fewer times than this
    #[arg(long, default_value_t = 2)]
    min_freq: u64,

    /// Characters of context kept around the first sighting
    #[arg(long, default_value_t = 40)]
    context_chars: usize,

    #[arg(long, default_value_t = 24)]
    workers: usize,

    /// Hunspell dictionary directory; known words are cleared from suspicion
    #[arg(long, value_name = "DIR")]
    dict_dir: Option<PathBuf>,

    /// Whitelist file of words to skip entirely
    #[arg(long, value_name = "FILE")]
    whitelist: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StripArgs {
    /// Cleaned corpus directory
    #[arg(value_name = "DIR")]
    input_dir: PathBuf,

    /// Output directory (omit with --in-place)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Modify files in place
    #[arg(long)]
    in_place: bool,

    /// Vocabulary-candidates file naming the noise words
    #[arg(long, value_name = "FILE")]
    vocab: PathBuf,

    /// Categories to strip (comma-separated codes)
    #[arg(long, default_value = "G,R")]
    categories: String,

    #[arg(long, default_value_t = 24)]
    workers: usize,

    /// Report what would be stripped without writing anything
    #[arg(long)]
    check: bool,

    /// Disable the _strip_log.jsonl record of modified files
    #[arg(long)]
    no_log: bool,
}

/// Aggregate run statistics written by `--stats-out`
#[derive(Serialize, Deserialize, Debug)]
struct RunStats {
    run_start: String,
    total_processing_time_ms: u64,
    total_bytes_processed: u64,
    total_substitutions: u64,
    overall_bytes_per_sec: f64,
    files_processed: u64,
    files_rejected: u64,
    files_skipped: u64,
    files_failed: u64,
    file_stats: Vec<FileStats>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging keeps batch runs greppable in production
    tracing_subscriber::fmt().with_target(false).json().init();

    let cli = Cli::parse();
    match cli.command {
        Command::Clean(args) => run_clean(args).await,
        Command::Triage(args) => run_triage(args).await,
        Command::Vocab(args) => run_vocab(args).await,
        Command::Strip(args) => run_strip(args).await,
    }
}

fn require_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("not a directory: {}", path.display());
    }
    Ok(())
}

fn parse_categories(spec: &str) -> Vec<char> {
    spec.split(',')
        .filter_map(|c| c.trim().chars().next())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn mirror_pairs(files: &[PathBuf], input_dir: &Path, output_dir: &Path) -> Vec<(PathBuf, PathBuf)> {
    files
        .iter()
        .map(|input| {
            let relative = input.strip_prefix(input_dir).unwrap_or(input);
            (input.clone(), output_dir.join(relative))
        })
        .collect()
}

async fn run_clean(args: CleanArgs) -> Result<()> {
    require_dir(&args.input_dir)?;
    info!("starting clean batch in {}", args.input_dir.display());

    if let Some(ref dict_dir) = args.dict_dir {
        match dictionary::init_dictionaries(dict_dir) {
            Ok(true) => info!("dictionaries loaded from {}", dict_dir.display()),
            Ok(false) => info!("no dictionaries found in {}", dict_dir.display()),
            Err(e) => bail!("dictionary init failed: {e}"),
        }
    }

    let strip_noise = if let Some(ref vocab_path) = args.noise_vocab {
        let categories = parse_categories(&args.noise_categories);
        let count = noise::init_noise_words(vocab_path, &categories)?;
        if !args.quiet {
            println!("Loaded {count} noise words from {}", vocab_path.display());
        }
        count > 0
    } else {
        false
    };

    let mut thresholds = TriageThresholds::default();
    if let Some(v) = args.min_alpha_ratio {
        thresholds.min_alpha_ratio = v;
    }
    if let Some(v) = args.min_char_count {
        thresholds.min_char_count = v;
    }
    if let Some(v) = args.max_list_ratio {
        thresholds.max_list_pattern_ratio = v;
    }
    if let Some(v) = args.max_line_cv {
        thresholds.max_line_length_cv = v;
    }
    if let Some(v) = args.max_fragment_ratio {
        thresholds.max_fragment_ratio = v;
    }

    let files = discovery::find_text_files(&args.input_dir).await?;
    if !args.quiet {
        println!("Found {} files under {}", files.len(), args.input_dir.display());
    }
    let pairs = mirror_pairs(&files, &args.input_dir, &args.output_dir);

    let mut restart_log = RestartLog::load(&args.output_dir).await;
    if args.clear_restart_log {
        let cleared = restart_log.completed_count();
        restart_log.clear();
        info!("cleared {cleared} entries from restart log");
    } else {
        let stale = restart_log.verify_completed();
        if !stale.is_empty() {
            info!("pruned {} stale restart entries", stale.len());
        }
    }

    let config = DriverConfig {
        workers: if args.workers == 0 { num_cpus::get() } else { args.workers },
        overwrite_all: args.overwrite_all,
        fail_fast: args.fail_fast,
        quiet: args.quiet,
        pipeline: PipelineConfig {
            lang_threshold: args.lang_threshold,
            thresholds,
            strip_noise,
        },
    };

    let outcome =
        driver::run_clean_batch(pairs, &args.output_dir, config, &mut restart_log).await?;

    if let Err(e) = restart_log.save(&args.output_dir).await {
        info!("warning: failed to save restart log: {e}");
    }

    let report = &outcome.report;
    if !args.quiet {
        println!("Clean batch complete:");
        println!("  Processed: {} files", report.files_processed);
        println!("  Modified:  {} files", report.files_modified);
        println!("  Rejected:  {} files", report.files_rejected);
        println!("  Skipped:   {} files", report.files_skipped);
        if report.files_failed > 0 {
            println!("  Failed:    {} files", report.files_failed);
        }
        println!("  Substitutions: {}", report.total_substitutions);
        println!("  Boilerplate: {} files, {} chars", report.boilerplate_files, report.boilerplate_chars);
        let secs = outcome.elapsed_ms as f64 / 1000.0;
        if secs > 0.0 {
            let mb_per_sec = report.total_bytes as f64 / secs / 1_000_000.0;
            println!("  Throughput: {mb_per_sec:.2} MB/s over {secs:.2}s");
        }
    }

    if let Some(stats_out) = args.stats_out {
        let elapsed = outcome.elapsed_ms;
        let stats = RunStats {
            run_start: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
                .to_string(),
            total_processing_time_ms: elapsed,
            total_bytes_processed: report.total_bytes,
            total_substitutions: report.total_substitutions,
            overall_bytes_per_sec: if elapsed > 0 {
                report.total_bytes as f64 / (elapsed as f64 / 1000.0)
            } else {
                0.0
            },
            files_processed: report.files_processed,
            files_rejected: report.files_rejected,
            files_skipped: report.files_skipped,
            files_failed: report.files_failed,
            file_stats: outcome.file_stats,
        };
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => {
                tokio::fs::write(&stats_out, json).await?;
                info!("stats written to {}", stats_out.display());
            }
            Err(e) => info!("warning: failed to serialize stats: {e}"),
        }
    }

    Ok(())
}

async fn run_triage(args: TriageArgs) -> Result<()> {
    require_dir(&args.input_dir)?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input_dir.join("_triage_results.jsonl"));

    let files = discovery::find_text_files(&args.input_dir).await?;
    println!("Triaging {} files...", files.len());

    let sink = Arc::new(JsonlSink::create(&output)?);
    let semaphore = Arc::new(tokio::sync::Semaphore::new(args.workers.max(1)));
    let mut tasks = Vec::new();

    for path in files {
        let sink = sink.clone();
        let semaphore = semaphore.clone();
        let no_language = args.no_language;
        let threshold = args.lang_threshold;
        tasks.push(tokio::spawn(async move {
            let _permit = semaphore.acquire().await.expect("semaphore closed");
            let doc = reader::read_document_lossy(&path).await?;
            let (normalized, _) = foxing::normalize::normalize(&doc.text);
            let lang = if no_language {
                language::LangResult {
                    is_english: true,
                    detected_lang: "unknown".to_string(),
                    confidence: 0.0,
                }
            } else {
                language::detect_language(&normalized, threshold)
            };
            let result = triage::evaluate(&normalized, &lang, &TriageThresholds::default());
            let action = result.action;
            sink.append(&foxing::audit::TriageRecord {
                path: path.to_string_lossy().to_string(),
                result,
            })?;
            Ok::<triage::TriageAction, anyhow::Error>(action)
        }));
    }

    let mut process = 0u64;
    let mut review = 0u64;
    let mut reject = 0u64;
    let mut failed = 0u64;
    for joined in futures::future::join_all(tasks).await {
        match joined {
            Ok(Ok(triage::TriageAction::Process)) => process += 1,
            Ok(Ok(triage::TriageAction::Review)) => review += 1,
            Ok(Ok(triage::TriageAction::Reject)) => reject += 1,
            _ => failed += 1,
        }
    }
    sink.flush()?;

    println!("Wrote judgments to {}", output.display());
    if args.stats {
        let total = process + review + reject;
        println!("  process: {process}");
        println!("  review:  {review}");
        println!("  reject:  {reject}");
        if failed > 0 {
            println!("  failed:  {failed}");
        }
        if total > 0 {
            println!("  pass rate: {:.1}%", process as f64 / total as f64 * 100.0);
        }
    }
    Ok(())
}

async fn run_vocab(args: VocabArgs) -> Result<()> {
    require_dir(&args.input_dir)?;

    if let Some(ref dict_dir) = args.dict_dir {
        match dictionary::init_dictionaries(dict_dir) {
            Ok(true) => info!("dictionaries loaded from {}", dict_dir.display()),
            Ok(false) => info!("no dictionaries found in {}", dict_dir.display()),
            Err(e) => bail!("dictionary init failed: {e}"),
        }
    }
    if let Some(ref whitelist_path) = args.whitelist {
        let words = vocab::load_whitelist_file(whitelist_path)?;
        let count = dictionary::init_whitelist(words)?;
        println!("Loaded {count} whitelist words");
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input_dir.join("_vocab_candidates.txt"));

    let files = discovery::find_text_files(&args.input_dir).await?;
    println!("Extracting vocabulary from {} files...", files.len());

    let (total_words, candidates) =
        driver::run_vocab_batch(files, args.context_chars, args.workers).await?;
    let written = vocab::write_candidates(&output, &candidates, args.min_freq)?;

    println!("Considered {total_words} tokens, {} unique", candidates.len());
    println!("Wrote {written} candidates to {}", output.display());
    Ok(())
}

async fn run_strip(args: StripArgs) -> Result<()> {
    require_dir(&args.input_dir)?;
    if args.in_place && args.output_dir.is_some() {
        bail!("cannot use both --in-place and --output-dir");
    }
    if !args.in_place && args.output_dir.is_none() && !args.check {
        bail!("must specify either --output-dir or --in-place");
    }

    let categories = parse_categories(&args.categories);
    let count = noise::init_noise_words(&args.vocab, &categories)?;
    println!("Loaded {count} noise words");
    if count == 0 {
        bail!("no noise words loaded; check the vocab file and categories");
    }

    let files = discovery::find_text_files(&args.input_dir).await?;

    if args.check {
        let mut would_strip = 0u64;
        for path in &files {
            let doc = reader::read_document_lossy(path).await?;
            let (_, n) = noise::strip_noise(&doc.text);
            would_strip += n;
        }
        println!("{} files: {} words would be stripped", files.len(), would_strip);
        return Ok(());
    }

    let out_root = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.input_dir.clone());
    let pairs = mirror_pairs(&files, &args.input_dir, &out_root);

    let log = if args.no_log {
        None
    } else {
        Some(Arc::new(JsonlSink::create(&out_root.join("_strip_log.jsonl"))?))
    };

    let report = driver::run_strip_batch(pairs, args.workers, log).await?;
    println!("Strip batch complete:");
    println!("  Processed: {} files", report.files_processed);
    println!("  Modified:  {} files", report.files_modified);
    println!("  Stripped:  {} words", report.total_words_stripped);
    if report.files_failed > 0 {
        println!("  Failed:    {} files", report.files_failed);
    }
    Ok(())
}
