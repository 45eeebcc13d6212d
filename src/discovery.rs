use anyhow::Result;
use futures::stream::{Stream, StreamExt};
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Configuration for file discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Result of file discovery validation
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Discovers all files matching `**/*.txt` recursively under the given root
/// directory, skipping the engine's own `_`-prefixed artifacts (candidate
/// files, logs). Returns an async stream of validated file paths.
///
/// Decoding is lossy downstream, so discovery validates accessibility only;
/// no file is refused on encoding grounds.
pub fn discover_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> impl Stream<Item = Result<FileValidation>> {
    let root_path = root_dir.as_ref().to_path_buf();

    // WHY: futures::stream::unfold gives async iteration without an extra
    // dependency on async_stream
    futures::stream::unfold(
        DiscoveryState::new(root_path, config),
        |mut state| async move { state.next_file().await.map(|result| (result, state)) },
    )
}

/// Internal state for file discovery iteration
struct DiscoveryState {
    root_dir: PathBuf,
    config: DiscoveryConfig,
    glob_iter: Option<glob::Paths>,
}

impl DiscoveryState {
    fn new(root_dir: PathBuf, config: DiscoveryConfig) -> Self {
        Self {
            root_dir,
            config,
            glob_iter: None,
        }
    }

    async fn next_file(&mut self) -> Option<Result<FileValidation>> {
        // Initialize glob iterator on first call
        if self.glob_iter.is_none() {
            let pattern = format!("{}/**/*.txt", self.root_dir.display());
            debug!("Starting file discovery with pattern: {}", pattern);

            match glob(&pattern) {
                Ok(paths) => {
                    self.glob_iter = Some(paths);
                    info!("File discovery initialized for root: {}", self.root_dir.display());
                }
                Err(e) => {
                    return Some(Err(anyhow::anyhow!("Failed to create glob pattern: {}", e)));
                }
            }
        }

        loop {
            let next = self.glob_iter.as_mut()?.next();
            match next {
                Some(Ok(path)) => {
                    if is_artifact(&path) {
                        debug!("Skipping artifact: {}", path.display());
                        continue;
                    }
                    debug!("Found file: {}", path.display());
                    return Some(self.validate_file(path).await);
                }
                Some(Err(e)) => {
                    let error_msg = format!("Glob iteration error: {e}");
                    warn!("{}", error_msg);

                    if self.config.fail_fast {
                        return Some(Err(anyhow::anyhow!(error_msg)));
                    }
                    // Continue to next file on non-fatal glob errors
                    continue;
                }
                None => {
                    info!("File discovery completed");
                    return None;
                }
            }
        }
    }

    async fn validate_file(&self, path: PathBuf) -> Result<FileValidation> {
        match fs::metadata(&path).await {
            Ok(metadata) => {
                if !metadata.is_file() {
                    let error = format!("Path is not a file: {}", path.display());
                    warn!("{}", error);
                    return Ok(FileValidation {
                        path,
                        error: Some(error),
                    });
                }
            }
            Err(e) => {
                let error = format!("Cannot access file {}: {}", path.display(), e);
                warn!("{}", error);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error));
                }
                return Ok(FileValidation {
                    path,
                    error: Some(error),
                });
            }
        }

        Ok(FileValidation { path, error: None })
    }
}

/// The engine's own outputs live beside the corpus with a `_` prefix; they
/// must never be fed back in as documents.
fn is_artifact(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('_') || n.starts_with('.'))
        .unwrap_or(false)
}

/// Collect all discovered files into a Vec for easier processing
pub async fn collect_discovered_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> Result<Vec<FileValidation>> {
    let mut files = Vec::new();
    let mut stream = Box::pin(discover_files(root_dir, config));

    while let Some(result) = stream.next().await {
        files.push(result?);
    }

    let valid_count = files.iter().filter(|f| f.error.is_none()).count();
    let invalid_count = files.len() - valid_count;
    if invalid_count > 0 {
        warn!("Found {} files with validation issues", invalid_count);
    }
    info!("File discovery summary: {} valid, {} invalid", valid_count, invalid_count);

    Ok(files)
}

/// Convenience function returning only accessible document paths, sorted for
/// deterministic batch ordering.
pub async fn find_text_files<P: AsRef<Path>>(root_dir: P) -> Result<Vec<PathBuf>> {
    let validations = collect_discovered_files(root_dir, DiscoveryConfig::default()).await?;

    let mut paths: Vec<PathBuf> = validations
        .into_iter()
        .filter(|v| v.error.is_none())
        .map(|v| v.path)
        .collect();
    paths.sort();
    Ok(paths)
}
