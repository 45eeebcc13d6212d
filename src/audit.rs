// WHY: Audit logs are append-only JSONL shared by every worker. A mutex
// around a buffered writer keeps records whole (one JSON object per line)
// without an fsync per record; flushing happens every FLUSH_EVERY appends and
// when the sink is finished.

use crate::boilerplate::StrippedRegion;
use crate::triage::TriageResult;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const FLUSH_EVERY: usize = 64;

/// One JSONL audit file with interior-mutable buffered writes.
pub struct JsonlSink {
    path: PathBuf,
    inner: Mutex<SinkState>,
}

struct SinkState {
    writer: BufWriter<File>,
    pending: usize,
}

impl JsonlSink {
    /// Create (truncate) the sink at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            inner: Mutex::new(SinkState {
                writer: BufWriter::new(file),
                pending: 0,
            }),
        })
    }

    /// Append one record as a single newline-terminated JSON line.
    pub fn append<T: Serialize>(&self, record: &T) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut state = self.inner.lock().expect("audit sink poisoned");
        state
            .writer
            .write_all(line.as_bytes())
            .with_context(|| format!("failed to append to {}", self.path.display()))?;
        state.pending += 1;
        if state.pending >= FLUSH_EVERY {
            state.writer.flush()?;
            state.pending = 0;
        }
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        let mut state = self.inner.lock().expect("audit sink poisoned");
        state.writer.flush()?;
        state.pending = 0;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A rejected document, one line in `rejected_files.jsonl`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub path: String,
    pub reason: String,
    pub lang: String,
    pub confidence: f64,
    pub alpha_ratio: f64,
    pub list_pattern_ratio: f64,
}

/// Regions removed from one document, one line in
/// `_boilerplate_stripped.jsonl`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoilerplateRecord {
    pub path: String,
    pub regions: Vec<StrippedRegion>,
}

/// One triage judgment, one line in `_triage_results.jsonl`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TriageRecord {
    pub path: String,
    #[serde(flatten)]
    pub result: TriageResult,
}
