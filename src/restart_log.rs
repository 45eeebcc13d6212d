use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Tracks which input files already have finished outputs, so an interrupted
/// batch resumes where it stopped instead of re-cleaning the whole corpus.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RestartLog {
    /// Completed input paths mapped to the outputs written for them.
    completed: HashMap<String, String>,
    /// Timestamp of last update
    last_updated: u64,
}

impl RestartLog {
    /// Load the restart log from the output root; an absent or unreadable log
    /// is an empty one.
    pub async fn load(out_root: &Path) -> Self {
        let log_path = Self::log_path(out_root);
        match fs::read_to_string(&log_path).await {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist the log into the output root.
    pub async fn save(&self, out_root: &Path) -> Result<()> {
        let log_path = Self::log_path(out_root);
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&log_path, content).await?;
        Ok(())
    }

    pub fn is_completed(&self, input: &Path) -> bool {
        self.completed.contains_key(&input.to_string_lossy().to_string())
    }

    pub fn mark_completed(&mut self, input: &Path, output: &Path) {
        self.completed.insert(
            input.to_string_lossy().to_string(),
            output.to_string_lossy().to_string(),
        );
        self.touch();
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Forget everything, forcing a full reprocess.
    pub fn clear(&mut self) {
        self.completed.clear();
        self.touch();
    }

    /// Drop entries whose recorded output no longer exists. Returns the
    /// pruned inputs.
    pub fn verify_completed(&mut self) -> Vec<PathBuf> {
        let stale: Vec<String> = self
            .completed
            .iter()
            .filter(|(_, output)| !Path::new(output.as_str()).exists())
            .map(|(input, _)| input.clone())
            .collect();
        for input in &stale {
            self.completed.remove(input);
        }
        stale.into_iter().map(PathBuf::from).collect()
    }

    fn touch(&mut self) {
        self.last_updated = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
    }

    fn log_path(out_root: &Path) -> PathBuf {
        out_root.join(".foxing_restart.json")
    }
}

/// Whether `input` still needs processing under the current flags.
pub fn should_process_file(input: &Path, log: &RestartLog, overwrite_all: bool) -> bool {
    if overwrite_all {
        return true;
    }
    !log.is_completed(input)
}
