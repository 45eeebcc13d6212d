// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for building corpus directories on disk
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
    pub out_path: PathBuf,
}

impl TestFixture {
    /// Create a new fixture with an input corpus root and an output root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().join("corpus");
        let out_path = temp_dir.path().join("cleaned");
        fs::create_dir_all(&root_path).expect("Failed to create corpus dir");

        Self {
            temp_dir,
            root_path,
            out_path,
        }
    }

    /// Create a corpus text file with given content
    pub fn create_text_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Path of the mirrored output for an input created with
    /// [`create_text_file`]
    pub fn output_for<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.out_path.join(relative_path)
    }

    /// Read a mirrored output file
    pub fn read_output<P: AsRef<Path>>(&self, relative_path: P) -> Result<String, std::io::Error> {
        fs::read_to_string(self.output_for(relative_path))
    }

    /// Read an audit log from the output root
    pub fn read_audit(&self, name: &str) -> Result<String, std::io::Error> {
        fs::read_to_string(self.out_path.join(name))
    }

    /// Parse every line of a JSONL audit log
    pub fn audit_records(&self, name: &str) -> Vec<serde_json::Value> {
        let content = self.read_audit(name).unwrap_or_default();
        content
            .lines()
            .map(|l| serde_json::from_str(l).expect("invalid JSON line"))
            .collect()
    }
}

/// A paragraph of plausible period prose, long enough to pass triage when
/// repeated a few times.
pub const CLEAN_PARAGRAPH: &str = "The expedition left the harbour at first light, \
and the crew watched the coast recede with a mixture of relief and regret. Provisions \
had been loaded the evening before, and the master reckoned they would raise the \
northern islands within a fortnight if the weather held.\n";

/// The same prose with planted OCR damage from several categories.
pub const DAMAGED_PARAGRAPH: &str = "Tlie expedition left tbe harbour at firſt light, \
and tlie crew watched the coast recede witli a mixture of relief and regret. Provisions \
bave been loaded the evening before, and the master reckoned tliey wouid raise the \
northern islands witliin a fortnight if the weather held.\n";

/// Enough French prose to make the detector confident.
pub fn french_document() -> String {
    "Longtemps, je me suis couché de bonne heure. Parfois, à peine ma bougie éteinte, \
mes yeux se fermaient si vite que je n'avais pas le temps de me dire: Je m'endors. \
Et, une demi-heure après, la pensée qu'il était temps de chercher le sommeil \
m'éveillait; je voulais poser le volume que je croyais avoir encore dans les mains \
et souffler ma lumière. La gare était immense et les quais déserts à cette heure \
de la nuit; un employé poussait lentement un chariot le long des voitures, et le \
bruit des roues se perdait sous la grande verrière obscure.\n"
        .repeat(4)
}
