pub mod audit;
pub mod boilerplate;
pub mod cleaner;
pub mod dictionary;
pub mod discovery;
pub mod driver;
pub mod language;
pub mod noise;
pub mod normalize;
pub mod patterns;
pub mod reader;
pub mod restart_log;
pub mod triage;
pub mod unwrap;
pub mod vocab;

// Re-export the types most callers need
pub use boilerplate::{strip_boilerplate, BoilerplateCategory, StripOutcome, StrippedRegion};
pub use cleaner::{clean_text, process_document, CleanedDocument, DocumentOutcome, PipelineConfig};
pub use driver::{run_clean_batch, BatchOutcome, CleanupReport, DriverConfig, FileStats};
pub use language::{detect_language, LangResult};
pub use patterns::{categorize, Category};
pub use triage::{TriageAction, TriageMetrics, TriageResult, TriageThresholds};
pub use unwrap::{unwrap_lines, UnwrapStats};
pub use vocab::{SuspicionCode, WordInfo};

// Re-export restart log for external use
pub use restart_log::{should_process_file, RestartLog};
