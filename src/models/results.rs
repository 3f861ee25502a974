//! Per-file outcomes and the batch summary.
//!
//! Every processed file produces a `FileOutcome`; a run collects them into
//! a `BatchSummary` so callers (and tests) can assert on what happened
//! instead of scraping console output.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What happened to a single input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Transcript written successfully.
    Transcribed,
    /// File was not processed (e.g. unsupported extension).
    Skipped,
    /// Conversion, transcription, or the transcript write failed.
    Failed,
}

/// Outcome of processing one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// The input file this outcome refers to.
    pub input: PathBuf,
    /// Final status.
    pub status: FileStatus,
    /// Path of the written transcript (if transcribed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Why the file was skipped or failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FileOutcome {
    /// Create a successful outcome.
    pub fn transcribed(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            status: FileStatus::Transcribed,
            output: Some(output.into()),
            reason: None,
        }
    }

    /// Create a skipped outcome.
    pub fn skipped(input: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            status: FileStatus::Skipped,
            output: None,
            reason: Some(reason.into()),
        }
    }

    /// Create a failed outcome.
    pub fn failed(input: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            status: FileStatus::Failed,
            output: None,
            reason: Some(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == FileStatus::Failed
    }
}

/// Collected outcomes of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// When the run started (RFC 3339, UTC).
    pub started_at: String,
    /// Per-file outcomes in processing order.
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self {
            started_at: chrono::Utc::now().to_rfc3339(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn transcribed(&self) -> usize {
        self.count(FileStatus::Transcribed)
    }

    pub fn skipped(&self) -> usize {
        self.count(FileStatus::Skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(FileStatus::Failed)
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    fn count(&self, status: FileStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

impl Default for BatchSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} file(s): {} transcribed, {} skipped, {} failed",
            self.outcomes.len(),
            self.transcribed(),
            self.skipped(),
            self.failed()
        )?;
        for outcome in &self.outcomes {
            match outcome.status {
                FileStatus::Transcribed => {
                    let output = outcome
                        .output
                        .as_deref()
                        .unwrap_or_else(|| Path::new("?"));
                    writeln!(f, "  ok      {} -> {}", outcome.input.display(), output.display())?;
                }
                FileStatus::Skipped => {
                    let reason = outcome.reason.as_deref().unwrap_or("unknown");
                    writeln!(f, "  skipped {} ({})", outcome.input.display(), reason)?;
                }
                FileStatus::Failed => {
                    let reason = outcome.reason.as_deref().unwrap_or("unknown");
                    writeln!(f, "  FAILED  {}: {}", outcome.input.display(), reason)?;
                }
            }
        }
        Ok(())
    }
}
