//! Per-file and per-run results.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use ffi_serde_model::ClassifiedDeclaration;

/// What happened to one binding file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The output (or the rewritten input) was written.
    Written,
    /// Nothing to change; the disk was not touched.
    Unchanged,
    /// Changes were computed but not written.
    DryRun,
    /// Processing failed; nothing was written for this file.
    Failed(String),
}

impl FileStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => f.write_str("written"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::DryRun => f.write_str("dry run"),
            Self::Failed(_) => f.write_str("failed"),
        }
    }
}

/// Counts for one processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Binding file that was read.
    pub input: PathBuf,
    /// File that was (or would be) written, if any.
    pub output: Option<PathBuf>,
    pub declarations: usize,
    /// Annotated or generated declarations.
    pub applied: usize,
    /// Declarations left alone (excluded, already satisfied, hand-written).
    pub skipped: usize,
    /// Declarations that would get both a derive and a generated impl.
    pub conflicts: usize,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn failed(input: PathBuf, message: String) -> Self {
        Self {
            input,
            output: None,
            declarations: 0,
            applied: 0,
            skipped: 0,
            conflicts: 0,
            status: FileStatus::Failed(message),
        }
    }
}

/// Result of running `annotate` or `generate` over a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub command: &'static str,
    pub dir: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.status.is_failed())
    }

    /// Failure messages, prefixed with the file they belong to.
    pub fn errors(&self) -> Vec<String> {
        self.files
            .iter()
            .filter_map(|file| match &file.status {
                FileStatus::Failed(message) => {
                    Some(format!("{}: {message}", file.input.display()))
                }
                _ => None,
            })
            .collect()
    }
}

/// Classification of every declaration in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub declarations: Vec<ClassifiedDeclaration>,
}

/// Result of `classify`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifyReport {
    pub files: Vec<ClassifiedFile>,
    /// Files that could not be scanned, with the reason.
    pub errors: Vec<String>,
}

impl ClassifyReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
