//! Error types for scanning and discovery.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning or locating binding sources.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A `pub struct` / `pub union` header does not have the generator's shape.
    #[error("malformed declaration at line {line}: {reason}: `{text}`")]
    MalformedDeclaration {
        line: usize,
        text: String,
        reason: String,
    },

    /// An attribute whose brackets never close.
    #[error("unterminated attribute starting at line {line}")]
    UnterminatedAttribute { line: usize },

    /// A declaration body whose braces never close.
    #[error("unterminated declaration starting at line {line}")]
    UnterminatedDeclaration { line: usize },

    /// Directory not found.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to list a directory.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for scanning operations.
pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    /// Create a MalformedDeclaration error.
    pub fn malformed(line: usize, text: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            line,
            text: text.trim_end().to_string(),
            reason: reason.into(),
        }
    }
}
