//! Error types for codec generation.

use thiserror::Error;

use ffi_serde_model::Classification;
use ffi_serde_scan::ScanError;

/// Errors raised while generating a codec unit.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A generic declaration other than the bindgen wrappers cannot be
    /// templated with a concrete type name.
    #[error("declaration `{name}` at line {line} has generic parameters and no hand-written codec")]
    UnsupportedGenerics { name: String, line: usize },

    /// A declaration the manual path left out for another reason.
    #[error("declaration `{name}` at line {line} cannot be generated: {decision}")]
    NotGeneratable {
        name: String,
        line: usize,
        decision: Classification,
    },

    /// The input could not be scanned.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Result type alias for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
