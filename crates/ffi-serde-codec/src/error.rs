//! Error types for the byte-level codec.

use thiserror::Error;

/// Errors raised when turning a byte buffer back into a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Buffer length differs from the target type's size.
    #[error("buffer for {type_name} holds {actual} bytes, expected {expected}")]
    LengthMismatch {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create a LengthMismatch error for `T`.
    pub fn length_mismatch<T>(actual: usize) -> Self {
        Self::LengthMismatch {
            type_name: std::any::type_name::<T>(),
            expected: std::mem::size_of::<T>(),
            actual,
        }
    }
}
