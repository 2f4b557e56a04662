//! Classification, derive annotation, and codec generation for bindgen
//! declarations.
//!
//! Two alternative strategies give generated FFI types serde support:
//!
//! - [`annotate`] appends `Serialize, Deserialize` to eligible derive lists.
//! - [`generate`] writes a separate unit of byte-copy impls backed by
//!   `ffi_serde_codec`.
//!
//! A bindings file should use one or the other. Both are pure functions over
//! a [`SourceUnit`](ffi_serde_scan::SourceUnit); file I/O lives in the CLI.

pub mod annotate;
pub mod classify;
mod error;
pub mod generate;
pub mod template;

pub use annotate::{Annotated, AnnotationReport, annotate};
pub use classify::{classify_declarative, classify_manual, classify_unit};
pub use error::{GenerateError, Result};
pub use generate::{
    DEFAULT_HEADER, GenerateOptions, Generated, GenerationReport, generate, output_file_name,
};
pub use template::{PAIR_TEMPLATE, PREAMBLE, render_pair};
