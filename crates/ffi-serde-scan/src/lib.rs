//! Scanning of bindgen-generated sources into structured declarations.
//!
//! # Example
//!
//! ```
//! use ffi_serde_scan::scan;
//!
//! let unit = scan("#[derive(Copy, Clone)]\npub struct kvm_xcr {\n    pub xcr: u32,\n}\n").unwrap();
//! assert_eq!(unit.declarations()[0].name, "kvm_xcr");
//! ```

pub mod discovery;
mod error;
pub mod scanner;

pub use discovery::list_binding_files;
pub use error::{Result, ScanError};
pub use scanner::{SourceUnit, scan};
