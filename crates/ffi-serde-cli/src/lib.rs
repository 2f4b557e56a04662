//! CLI library components for `ffi-serde`.

pub mod drivers;
pub mod files;
pub mod logging;
pub mod options;
pub mod types;

pub use drivers::{run_annotate, run_classify, run_generate};
pub use options::DriverOptions;
