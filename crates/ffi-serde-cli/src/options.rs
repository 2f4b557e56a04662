//! Resolved driver options.

use std::path::PathBuf;

/// Where binding files live and how outputs are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Directory scanned for binding files.
    pub dir: PathBuf,
    /// File name prefix of binding files.
    pub prefix: String,
    /// Extension appended to a file name for its backup.
    pub backup_suffix: String,
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src/x86"),
            prefix: "bindings_".to_string(),
            backup_suffix: "bak".to_string(),
            dry_run: false,
        }
    }
}
