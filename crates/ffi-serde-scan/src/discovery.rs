//! Discovery of generated binding files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ScanError};

/// Lists the binding sources in `dir` whose file names start with `prefix`.
///
/// Only regular `.rs` files match, so backups (`*.rs.bak`) and temp files
/// are never picked up. Returns files sorted by filename.
pub fn list_binding_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ScanError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| ScanError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| ScanError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_rust = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == "rs");
        let has_prefix = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(prefix));

        if is_rust && has_prefix {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(dir = %dir.display(), prefix, count = files.len(), "discovered binding files");
    Ok(files)
}
