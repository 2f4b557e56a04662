//! Atomic file writes and backups.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use thiserror::Error;
use tracing::debug;

/// File write error.
#[derive(Debug, Error)]
pub enum WriteError {
    /// File I/O error.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temp file could not be renamed over the target.
    #[error("failed to move {temp_path} into place at {target_path}: {source}")]
    AtomicRenameFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for file writes.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Appends `.{suffix}` to the file name of `path`.
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

/// Backup location for `path` (`bindings_v4_14_0.rs` -> `bindings_v4_14_0.rs.bak`).
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    sibling_with_suffix(path, suffix)
}

/// Writes `contents` to `path` through a uniquely named temp file in the
/// same directory and a rename, so readers never observe a partially written
/// file. The temp file is removed if any step fails.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut prefix = path.file_name().map(OsString::from).unwrap_or_default();
    prefix.push(".");

    let mut temp = Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| WriteError::Io {
            operation: "create temp file in",
            path: dir.to_path_buf(),
            source: e,
        })?;
    let temp_path = temp.path().to_path_buf();

    temp.write_all(contents.as_bytes()).map_err(|e| WriteError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    temp.as_file().sync_all().map_err(|e| WriteError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    persist(temp, path).map_err(|source| WriteError::AtomicRenameFailed {
        temp_path,
        target_path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Renames `temp` over `path`; on failure the temp file is dropped and deleted.
fn persist(temp: NamedTempFile, path: &Path) -> std::io::Result<()> {
    temp.persist(path).map(drop).map_err(|err| err.error)
}

/// Writes the original `contents` of `path` to its backup location.
pub fn write_backup(path: &Path, contents: &str, suffix: &str) -> Result<PathBuf> {
    let backup = backup_path(path, suffix);
    write_atomic(&backup, contents)?;
    Ok(backup)
}
