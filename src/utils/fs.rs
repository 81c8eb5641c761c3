//! Filesystem helpers for the export writers.
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! reader never observes a half-written file under the final name. A failed
//! export can still leave earlier files behind; re-running overwrites them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ExportError, Result};

/// Creates `dir` and all missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `contents` to `path` through a temporary file in the same directory.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let tmp = temp_sibling(path);
    let wrap = |source| ExportError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&tmp, contents).map_err(wrap)?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(wrap(source));
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
