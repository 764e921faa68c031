//! Icon directory enumeration
//!
//! Recursively lists every file under the configured icons directory,
//! yielding paths relative to that directory. Order is whatever the
//! filesystem produces; the manifest keys entries by derived name, not
//! position, so no sorting happens here.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use log::debug;
use walkdir::WalkDir;

/// List every file under `icons_dir`, depth-unbounded.
///
/// Returned paths are relative to `icons_dir`, never absolute.
/// Directories themselves are not returned. Fails with
/// [`Error::Enumeration`] if the directory is missing or any entry
/// cannot be read.
pub fn list_icons(icons_dir: &Path) -> Result<Vec<PathBuf>> {
    if !icons_dir.is_dir() {
        return Err(Error::Enumeration {
            dir: icons_dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(icons_dir) {
        let entry = entry.map_err(|e| Error::Enumeration {
            dir: icons_dir.to_path_buf(),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        // strip_prefix cannot fail: walkdir yields paths under its root
        let relative = entry
            .path()
            .strip_prefix(icons_dir)
            .map_err(|e| Error::Enumeration {
                dir: icons_dir.to_path_buf(),
                message: e.to_string(),
            })?;
        files.push(relative.to_path_buf());
    }

    debug!("enumerated {} files under {}", files.len(), icons_dir.display());
    Ok(files)
}
