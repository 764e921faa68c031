//! Repository metadata extraction
//!
//! Reads three facts out of the synchronized clone: the upstream version
//! (from its version file), the commit actually checked out, and the URL
//! of the remote it tracks. All three run read-only against the clone the
//! synchronizer left behind and end up verbatim in the manifest.

use std::path::Path;

use crate::error::{Error, Result};
use crate::process;
use log::debug;
use semver::Version;
use url::Url;

/// Version, commit, and remote of the synchronized clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMetadata {
    /// Upstream version as `major.minor.patch`.
    pub version: String,
    /// Full 40-character hash of the checked-out revision.
    pub commit: String,
    /// URL of the `origin` remote.
    pub repo: String,
}

/// Extract all repository metadata from the clone at `repo_dir`.
///
/// `version_file` is the upstream version file, relative to the clone.
pub fn extract(repo_dir: &Path, version_file: &Path) -> Result<RepoMetadata> {
    Ok(RepoMetadata {
        version: extract_version(repo_dir, version_file)?,
        commit: extract_commit(repo_dir)?,
        repo: extract_remote(repo_dir)?,
    })
}

/// Read the upstream version file and assemble `major.minor.patch`.
///
/// The upstream file is a Python source file of simple assignments; it is
/// parsed as text, not evaluated. If upstream restructures the file the
/// parse fails with a missing-key error rather than guessing. Swapping in
/// a stricter parser only means replacing [`parse_version_file`].
pub fn extract_version(repo_dir: &Path, version_file: &Path) -> Result<String> {
    let path = repo_dir.join(version_file);
    let content = std::fs::read_to_string(&path).map_err(|e| Error::Metadata {
        field: "version".to_string(),
        dir: repo_dir.to_path_buf(),
        message: format!("{}: {}", path.display(), e),
    })?;

    let version = parse_version_file(&content).map_err(|message| Error::Metadata {
        field: "version".to_string(),
        dir: repo_dir.to_path_buf(),
        message,
    })?;

    // Guard against a structurally changed upstream file producing
    // something that only looks like a version
    Version::parse(&version).map_err(|e| Error::Metadata {
        field: "version".to_string(),
        dir: repo_dir.to_path_buf(),
        message: format!("assembled version {:?} is not valid semver: {}", version, e),
    })?;

    debug!("extracted version {}", version);
    Ok(version)
}

/// Parse `key = "value"` assignment lines into `major.minor.patch`.
///
/// Each non-blank line splits on the first `=`; keys are trimmed, values
/// are stripped of quote characters and surrounding whitespace. Lines
/// without an `=` are ignored. Only `major`, `minor`, and `patch` are
/// required; everything else in the file is parsed and discarded.
fn parse_version_file(content: &str) -> std::result::Result<String, String> {
    let mut major = None;
    let mut minor = None;
    let mut patch = None;

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'').trim();

        match key.trim() {
            "major" => major = Some(value.to_string()),
            "minor" => minor = Some(value.to_string()),
            "patch" => patch = Some(value.to_string()),
            _ => {}
        }
    }

    match (major, minor, patch) {
        (Some(major), Some(minor), Some(patch)) => Ok(format!("{}.{}.{}", major, minor, patch)),
        (major, minor, patch) => {
            let missing: Vec<&str> = [
                major.is_none().then_some("major"),
                minor.is_none().then_some("minor"),
                patch.is_none().then_some("patch"),
            ]
            .into_iter()
            .flatten()
            .collect();
            Err(format!("missing key(s): {}", missing.join(", ")))
        }
    }
}

/// Resolve the full hash of the revision currently checked out.
///
/// Always the literal 40-character hash, never a symbolic ref or an
/// abbreviation; the manifest must pin the exact repository state it was
/// generated from.
pub fn extract_commit(repo_dir: &Path) -> Result<String> {
    let output =
        process::run("git", &["rev-parse", "HEAD"], repo_dir).map_err(|e| Error::Metadata {
            field: "commit".to_string(),
            dir: repo_dir.to_path_buf(),
            message: e.to_string(),
        })?;

    let commit = output.trim().to_string();
    if commit.len() != 40 || !commit.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Metadata {
            field: "commit".to_string(),
            dir: repo_dir.to_path_buf(),
            message: format!("rev-parse returned {:?}, expected a full 40-hex hash", commit),
        });
    }

    Ok(commit)
}

/// Resolve the URL of the `origin` remote.
pub fn extract_remote(repo_dir: &Path) -> Result<String> {
    let output = process::run("git", &["remote", "get-url", "origin"], repo_dir).map_err(|e| {
        Error::Metadata {
            field: "remote".to_string(),
            dir: repo_dir.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    let remote = output.trim().to_string();

    // Local file paths are valid origins for a clone-of-a-clone; anything
    // else must parse as a URL
    if !Path::new(&remote).is_absolute() {
        Url::parse(&remote).map_err(|e| Error::Metadata {
            field: "remote".to_string(),
            dir: repo_dir.to_path_buf(),
            message: format!("origin url {:?} is not a valid URL: {}", remote, e),
        })?;
    }

    Ok(remote)
}
