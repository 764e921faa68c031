//! # Configuration Schema and Parsing
//!
//! This module defines the data structure that represents the
//! `.icon-manifest.yaml` configuration file, as well as the logic for
//! parsing it.
//!
//! The configuration names the upstream clone and the icon directory
//! inside it:
//!
//! ```yaml
//! repo_path: godot
//! commit: 92bee43adba8d2401ef40e2480e53087bcb1eaf1
//! icons_path: editor/icons
//! ```
//!
//! `repo_path` and `icons_path` are relative paths: `repo_path` relative
//! to the project root, `icons_path` relative to the clone. `commit` is
//! the pinned revision the clone is checked out to before anything is
//! read from it.
//!
//! The configuration is constructed once at the top level and passed by
//! parameter into every component; no component reads process-wide state.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_version_file() -> PathBuf {
    PathBuf::from("version.py")
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("manifest.json")
}

/// Configuration for a manifest-generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location of the local clone of the upstream repository, relative
    /// to the project root.
    pub repo_path: PathBuf,
    /// The pinned revision to check out before reading anything from the
    /// clone. Usually a full commit hash; any revision git can resolve
    /// after a pull is accepted.
    pub commit: String,
    /// The icon directory to enumerate, relative to the clone.
    pub icons_path: PathBuf,
    /// The upstream version file to parse, relative to the clone.
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,
    /// Where to write the manifest, relative to the project root.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
}

/// Parse a YAML string into a [`Config`].
pub fn parse(yaml_content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: Some("expected repo_path, commit, and icons_path keys".to_string()),
    })?;

    validate(&config)?;
    Ok(config)
}

/// Load and parse a configuration file from disk.
pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

fn validate(config: &Config) -> Result<()> {
    if config.repo_path.as_os_str().is_empty() {
        return Err(Error::ConfigParse {
            message: "repo_path must not be empty".to_string(),
            hint: Some("point repo_path at the local clone of the upstream repository".to_string()),
        });
    }

    if config.commit.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: "commit must not be empty".to_string(),
            hint: Some("pin the upstream revision, e.g. a full commit hash".to_string()),
        });
    }

    if config.icons_path.as_os_str().is_empty() {
        return Err(Error::ConfigParse {
            message: "icons_path must not be empty".to_string(),
            hint: Some("set icons_path to the icon directory inside the clone".to_string()),
        });
    }

    Ok(())
}
