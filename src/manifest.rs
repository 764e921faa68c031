//! # Manifest Data Model and Builder
//!
//! This module defines the manifest document the gallery consumes and the
//! logic that assembles it from repository metadata and enumerated icon
//! files.
//!
//! ## Schema
//!
//! The manifest is a single JSON document:
//!
//! ```json
//! {
//!   "generatedAt": "2024-03-01T12:00:00Z",
//!   "version": "4.2.1",
//!   "commit": "92bee43adba8d2401ef40e2480e53087bcb1eaf1",
//!   "repo": "https://github.com/godotengine/godot.git",
//!   "icons": {
//!     "Node": { "path": "godot/editor/icons/Node.svg" }
//!   }
//! }
//! ```
//!
//! ## Portability
//!
//! Every icon `path` is expressed relative to the project root with
//! forward slashes, so a consumer (a web server serving static assets, a
//! browser resolving resource URLs) never sees the local filesystem
//! layout of the machine the manifest was generated on.
//!
//! ## Lifecycle
//!
//! The manifest is fully reconstructed on every run and immutable once
//! written; consumers treat it as a read-only snapshot valid until the
//! next regeneration. Writing it is the final step of the pipeline and
//! is only reached when every prior step succeeded, so a manifest on
//! disk always reflects a fully successful run.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::metadata::RepoMetadata;
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// A single icon asset in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    /// Location of the asset relative to the project root, with forward
    /// slashes. Suitable for direct use as a resource URL.
    pub path: String,
}

/// The root output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// When this manifest was generated (RFC 3339, UTC).
    pub generated_at: DateTime<Utc>,
    /// Upstream version as `major.minor.patch`.
    pub version: String,
    /// Full hash of the revision the icons were enumerated from.
    pub commit: String,
    /// Canonical URL of the upstream remote.
    pub repo: String,
    /// Icon name (filename without extension) to entry. Keys are unique;
    /// duplicate derived names collapse last-write-wins.
    pub icons: BTreeMap<String, IconEntry>,
}

/// Assemble a [`Manifest`] from extracted metadata and enumerated icons.
///
/// `icon_paths` are relative to `icons_dir`; `icons_dir` must live under
/// `project_root` for the rewritten paths to stay portable. Each icon's
/// name is the base filename without its extension. When two files derive
/// the same name, the later-enumerated one wins and the collision is
/// logged as a warning; the manifest contents are unaffected by the
/// report.
pub fn build(
    metadata: &RepoMetadata,
    icon_paths: &[std::path::PathBuf],
    icons_dir: &Path,
    project_root: &Path,
) -> Manifest {
    let mut icons = BTreeMap::new();

    for icon_path in icon_paths {
        let name = derive_name(icon_path);
        let path = portable_path(&icons_dir.join(icon_path), project_root);

        if let Some(previous) = icons.insert(name.clone(), IconEntry { path }) {
            warn!(
                "duplicate icon name {:?}: {} replaces {}",
                name,
                icon_path.display(),
                previous.path
            );
        }
    }

    Manifest {
        generated_at: Utc::now(),
        version: metadata.version.clone(),
        commit: metadata.commit.clone(),
        repo: metadata.repo.clone(),
        icons,
    }
}

/// Serialize the manifest as JSON to `path`.
pub fn write(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string(manifest)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Derive the icon name: base filename with the extension stripped.
fn derive_name(path: &Path) -> String {
    path.file_stem()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Rewrite an icon location relative to the project root, forward-slashed.
///
/// Falls back to the path as given when it does not sit under the project
/// root; that only happens with a misconfigured root and still avoids
/// leaking any prefix the configuration did not already contain.
fn portable_path(full_path: &Path, project_root: &Path) -> String {
    let relative = full_path.strip_prefix(project_root).unwrap_or(full_path);
    let components: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    components.join("/")
}
