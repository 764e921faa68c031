//! # Manifest Generation Pipeline
//!
//! Composes the components into one ordered run:
//!
//! 1. **Sync** — pull the local clone and check out the pinned revision
//!    (side-effecting; mutates clone state).
//! 2. **Extract metadata** — version file, commit hash, remote URL
//!    (read-only against the synchronized clone).
//! 3. **Enumerate icons** — recursive listing of the icon directory.
//! 4. **Build** — assemble the manifest document.
//!
//! The sequence is strict because steps 2 and 3 read the filesystem state
//! step 1 leaves behind. Every step is fallible and the pipeline is
//! all-or-nothing: the first failure aborts the run with no partial
//! result. Persisting the manifest is left to the caller so the write
//! stays the final, unconditional-success step.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::manifest::{self, Manifest};
use crate::{icons, metadata, sync};
use log::info;

/// Run the full pipeline and return the assembled manifest.
///
/// `project_root` anchors both the configured relative paths and the
/// portable `path` values in the output. The returned manifest has not
/// been written anywhere; see [`manifest::write`].
pub fn generate(config: &Config, project_root: &Path) -> Result<Manifest> {
    let repo_dir = project_root.join(&config.repo_path);
    let icons_dir = repo_dir.join(&config.icons_path);

    sync::sync(&repo_dir, &config.commit)?;

    let metadata = metadata::extract(&repo_dir, &config.version_file)?;
    info!(
        "upstream {} at {} ({})",
        metadata.repo, metadata.commit, metadata.version
    );

    let files = icons::list_icons(&icons_dir)?;
    info!("found {} icon files", files.len());

    Ok(manifest::build(&metadata, &files, &icons_dir, project_root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SyncPhase};
    use std::path::{Path, PathBuf};
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    /// Project root containing a clone of a scratch upstream with a
    /// version file and a small icon tree.
    fn scratch_project() -> (TempDir, String) {
        let temp_dir = TempDir::new().unwrap();
        let origin = temp_dir.path().join("origin");
        std::fs::create_dir_all(origin.join("editor/icons/2d")).unwrap();
        std::fs::write(
            origin.join("version.py"),
            "major = \"4\"\nminor = \"2\"\npatch = \"1\"\n",
        )
        .unwrap();
        std::fs::write(origin.join("editor/icons/Node.svg"), "<svg/>").unwrap();
        std::fs::write(origin.join("editor/icons/2d/Sprite2D.svg"), "<svg/>").unwrap();
        git(&origin, &["init", "--quiet", "--initial-branch=main"]);
        git(&origin, &["config", "user.email", "test@example.com"]);
        git(&origin, &["config", "user.name", "Test"]);
        git(&origin, &["add", "."]);
        git(&origin, &["commit", "--quiet", "-m", "initial"]);

        let clone = temp_dir.path().join("upstream");
        git(
            temp_dir.path(),
            &[
                "clone",
                "--quiet",
                origin.to_str().unwrap(),
                clone.to_str().unwrap(),
            ],
        );
        git(&clone, &["config", "user.email", "test@example.com"]);
        git(&clone, &["config", "user.name", "Test"]);

        let head = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(&clone)
            .output()
            .unwrap();
        let commit = String::from_utf8(head.stdout).unwrap().trim().to_string();
        (temp_dir, commit)
    }

    fn test_config(commit: &str) -> Config {
        Config {
            repo_path: PathBuf::from("upstream"),
            commit: commit.to_string(),
            icons_path: PathBuf::from("editor/icons"),
            version_file: PathBuf::from("version.py"),
            manifest_path: PathBuf::from("manifest.json"),
        }
    }

    #[test]
    fn test_generate_full_run() {
        let (project, commit) = scratch_project();
        let config = test_config(&commit);

        let manifest = generate(&config, project.path()).unwrap();

        assert_eq!(manifest.version, "4.2.1");
        assert_eq!(manifest.commit, commit);
        assert_eq!(manifest.icons.len(), 2);
        assert_eq!(
            manifest.icons["Node"].path,
            "upstream/editor/icons/Node.svg"
        );
        assert_eq!(
            manifest.icons["Sprite2D"].path,
            "upstream/editor/icons/2d/Sprite2D.svg"
        );
    }

    #[test]
    fn test_generate_paths_resolve_against_project_root() {
        let (project, commit) = scratch_project();
        let config = test_config(&commit);

        let manifest = generate(&config, project.path()).unwrap();

        for entry in manifest.icons.values() {
            assert!(!entry.path.starts_with('/'));
            assert!(project.path().join(&entry.path).is_file());
        }
    }

    #[test]
    fn test_generate_pull_failure_stops_pipeline() {
        let temp_dir = TempDir::new().unwrap();
        // No clone at all: the pull phase must fail before anything else runs
        let config = test_config("abc123");

        let err = generate(&config, temp_dir.path()).unwrap_err();
        match err {
            Error::Sync { phase, .. } => assert_eq!(phase, SyncPhase::Pull),
            other => panic!("expected Sync error, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_bad_revision_fails_checkout() {
        let (project, _) = scratch_project();
        let config = test_config("0000000000000000000000000000000000000000");

        let err = generate(&config, project.path()).unwrap_err();
        match err {
            Error::Sync { phase, .. } => assert_eq!(phase, SyncPhase::Checkout),
            other => panic!("expected Sync error, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_missing_icons_dir_fails_enumeration() {
        let (project, commit) = scratch_project();
        let mut config = test_config(&commit);
        config.icons_path = PathBuf::from("no/such/dir");

        let err = generate(&config, project.path()).unwrap_err();
        assert!(matches!(err, Error::Enumeration { .. }));
    }

    #[test]
    fn test_generate_missing_version_file_fails_metadata() {
        let (project, commit) = scratch_project();
        let mut config = test_config(&commit);
        config.version_file = PathBuf::from("no-version.py");

        let err = generate(&config, project.path()).unwrap_err();
        match err {
            Error::Metadata { field, .. } => assert_eq!(field, "version"),
            other => panic!("expected Metadata error, got {:?}", other),
        }
    }
}
