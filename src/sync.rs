//! Repository synchronization
//!
//! Brings the local clone of the upstream repository to the pinned
//! revision before anything is read from it: `git pull` to refresh
//! history, then `git checkout <revision>` to land on the exact commit
//! the configuration names.
//!
//! Pull must run before checkout. A checkout against a stale clone can
//! resolve the pinned revision incorrectly, or fail to find it at all if
//! the revision postdates the last fetch.
//!
//! There is no rollback on partial failure. If the checkout fails after a
//! successful pull, the clone is left at whatever HEAD the pull produced;
//! the error reports the phase so the state is diagnosable.

use std::path::Path;

use crate::error::{Error, Result, SyncPhase};
use crate::process;
use log::info;

/// Update the clone at `repo_dir` and check out `revision`.
///
/// Fails with [`Error::Sync`] tagged with the phase that failed. Pull
/// failures cover a missing or dirty clone and an unreachable remote;
/// checkout failures cover an unknown revision or an unswitchable
/// working tree.
pub fn sync(repo_dir: &Path, revision: &str) -> Result<()> {
    info!("pulling {}", repo_dir.display());
    process::run("git", &["pull"], repo_dir).map_err(|e| sync_error(SyncPhase::Pull, repo_dir, e))?;

    info!("checking out {}", revision);
    process::run("git", &["checkout", revision, "--quiet"], repo_dir)
        .map_err(|e| sync_error(SyncPhase::Checkout, repo_dir, e))?;

    Ok(())
}

fn sync_error(phase: SyncPhase, repo_dir: &Path, cause: Error) -> Error {
    Error::Sync {
        phase,
        dir: repo_dir.to_path_buf(),
        message: cause.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    /// Build a clone with an `origin` it can pull from, so that `git pull`
    /// succeeds without touching the network.
    fn scratch_clone() -> (TempDir, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let origin = temp_dir.path().join("origin");
        std::fs::create_dir(&origin).unwrap();
        git(&origin, &["init", "--quiet", "--initial-branch=main"]);
        git(&origin, &["config", "user.email", "test@example.com"]);
        git(&origin, &["config", "user.name", "Test"]);
        std::fs::write(origin.join("file.txt"), "contents").unwrap();
        git(&origin, &["add", "."]);
        git(&origin, &["commit", "--quiet", "-m", "initial"]);

        let clone = temp_dir.path().join("clone");
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
        (temp_dir, clone)
    }

    fn head_of(dir: &Path) -> String {
        let out = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(dir)
            .output()
            .unwrap();
        String::from_utf8(out.stdout).unwrap().trim().to_string()
    }

    #[test]
    fn test_sync_checks_out_pinned_revision() {
        let (_guard, clone) = scratch_clone();
        let head = head_of(&clone);

        sync(&clone, &head).unwrap();
        assert_eq!(head_of(&clone), head);
    }

    #[test]
    fn test_sync_missing_clone_fails_in_pull_phase() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-clone");

        let err = sync(&missing, "abc123").unwrap_err();
        match err {
            Error::Sync { phase, dir, .. } => {
                assert_eq!(phase, SyncPhase::Pull);
                assert_eq!(dir, missing);
            }
            other => panic!("expected Sync error, got {:?}", other),
        }
    }

    #[test]
    fn test_sync_unknown_revision_fails_in_checkout_phase() {
        let (_guard, clone) = scratch_clone();

        let err = sync(&clone, "0000000000000000000000000000000000000000").unwrap_err();
        match err {
            Error::Sync { phase, .. } => assert_eq!(phase, SyncPhase::Checkout),
            other => panic!("expected Sync error, got {:?}", other),
        }
    }

    #[test]
    fn test_sync_not_a_repository_fails_in_pull_phase() {
        let temp_dir = TempDir::new().unwrap();

        let err = sync(temp_dir.path(), "abc123").unwrap_err();
        match err {
            Error::Sync { phase, message, .. } => {
                assert_eq!(phase, SyncPhase::Pull);
                assert!(!message.is_empty());
            }
            other => panic!("expected Sync error, got {:?}", other),
        }
    }
}
