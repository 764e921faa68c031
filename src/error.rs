//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `icon-manifest` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! Every error is fatal to a manifest-generation run: nothing below the
//! binary entry point retries or recovers, and no partial manifest is ever
//! written. Each variant is constructed at the component boundary where the
//! failure occurred, carrying the working directory, command, field, or
//! path needed to diagnose it, and propagates unmodified to the top level.

use std::path::PathBuf;
use thiserror::Error;

/// The repository synchronization step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    /// `git pull` on the local clone.
    Pull,
    /// `git checkout <revision>` of the pinned revision.
    Checkout,
}

impl std::fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncPhase::Pull => write!(f, "pull"),
            SyncPhase::Checkout => write!(f, "checkout"),
        }
    }
}

/// Main error type for icon-manifest operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An external command failed.
    ///
    /// Raised for a non-zero exit status, for any output on the error
    /// stream, or when the command could not be spawned at all. Includes
    /// the full command line and the directory it ran in.
    #[error("Command failed in {}: {command} - {message}", dir.display())]
    Process {
        command: String,
        dir: PathBuf,
        message: String,
    },

    /// The local clone could not be brought to the pinned revision.
    ///
    /// Tagged with the phase (`pull` or `checkout`) that failed. A failed
    /// checkout after a successful pull leaves the clone at whatever HEAD
    /// the pull produced; that state is reported, not rolled back.
    #[error("Repository sync failed during {phase} in {}: {message}", dir.display())]
    Sync {
        phase: SyncPhase,
        dir: PathBuf,
        message: String,
    },

    /// Repository metadata (version, commit, or remote) could not be
    /// determined.
    #[error("Could not extract {field} from {}: {message}", dir.display())]
    Metadata {
        field: String,
        dir: PathBuf,
        message: String,
    },

    /// The icons directory is missing or unreadable.
    #[error("Could not enumerate icons directory {}: {message}", dir.display())]
    Enumeration { dir: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
