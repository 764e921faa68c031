//! # Icon Manifest Library
//!
//! This library generates the manifest consumed by a browser-based icon
//! gallery. It synchronizes a local clone of the upstream icon repository
//! to a pinned revision, extracts version metadata, enumerates the icon
//! directory tree, and assembles a normalized, path-portable JSON
//! document describing every icon asset.
//!
//! ## Quick Example
//!
//! ```no_run
//! use icon_manifest::{config, manifest, pipeline};
//! use std::path::Path;
//!
//! let cfg = config::from_file(".icon-manifest.yaml")?;
//! let project_root = Path::new(".");
//!
//! let doc = pipeline::generate(&cfg, project_root)?;
//! manifest::write(&doc, &project_root.join(&cfg.manifest_path))?;
//! # Ok::<(), icon_manifest::error::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the `.icon-manifest.yaml` schema naming
//!   the local clone, the pinned revision, and the icon directory.
//! - **Process Runner (`process`)**: runs external commands (git) in a
//!   working directory with a conservative failure policy.
//! - **Synchronizer (`sync`)**: pulls the clone and checks out the pinned
//!   revision, in that order.
//! - **Metadata Extractor (`metadata`)**: upstream version, commit hash,
//!   and remote URL of the synchronized clone.
//! - **Icon Enumerator (`icons`)**: recursive listing of the icon
//!   directory as relative paths.
//! - **Manifest (`manifest`)**: the output document model, the builder,
//!   and JSON persistence.
//! - **Pipeline (`pipeline`)**: the ordered, fail-fast composition of all
//!   of the above.
//!
//! ## Execution Flow
//!
//! The pipeline is a plain sequence of fallible steps with a strict data
//! dependency: synchronization mutates the clone, then metadata
//! extraction and icon enumeration read the state it left behind, then
//! the builder assembles the document. Any failure aborts the run; the
//! manifest is written only after every step succeeded, so no partial
//! manifest ever reaches disk.

pub mod config;
pub mod error;
pub mod icons;
pub mod manifest;
pub mod metadata;
pub mod pipeline;
pub mod process;
pub mod sync;
