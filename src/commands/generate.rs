//! Generate command implementation
//!
//! The generate command executes the full pipeline:
//! 1. Pull the local clone and check out the pinned revision
//! 2. Extract version, commit, and remote URL from the clone
//! 3. Enumerate the icon directory
//! 4. Build the manifest and write it to disk
//!
//! Writing the manifest is the final step and only happens after every
//! prior step succeeded; a failed run never leaves a partial manifest.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "ICON_MANIFEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root the manifest paths are relative to (defaults to the
    /// current directory)
    #[arg(short, long, value_name = "PATH", env = "ICON_MANIFEST_ROOT")]
    pub root: Option<PathBuf>,

    /// Write the manifest here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    use icon_manifest::{config, manifest, pipeline};
    use std::time::Instant;

    let start_time = Instant::now();

    // Determine config file path
    let config_path = args
        .config
        .unwrap_or_else(|| PathBuf::from(".icon-manifest.yaml"));

    // Validate config file exists
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    // Determine project root
    let project_root = match args.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let config = config::from_file(&config_path)?;

    let manifest_path = args
        .output
        .unwrap_or_else(|| project_root.join(&config.manifest_path));

    let doc = pipeline::generate(&config, &project_root)?;
    manifest::write(&doc, &manifest_path)?;

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "Generated manifest for {} {} ({})",
            doc.repo, doc.version, doc.commit
        );
        println!(
            "   {} icons written to {} in {:.2}s",
            doc.icons.len(),
            manifest_path.display(),
            duration.as_secs_f64()
        );
    }

    Ok(())
}
