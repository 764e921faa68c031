//! External command execution
//!
//! Every interaction with git goes through [`run`], which executes the
//! system binary in a given working directory and captures its output.
//! Using the system git means authentication (SSH keys, credential
//! helpers, access tokens) works exactly as it does for the user's own
//! shell.
//!
//! The failure policy is conservative: a non-zero exit status or any
//! output on stderr is treated as failure, even when the command also
//! produced stdout. Ambiguous states surface as errors instead of being
//! accepted as partial success.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use log::debug;

/// Run an external command in `dir` and return its stdout.
///
/// Fails with [`Error::Process`] if the command cannot be spawned, exits
/// non-zero, or writes anything to stderr. The error carries the full
/// command line and the working directory. No retries; the caller decides
/// what the failure means.
pub fn run(program: &str, args: &[&str], dir: &Path) -> Result<String> {
    let command_line = format_command(program, args);
    debug!("running `{}` in {}", command_line, dir.display());

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::Process {
            command: command_line.clone(),
            dir: dir.to_path_buf(),
            message: e.to_string(),
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() || !stderr.trim().is_empty() {
        return Err(Error::Process {
            command: command_line,
            dir: dir.to_path_buf(),
            message: if stderr.trim().is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn format_command(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
