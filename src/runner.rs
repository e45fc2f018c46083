//! Narrow seam around external process invocation.
//!
//! Every git, interpreter, and package-manager call goes through
//! [`CommandRunner`] so tests can substitute a fake that records invocations
//! and returns canned output instead of touching real tools.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Captured result of one external command.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs external commands (git, python, pip).
pub trait CommandRunner {
    /// Run `program` with `args`, optionally inside `cwd`, capturing output.
    ///
    /// Returns `Err` only when the process could not be spawned at all; a
    /// non-zero exit lands in [`RunOutput`] for the caller to interpret.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<RunOutput>;
}

/// Real runner over `std::process::Command`.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<RunOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .with_context(|| format!("Failed to run `{}`. Is it installed?", program))?;

        Ok(RunOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
