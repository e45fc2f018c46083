//! The provisioning pipeline, run strictly in sequence.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::Credentials;
use crate::git;
use crate::github::{self, CreateRepoOutcome};
use crate::publish::{self, PublishOutcome};
use crate::runner::CommandRunner;
use crate::skeleton;
use crate::venv::{self, OsFamily};

/// Everything one run needs, fixed at startup.
#[derive(Debug, Clone)]
pub struct RunParams {
    /// Directory the clone lands in.
    pub base_path: PathBuf,
    /// Repository name; doubles as the local root folder name.
    pub repo_name: String,
    pub description: String,
    /// Interpreter used to create the virtualenv.
    pub python_exec: String,
    pub branch: String,
}

/// Run every provisioning step in order.
///
/// Repository creation is the only step allowed to fail without aborting the
/// run: on error it is logged and skipped, on the assumption the repository
/// already exists. The only other early exit is a clean working tree at
/// publish time, which ends the run with a warning instead of a commit.
pub fn run(runner: &dyn CommandRunner, creds: &Credentials, params: &RunParams) -> Result<()> {
    match github::create_repo(creds, &params.repo_name, &params.description) {
        Ok(CreateRepoOutcome::Created) => {
            info!(
                "Successfully created repository '{}' on GitHub",
                params.repo_name
            );
        }
        Ok(CreateRepoOutcome::AlreadyExists) => {
            warn!(
                "Repository '{}' already exists on GitHub",
                params.repo_name
            );
        }
        Err(err) => warn!("Skipping repo creation due to error: {:#}", err),
    }

    let repo_path = git::clone(runner, creds, &params.repo_name, &params.base_path)?;

    info!("Creating folder structure in {}", repo_path.display());
    skeleton::materialize(&repo_path, skeleton::SKELETON)?;

    info!("Creating .gitignore file in {}", repo_path.display());
    skeleton::write_gitignore(&repo_path)?;

    let family = OsFamily::detect();
    venv::provision(runner, &repo_path, &params.python_exec, family)?;
    venv::write_activation_script(&repo_path, family)?;

    match publish::publish(runner, &repo_path, &params.branch)? {
        PublishOutcome::Pushed => {
            info!(
                "Successfully pushed branch '{}' to GitHub",
                params.branch
            );
        }
        PublishOutcome::NothingToCommit => {}
    }

    Ok(())
}
