//! Branch creation and publication.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::git;
use crate::runner::CommandRunner;

/// How publishing ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Pushed,
    /// Working tree was clean after staging; no commit or push happened.
    NothingToCommit,
}

/// Create `branch`, back-fill empty directories with `.keep` markers, stage
/// everything, and push the result with upstream tracking.
pub fn publish(runner: &dyn CommandRunner, repo: &Path, branch: &str) -> Result<PublishOutcome> {
    info!("Creating and switching to branch '{}'", branch);
    git::checkout_new_branch(runner, repo, branch)?;

    info!("Adding .keep files to empty folders");
    backfill_empty_dirs(repo)?;

    info!("Staging changes for commit");
    git::add_all(runner, repo)?;

    if !git::has_changes(runner, repo)? {
        warn!("Nothing to commit. Project may be empty or already committed.");
        return Ok(PublishOutcome::NothingToCommit);
    }

    info!("Committing changes for branch '{}'", branch);
    git::commit(runner, repo, &format!("Initialize {} structure", branch))?;

    info!("Pushing branch '{}' to origin", branch);
    git::push_upstream(runner, repo, branch)?;

    Ok(PublishOutcome::Pushed)
}

/// Drop a `.keep` file into every empty directory so git tracks it.
fn backfill_empty_dirs(repo: &Path) -> Result<()> {
    for entry in WalkDir::new(repo).min_depth(1) {
        let entry = entry.context("Failed to walk repository tree")?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if dir_is_empty(entry.path())? {
            let keep = entry.path().join(".keep");
            File::create(&keep)
                .with_context(|| format!("Failed to add .keep to {}", entry.path().display()))?;
            info!("Added .keep to empty folder: {}", entry.path().display());
        }
    }
    Ok(())
}

fn dir_is_empty(path: &Path) -> Result<bool> {
    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory {}", path.display()))?;
    Ok(entries.next().is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::fake::FakeRunner;
    use crate::runner::RunOutput;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_backfill_targets_only_empty_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("reports/visualizations")).unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/README.md"), "").unwrap();

        backfill_empty_dirs(temp.path()).unwrap();

        assert!(temp.path().join("reports/visualizations/.keep").is_file());
        assert!(!temp.path().join("docs/.keep").exists());
        // `reports` held `visualizations` before the walk reached it.
        assert!(!temp.path().join("reports/.keep").exists());
    }

    #[test]
    fn test_clean_tree_skips_commit_and_push() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new(|_, args| {
            if args == ["status", "--porcelain"] {
                RunOutput::ok_with_stdout("")
            } else {
                RunOutput::ok()
            }
        });

        let outcome = publish(&runner, temp.path(), "task-1").unwrap();
        assert_eq!(outcome, PublishOutcome::NothingToCommit);

        let calls = runner.calls();
        assert!(calls.iter().any(|c| c.contains("checkout -b task-1")));
        assert!(calls.iter().any(|c| c.contains("add .")));
        assert!(!calls.iter().any(|c| c.contains("commit")));
        assert!(!calls.iter().any(|c| c.contains("push")));
    }

    #[test]
    fn test_dirty_tree_commits_and_pushes() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new(|_, args| {
            if args == ["status", "--porcelain"] {
                RunOutput::ok_with_stdout("A  docs/README.md\n")
            } else {
                RunOutput::ok()
            }
        });

        let outcome = publish(&runner, temp.path(), "task-1").unwrap();
        assert_eq!(outcome, PublishOutcome::Pushed);

        let calls = runner.calls();
        assert!(calls
            .iter()
            .any(|c| c.contains("commit -m Initialize task-1 structure")));
        assert!(calls.iter().any(|c| c.contains("push -u origin task-1")));
    }

    #[test]
    fn test_branch_failure_aborts_before_staging() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new(|_, args| {
            if args.first() == Some(&"checkout") {
                RunOutput::failed("fatal: a branch named 'task-1' already exists")
            } else {
                RunOutput::ok()
            }
        });

        assert!(publish(&runner, temp.path(), "task-1").is_err());
        assert_eq!(runner.calls().len(), 1);
    }
}
