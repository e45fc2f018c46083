//! Static project skeleton and its materializer.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use tracing::info;

use crate::templates;

/// Relative paths laid down in every new project. A trailing `/` marks a
/// bare directory, a `.gitkeep` leaf marks a placeholder inside an otherwise
/// empty directory, anything else is an empty file.
pub const SKELETON: &[&str] = &[
    ".github/workflows/ci.yml",
    "data/raw/.gitkeep",
    "data/processed/.gitkeep",
    "docs/README.md",
    "models/.gitkeep",
    "notebooks/1.0-eda.ipynb",
    "reports/final_report.md",
    "reports/visualizations/",
    "src/__init__.py",
    "src/data_processing.py",
    "src/train.py",
    "src/predict.py",
    "src/api/main.py",
    "src/api/pydantic_models.py",
    "tests/test_data_processing.py",
    "Dockerfile",
    "docker-compose.yml",
];

/// What a skeleton entry stands for, read off its trailing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Placeholder,
    File,
}

pub fn classify(entry: &str) -> EntryKind {
    if entry.ends_with('/') {
        EntryKind::Directory
    } else if entry.ends_with(".gitkeep") {
        EntryKind::Placeholder
    } else {
        EntryKind::File
    }
}

/// Create every entry under `root`. Safe to run again: directories are
/// create-if-missing and files are opened in append mode, so existing
/// content survives a second pass untouched.
pub fn materialize(root: &Path, entries: &[&str]) -> Result<()> {
    for entry in entries {
        let path = root.join(entry.trim_end_matches('/'));
        match classify(entry) {
            EntryKind::Directory => {
                fs::create_dir_all(&path)
                    .with_context(|| format!("Failed to create folder {}", path.display()))?;
                info!("Created directory: {}", path.display());
            }
            EntryKind::Placeholder | EntryKind::File => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create folder {}", parent.display()))?;
                }
                touch(&path)?;
                info!("Created file: {}", path.display());
            }
        }
    }
    Ok(())
}

fn touch(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;
    Ok(())
}

/// Overwrite `<root>/.gitignore` with the fixed ignore block.
pub fn write_gitignore(root: &Path) -> Result<()> {
    let path = root.join(".gitignore");
    fs::write(&path, templates::GITIGNORE)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    info!(".gitignore file created successfully");
    Ok(())
}
