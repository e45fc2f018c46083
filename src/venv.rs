//! Virtual environment provisioning and the activation helper.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::runner::CommandRunner;
use crate::templates;

/// Host operating system family, as far as venv layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Unix,
}

impl OsFamily {
    /// Family of the machine we are running on.
    pub fn detect() -> Self {
        if std::env::consts::OS == "windows" {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }
}

/// Where the environment's pip lives, relative to the repo root.
pub fn pip_path(root: &Path, family: OsFamily) -> PathBuf {
    match family {
        OsFamily::Windows => root.join("venv").join("Scripts").join("pip.exe"),
        OsFamily::Unix => root.join("venv").join("bin").join("pip"),
    }
}

/// Create `<root>/venv`, verify pip exists inside it, write the dependency
/// manifest, and install the manifest into the environment.
pub fn provision(
    runner: &dyn CommandRunner,
    root: &Path,
    python_exec: &str,
    family: OsFamily,
) -> Result<()> {
    let venv_path = root.join("venv");
    info!(
        "Creating virtual environment at: {} using {}",
        venv_path.display(),
        python_exec
    );

    let venv_str = venv_path.display().to_string();
    let output = runner
        .run(python_exec, &["-m", "venv", &venv_str], None)
        .with_context(|| format!("Failed to run `{} -m venv`", python_exec))?;
    if !output.success {
        bail!(
            "Failed to create virtual environment: {}",
            output.stderr.trim()
        );
    }
    info!("Virtual environment created successfully");

    let pip = pip_path(root, family);
    if !pip.exists() {
        bail!(
            "pip not found at {}. Ensure pip is installed in the virtual environment.",
            pip.display()
        );
    }

    let manifest = root.join("requirements.txt");
    fs::write(&manifest, templates::REQUIREMENTS)
        .with_context(|| format!("Failed to create {}", manifest.display()))?;
    info!("Created requirements.txt at {}", manifest.display());

    info!("Installing requirements from {}", manifest.display());
    let pip_str = pip.display().to_string();
    let manifest_str = manifest.display().to_string();
    let output = runner
        .run(&pip_str, &["install", "-r", &manifest_str], None)
        .context("Failed to run pip install")?;
    if !output.success {
        bail!("Failed to install requirements: {}", output.stderr.trim());
    }
    info!("Successfully installed libraries from requirements.txt");

    Ok(())
}

/// Write the platform's activation helper at the repo root. The POSIX
/// variant is marked executable.
pub fn write_activation_script(root: &Path, family: OsFamily) -> Result<PathBuf> {
    match family {
        OsFamily::Windows => {
            let path = root.join("activate_venv.bat");
            fs::write(&path, templates::ACTIVATE_BAT)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            info!("Created activation script: activate_venv.bat");
            Ok(path)
        }
        OsFamily::Unix => {
            let path = root.join("activate_venv.sh");
            fs::write(&path, templates::ACTIVATE_SH)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            mark_executable(&path)?;
            info!("Created activation script: activate_venv.sh");
            Ok(path)
        }
    }
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}
