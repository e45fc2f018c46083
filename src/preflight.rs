//! Preflight checks - ensure required tools exist before any side effect.

use anyhow::{Context, Result};
use tracing::info;

/// Verify that the git client and the requested interpreter resolve on PATH.
pub fn check_tools(python_exec: &str) -> Result<()> {
    check_tool("git")?;
    check_tool(python_exec)?;
    Ok(())
}

fn check_tool(name: &str) -> Result<()> {
    let path = which::which(name)
        .with_context(|| format!("Required tool `{}` not found on PATH", name))?;
    info!("Found {} at {}", name, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_reported_by_name() {
        let err = check_tool("definitely-not-a-real-interpreter").unwrap_err();
        assert!(err
            .to_string()
            .contains("definitely-not-a-real-interpreter"));
    }
}
