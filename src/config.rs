//! Credential loading from the environment and an optional `.env` file.

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

pub const USERNAME_VAR: &str = "GITHUB_USERNAME";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// GitHub account credentials for the run. Loaded once, never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    /// Load credentials from the process environment, after populating it
    /// from a `.env` file in the current directory when one exists.
    pub fn load() -> Result<Self> {
        load_env_file(Path::new(".env"))?;
        Self::from_values(env::var(USERNAME_VAR).ok(), env::var(TOKEN_VAR).ok())
    }

    fn from_values(username: Option<String>, token: Option<String>) -> Result<Self> {
        match (username, token) {
            (Some(username), Some(token)) if !username.is_empty() && !token.is_empty() => {
                Ok(Self { username, token })
            }
            _ => bail!(
                "GitHub credentials not found. Please set {} and {} in a .env file.",
                USERNAME_VAR,
                TOKEN_VAR
            ),
        }
    }
}

/// Populate the process environment from a dotenv-style file.
///
/// Variables already present in the environment win. A missing file is not
/// an error.
pub fn load_env_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for (key, value) in parse_env_lines(&content) {
        if env::var_os(&key).is_none() {
            env::set_var(&key, &value);
        }
    }

    Ok(())
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped, a
/// leading `export ` is tolerated, and matching surrounding quotes on the
/// value are stripped.
fn parse_env_lines(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let parsed = parse_env_lines("GITHUB_USERNAME=alice\nGITHUB_TOKEN=ghp_abc123\n");
        assert_eq!(
            parsed,
            vec![
                ("GITHUB_USERNAME".to_string(), "alice".to_string()),
                ("GITHUB_TOKEN".to_string(), "ghp_abc123".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let parsed = parse_env_lines("# secrets\n\nA=1\n  # another\nB=2");
        assert_eq!(
            parsed,
            vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_strips_quotes_and_export() {
        let parsed = parse_env_lines("export A=\"quoted value\"\nB='single'\nC=\"unbalanced");
        assert_eq!(parsed[0], ("A".to_string(), "quoted value".to_string()));
        assert_eq!(parsed[1], ("B".to_string(), "single".to_string()));
        assert_eq!(parsed[2], ("C".to_string(), "\"unbalanced".to_string()));
    }

    #[test]
    fn test_parse_ignores_lines_without_equals() {
        assert!(parse_env_lines("not a pair\n=novalue").is_empty());
    }

    #[test]
    fn test_missing_credentials_name_both_vars() {
        let err = Credentials::from_values(None, None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(USERNAME_VAR));
        assert!(msg.contains(TOKEN_VAR));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(Credentials::from_values(Some(String::new()), Some("t".to_string())).is_err());
        assert!(Credentials::from_values(Some("u".to_string()), Some(String::new())).is_err());
    }

    #[test]
    fn test_present_credentials_accepted() {
        let creds =
            Credentials::from_values(Some("alice".to_string()), Some("token".to_string())).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.token, "token");
    }

    #[test]
    fn test_load_env_file_missing_is_ok() {
        assert!(load_env_file(Path::new("/nonexistent/.env")).is_ok());
    }
}
