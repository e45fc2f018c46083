//! Remote repository creation against the GitHub API.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::config::Credentials;

const CREATE_REPO_URL: &str = "https://api.github.com/user/repos";

/// How the creation request resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateRepoOutcome {
    Created,
    /// The repository was already there; callers treat this as success.
    AlreadyExists,
}

#[derive(Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
    description: &'a str,
    auto_init: bool,
    private: bool,
}

/// Create `repo_name` under the credential owner's account, non-private and
/// auto-initialized with a default branch.
pub fn create_repo(
    creds: &Credentials,
    repo_name: &str,
    description: &str,
) -> Result<CreateRepoOutcome> {
    info!("Starting creation of GitHub repository '{}'", repo_name);

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("groundwork/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .post(CREATE_REPO_URL)
        .header("Authorization", format!("token {}", creds.token))
        .header("Accept", "application/vnd.github.v3+json")
        .json(&CreateRepoRequest {
            name: repo_name,
            description,
            auto_init: true,
            private: false,
        })
        .send()
        .context("Failed to reach the GitHub API")?;

    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    classify_response(status, &body)
}

/// Map the API status to an outcome. Only 201 and 422 are special-cased;
/// every other status carries the response body in the error.
fn classify_response(status: u16, body: &str) -> Result<CreateRepoOutcome> {
    match status {
        201 => Ok(CreateRepoOutcome::Created),
        422 => Ok(CreateRepoOutcome::AlreadyExists),
        _ => bail!("GitHub API error ({}): {}", status, error_message(body)),
    }
}

/// Pull the `message` field out of an API error body, falling back to the
/// raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}
