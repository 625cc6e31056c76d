//! Configuration for forge API connections.
use secrecy::SecretString;
use std::time::Duration;

use crate::error::{ChangelogError, Result};

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Number of search results requested. Only the first page is read.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Media type requested from the GitHub API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
/// User agent sent with every request.
pub const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Remote repository connection configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API base URL (e.g. "https://api.github.com").
    pub api_url: String,
    /// Full repository path ("owner/repo").
    pub path: String,
    /// Optional access token, required for private repositories.
    pub token: Option<SecretString>,
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            path: "".to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RemoteConfig {
    /// Build a config for an `owner/repo` repository identifier.
    pub fn new(
        repository: &str,
        api_url: &str,
        token: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self> {
        let (owner, repo) = parse_repository(repository)?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            path: format!("{owner}/{repo}"),
            token,
            timeout,
        })
    }
}

/// Split an `owner/repo` identifier into its parts.
pub fn parse_repository(repository: &str) -> Result<(String, String)> {
    let invalid = || {
        ChangelogError::invalid_args(format!(
            "repository must be in the form owner/repo: {repository}"
        ))
    };

    let (owner, repo) = repository.trim().split_once('/').ok_or_else(invalid)?;

    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(invalid());
    }

    Ok((owner.to_string(), repo.to_string()))
}
