//! Webhook payload handling for the pull request that triggered the run.
use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{ChangelogError, Result};

/// Leading word that marks a pull request as a release.
pub const RELEASE_KEYWORD: &str = "release";

#[derive(Debug, Deserialize)]
struct EventPullRequest {
    title: String,
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: EventPullRequest,
}

/// Read the triggering pull request's title from a webhook payload file.
pub fn pull_request_title(event_path: &Path) -> Result<String> {
    let content = fs::read_to_string(event_path).map_err(|err| {
        ChangelogError::invalid_event(format!(
            "failed to read {}: {err}",
            event_path.display()
        ))
    })?;

    let payload: EventPayload =
        serde_json::from_str(&content).map_err(|err| {
            ChangelogError::invalid_event(format!(
                "{} has no pull_request.title: {err}",
                event_path.display()
            ))
        })?;

    Ok(payload.pull_request.title)
}

/// Extract the version from a release title such as `Release 1.2.3 notes`.
///
/// The first word must be `release` (any case) and the version is the word
/// that follows it.
pub fn release_version(title: &str) -> Option<String> {
    let mut words = title.split_whitespace();

    let keyword = words.next()?;
    if !keyword.eq_ignore_ascii_case(RELEASE_KEYWORD) {
        return None;
    }

    words.next().map(str::to_string)
}
