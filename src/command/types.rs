use std::path::PathBuf;

/// Resolved run inputs, read from the environment at the entry boundary.
#[derive(Debug, Clone)]
pub struct Inputs {
    /// Webhook payload of the triggering pull request.
    pub event_path: PathBuf,
    /// Changelog file to prepend to.
    pub changelog_path: PathBuf,
    /// Optional JSON config file.
    pub config_path: Option<PathBuf>,
}

/// What a generate run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new section was written.
    Written {
        path: PathBuf,
        version: String,
        pull_requests: usize,
    },
    /// The pull request title does not name a release.
    InvalidTitle { title: String },
    /// No merged pull requests were found since the latest release.
    NoPullRequests,
}
