use std::collections::BTreeSet;

/// A merged pull request as used to build a changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub labels: BTreeSet<String>,
}
