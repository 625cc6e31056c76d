use serde::Deserialize;

use crate::forge::types::PullRequestRecord;

#[derive(Debug, Deserialize)]
pub struct GithubRelease {
    pub tag_name: String,
    /// Null for draft releases.
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GithubLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<GithubLabel>,
}

#[derive(Debug, Deserialize)]
pub struct GithubSearchResult {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<GithubIssue>,
}

impl From<GithubIssue> for PullRequestRecord {
    fn from(issue: GithubIssue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            url: issue.html_url,
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
        }
    }
}
