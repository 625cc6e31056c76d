//! Traits related to remote forges
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    error::Result,
    forge::{config::RemoteConfig, types::PullRequestRecord},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;

    /// Publish date of the latest release, `None` when the repository has no
    /// release or the lookup was rejected.
    async fn latest_release_date(&self) -> Result<Option<DateTime<Utc>>>;

    /// Merged pull requests, oldest first, optionally restricted to those
    /// merged at or after `since`.
    async fn merged_pull_requests(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<PullRequestRecord>>;
}
