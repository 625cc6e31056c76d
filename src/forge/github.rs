//! Implements the Forge trait for Github
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use log::*;
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    error::Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, GITHUB_ACCEPT, RemoteConfig, USER_AGENT},
        github::types::{GithubRelease, GithubSearchResult},
        traits::Forge,
        types::PullRequestRecord,
    },
};

mod types;

/// GitHub forge implementation using reqwest against the REST API.
pub struct Github {
    config: RemoteConfig,
    base_url: Url,
    client: Client,
}

impl Github {
    /// Create a GitHub client. No request is made until the first lookup.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .default_headers(request_headers(&config)?)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        // trailing slash so joins keep any enterprise path prefix
        let base_url = Url::parse(&format!(
            "{}/",
            config.api_url.trim_end_matches('/')
        ))?;

        Ok(Self {
            config,
            base_url,
            client,
        })
    }

    fn latest_release_url(&self) -> Result<Url> {
        let url = self
            .base_url
            .join(&format!("repos/{}/releases/latest", self.config.path))?;
        Ok(url)
    }

    fn search_url(&self, since: Option<DateTime<Utc>>) -> Result<Url> {
        let mut url = self.base_url.join("search/issues")?;

        url.query_pairs_mut()
            .append_pair("q", &search_query(&self.config.path, since))
            .append_pair("sort", "merged")
            .append_pair("per_page", &DEFAULT_PAGE_SIZE.to_string());

        Ok(url)
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn latest_release_date(&self) -> Result<Option<DateTime<Utc>>> {
        let url = self.latest_release_url()?;
        debug!("fetching latest release: {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            // 404 when the repository has never been released
            warn!(
                "could not find any release for {}, status code: {status}",
                self.config.path
            );
            return Ok(None);
        }

        let release: GithubRelease = response.json().await?;

        Ok(release_date(&release))
    }

    async fn merged_pull_requests(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<PullRequestRecord>> {
        let url = self.search_url(since)?;
        debug!("searching merged pull requests: {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            error!(
                "GitHub API returned error response for {}, status code: {status}",
                self.config.path
            );
            return Ok(vec![]);
        }

        let result: GithubSearchResult = response.json().await?;

        let records = pull_request_records(&self.config.path, result);

        if records.is_empty() {
            warn!(
                "there was no pull request made on {} after last release",
                self.config.path
            );
        }

        Ok(records)
    }
}

/// Default headers for every API request.
fn request_headers(config: &RemoteConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

    if let Some(token) = &config.token {
        let mut value = HeaderValue::from_str(&format!(
            "Bearer {}",
            token.expose_secret()
        ))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Search qualifiers for merged pull requests of `path`, oldest first.
pub fn search_query(path: &str, since: Option<DateTime<Utc>>) -> String {
    let mut query = format!("repo:{path} is:pr is:merged sort:author-date-asc");

    if let Some(since) = since {
        query.push_str(&format!(
            " merged:>={}",
            since.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }

    query
}

fn release_date(release: &GithubRelease) -> Option<DateTime<Utc>> {
    let Some(published_at) = &release.published_at else {
        warn!("latest release {} has not been published", release.tag_name);
        return None;
    };

    match DateTime::parse_from_rfc3339(published_at) {
        Ok(date) => {
            info!(
                "latest release {} published at {published_at}",
                release.tag_name
            );
            Some(date.with_timezone(&Utc))
        }
        Err(err) => {
            warn!(
                "invalid publish date for release {}: {published_at}: {err}",
                release.tag_name
            );
            None
        }
    }
}

fn pull_request_records(
    path: &str,
    result: GithubSearchResult,
) -> Vec<PullRequestRecord> {
    if result.total_count == 0 {
        return vec![];
    }

    if result.incomplete_results {
        warn!("search results for {path} are incomplete");
    }

    if result.total_count > result.items.len() as u64 {
        warn!(
            "{path} has {} merged pull requests, only the first {} are included",
            result.total_count,
            result.items.len()
        );
    }

    result.items.into_iter().map(PullRequestRecord::from).collect()
}
