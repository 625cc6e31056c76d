//! Changelog generation command implementation.
use log::*;

use crate::{
    changelog::{ChangelogSection, FileWriter, group_pull_requests},
    command::types::{Inputs, Outcome},
    config::Config,
    error::Result,
    event,
    forge::{traits::Forge, types::PullRequestRecord},
};

/// Generate a changelog section for the triggering release pull request and
/// prepend it to the changelog file.
pub async fn execute(inputs: &Inputs, forge: &dyn Forge) -> Result<Outcome> {
    let config = Config::load(inputs.config_path.as_deref());

    let title = event::pull_request_title(&inputs.event_path)?;

    let Some(version) = event::release_version(&title) else {
        warn!(
            "the title of the pull request is incorrect: \"{title}\", \
             use a title like: `release <version_number> <other_text>`"
        );
        return Ok(Outcome::InvalidTitle { title });
    };

    info!(
        "generating changelog for {} version {version}",
        forge.remote_config().path
    );

    let pull_requests = fetch_pull_requests(forge).await;

    if pull_requests.is_empty() {
        info!("no merged pull requests found: changelog left unchanged");
        return Ok(Outcome::NoPullRequests);
    }

    let groups = group_pull_requests(&config.group_config, &pull_requests);
    let section = ChangelogSection::new(&config.header_prefix, &version, groups);

    let writer = FileWriter::new(&inputs.changelog_path);
    writer.prepend(&section)?;

    info!(
        "wrote {} pull requests to {}",
        pull_requests.len(),
        writer.path().display()
    );

    Ok(Outcome::Written {
        path: writer.path().to_path_buf(),
        version,
        pull_requests: pull_requests.len(),
    })
}

/// Merged pull requests since the latest release. Forge failures are logged
/// and treated as missing data.
async fn fetch_pull_requests(forge: &dyn Forge) -> Vec<PullRequestRecord> {
    let since = match forge.latest_release_date().await {
        Ok(since) => since,
        Err(err) => {
            warn!("failed to look up latest release: {err}");
            None
        }
    };

    if since.is_none() {
        info!("no previous release: including all merged pull requests");
    }

    match forge.merged_pull_requests(since).await {
        Ok(pull_requests) => pull_requests,
        Err(err) => {
            error!("failed to fetch merged pull requests: {err}");
            vec![]
        }
    }
}
