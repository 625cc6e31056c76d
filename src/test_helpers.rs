//! Common test helper functions shared across test modules.
use secrecy::SecretString;

use crate::{
    config::GroupConfig,
    forge::{
        config::RemoteConfig, traits::MockForge, types::PullRequestRecord,
    },
};

/// Creates a test RemoteConfig pointing at `octo/widgets`.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        path: "octo/widgets".to_string(),
        token: Some(SecretString::from("test-token".to_string())),
        ..RemoteConfig::default()
    }
}

/// Creates a MockForge whose remote config is already stubbed.
///
/// # Example
/// ```ignore
/// let mut forge = create_mock_forge();
/// forge.expect_latest_release_date().returning(|| Ok(None));
/// ```
pub fn create_mock_forge() -> MockForge {
    let mut forge = MockForge::new();
    forge
        .expect_remote_config()
        .returning(create_test_remote_config);
    forge
}

/// Creates a merged pull request with a GitHub style url.
pub fn create_pull_request(
    number: u64,
    title: &str,
    labels: &[&str],
) -> PullRequestRecord {
    PullRequestRecord {
        number,
        title: title.to_string(),
        url: format!("https://github.com/octo/widgets/pull/{number}"),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}

/// Creates a group config from a title and labels.
pub fn create_group(title: &str, labels: &[&str]) -> GroupConfig {
    GroupConfig {
        title: title.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}
