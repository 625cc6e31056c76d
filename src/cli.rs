//! CLI argument parsing with GitHub Actions environment fallbacks.
//!
//! This is the only place the process environment is read. Everything past
//! this boundary receives explicit [`Inputs`] and [`RemoteConfig`] values.
use clap::Parser;
use secrecy::SecretString;
use std::{env, path::PathBuf, time::Duration};

use crate::{
    command::types::Inputs,
    error::{ChangelogError, Result},
    forge::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, RemoteConfig},
};

/// Changelog file written when none is configured.
pub const DEFAULT_CHANGELOG_FILENAME: &str = "CHANGELOG.md";

/// CLI arguments. Each empty flag falls back to the variable a GitHub Actions
/// runner provides.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "")]
    /// Repository as owner/repo. Falls back to GITHUB_REPOSITORY env var.
    pub repository: String,

    #[arg(long, default_value = "")]
    /// Webhook payload of the triggering pull request. Falls back to
    /// GITHUB_EVENT_PATH env var.
    pub event_path: String,

    #[arg(long, default_value = "")]
    /// Changelog file to update. Falls back to INPUT_CHANGELOG_FILENAME env
    /// var, then CHANGELOG.md.
    pub changelog_filename: String,

    #[arg(long, default_value = "")]
    /// JSON config file. Falls back to INPUT_CONFIG_FILE env var.
    pub config_file: String,

    #[arg(long, default_value = "")]
    /// GitHub access token. Falls back to GITHUB_TOKEN env var.
    pub token: String,

    #[arg(long, default_value = "")]
    /// GitHub API base URL. Falls back to GITHUB_API_URL env var.
    pub api_url: String,

    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    /// Timeout for each API request in seconds.
    pub timeout_secs: u64,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging. Also enabled by INPUT_DEBUG=true.
    pub debug: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            repository: String::new(),
            event_path: String::new(),
            changelog_filename: String::new(),
            config_file: String::new(),
            token: String::new(),
            api_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            debug: false,
        }
    }
}

impl Args {
    /// Whether debug logging was requested.
    pub fn is_debug(&self) -> bool {
        self.is_debug_with(|key| env::var(key).ok())
    }

    /// Resolve run inputs from flags and the process environment.
    pub fn get_inputs(&self) -> Result<Inputs> {
        self.get_inputs_with(|key| env::var(key).ok())
    }

    /// Resolve forge connection settings from flags and the process
    /// environment.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        self.get_remote_with(|key| env::var(key).ok())
    }

    fn is_debug_with(&self, lookup: impl Fn(&str) -> Option<String>) -> bool {
        self.debug
            || lookup("INPUT_DEBUG")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    fn get_inputs_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Inputs> {
        let event_path = resolve(&self.event_path, "GITHUB_EVENT_PATH", &lookup)
            .ok_or_else(|| {
                ChangelogError::invalid_args(
                    "must set --event-path or GITHUB_EVENT_PATH",
                )
            })?;

        let changelog_path = resolve(
            &self.changelog_filename,
            "INPUT_CHANGELOG_FILENAME",
            &lookup,
        )
        .unwrap_or_else(|| DEFAULT_CHANGELOG_FILENAME.to_string());

        let config_path =
            resolve(&self.config_file, "INPUT_CONFIG_FILE", &lookup);

        Ok(Inputs {
            event_path: PathBuf::from(event_path),
            changelog_path: PathBuf::from(changelog_path),
            config_path: config_path.map(PathBuf::from),
        })
    }

    fn get_remote_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<RemoteConfig> {
        if self.timeout_secs == 0 {
            return Err(ChangelogError::invalid_args(
                "--timeout-secs must be at least 1",
            ));
        }

        let repository =
            resolve(&self.repository, "GITHUB_REPOSITORY", &lookup)
                .ok_or_else(|| {
                    ChangelogError::invalid_args(
                        "must set --repository or GITHUB_REPOSITORY",
                    )
                })?;

        let api_url = resolve(&self.api_url, "GITHUB_API_URL", &lookup)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = resolve(&self.token, "GITHUB_TOKEN", &lookup)
            .map(SecretString::from);

        RemoteConfig::new(
            &repository,
            &api_url,
            token,
            Duration::from_secs(self.timeout_secs),
        )
    }
}

/// Flag value when set, otherwise the non-blank environment value.
fn resolve(
    flag: &str,
    env_key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if !flag.trim().is_empty() {
        return Some(flag.trim().to_string());
    }

    lookup(env_key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    use super::*;

    fn env_of(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn actions_env() -> impl Fn(&str) -> Option<String> {
        env_of(&[
            ("GITHUB_REPOSITORY", "octo/widgets"),
            ("GITHUB_EVENT_PATH", "/github/workflow/event.json"),
            ("INPUT_CHANGELOG_FILENAME", "docs/CHANGES.md"),
            ("INPUT_CONFIG_FILE", "changelog-ci-config.json"),
            ("GITHUB_TOKEN", "ghs_token"),
        ])
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "changelog-ci",
            "--repository",
            "octo/widgets",
            "--event-path",
            "event.json",
            "--timeout-secs",
            "5",
            "--debug",
        ])
        .unwrap();

        assert_eq!(args.repository, "octo/widgets");
        assert_eq!(args.event_path, "event.json");
        assert_eq!(args.timeout_secs, 5);
        assert!(args.debug);
        assert!(args.changelog_filename.is_empty());
    }

    #[test]
    fn inputs_fall_back_to_actions_env() {
        let inputs = Args::default().get_inputs_with(actions_env()).unwrap();

        assert_eq!(
            inputs.event_path,
            PathBuf::from("/github/workflow/event.json")
        );
        assert_eq!(inputs.changelog_path, PathBuf::from("docs/CHANGES.md"));
        assert_eq!(
            inputs.config_path,
            Some(PathBuf::from("changelog-ci-config.json"))
        );
    }

    #[test]
    fn flags_take_precedence_over_env() {
        let args = Args {
            event_path: "local-event.json".into(),
            changelog_filename: "HISTORY.md".into(),
            ..Default::default()
        };

        let inputs = args.get_inputs_with(actions_env()).unwrap();

        assert_eq!(inputs.event_path, PathBuf::from("local-event.json"));
        assert_eq!(inputs.changelog_path, PathBuf::from("HISTORY.md"));
    }

    #[test]
    fn blank_optional_inputs_use_defaults() {
        let lookup = env_of(&[
            ("GITHUB_EVENT_PATH", "event.json"),
            ("INPUT_CHANGELOG_FILENAME", ""),
            ("INPUT_CONFIG_FILE", "  "),
        ]);

        let inputs = Args::default().get_inputs_with(lookup).unwrap();

        assert_eq!(
            inputs.changelog_path,
            PathBuf::from(DEFAULT_CHANGELOG_FILENAME)
        );
        assert!(inputs.config_path.is_none());
    }

    #[test]
    fn missing_event_path_is_invalid() {
        let result = Args::default().get_inputs_with(env_of(&[]));

        assert!(matches!(result, Err(ChangelogError::InvalidArgs(_))));
    }

    #[test]
    fn remote_from_actions_env() {
        let remote = Args {
            timeout_secs: 10,
            ..Default::default()
        }
        .get_remote_with(actions_env())
        .unwrap();

        assert_eq!(remote.path, "octo/widgets");
        assert_eq!(remote.api_url, DEFAULT_API_URL);
        assert_eq!(remote.token.unwrap().expose_secret(), "ghs_token");
        assert_eq!(remote.timeout, Duration::from_secs(10));
    }

    #[test]
    fn remote_without_token_is_anonymous() {
        let lookup = env_of(&[
            ("GITHUB_REPOSITORY", "octo/widgets"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
        ]);

        let remote = Args::default().get_remote_with(lookup).unwrap();

        assert!(remote.token.is_none());
        assert_eq!(remote.api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result = Args::try_parse_from([
            "changelog-ci",
            "--repository",
            "octo/widgets",
            "--timeout-secs",
            "0",
        ]);
        assert!(result.is_err());

        let result = Args {
            timeout_secs: 0,
            ..Default::default()
        }
        .get_remote_with(env_of(&[("GITHUB_REPOSITORY", "octo/widgets")]));
        assert!(matches!(result, Err(ChangelogError::InvalidArgs(_))));
    }

    #[test]
    fn missing_repository_is_invalid() {
        let result = Args::default().get_remote_with(env_of(&[]));

        assert!(matches!(result, Err(ChangelogError::InvalidArgs(_))));
    }

    #[test]
    fn debug_from_env() {
        assert!(
            Args::default().is_debug_with(env_of(&[("INPUT_DEBUG", "TRUE")]))
        );
        assert!(
            !Args::default().is_debug_with(env_of(&[("INPUT_DEBUG", "no")]))
        );
        assert!(!Args::default().is_debug_with(env_of(&[])));
    }
}
