//! Configuration loading and validation for the changelog JSON config file.
//!
//! A config file is optional. When it is missing, unreadable or invalid the
//! run continues with [`Config::default`] and the reason is logged.
use log::*;
use schemars::JsonSchema;
use serde::Deserialize;
use std::{collections::BTreeSet, fs, path::Path};

use crate::error::{ChangelogError, Result};

/// Header prefix used when no valid configuration is provided.
pub const DEFAULT_HEADER_PREFIX: &str = "Version:";

/// A named bucket of pull requests selected by label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct GroupConfig {
    /// Section title rendered above the group's entries.
    #[schemars(length(min = 1))]
    pub title: String,
    /// Pull requests carrying any of these labels belong to the group.
    #[schemars(length(min = 1))]
    pub labels: BTreeSet<String>,
}

/// Root configuration structure for the changelog config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct Config {
    /// Literal text placed before the version in each section header.
    #[schemars(length(min = 1))]
    pub header_prefix: String,
    /// Groups in priority order. A pull request lands in the first group
    /// whose labels it matches.
    pub group_config: Vec<GroupConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_prefix: DEFAULT_HEADER_PREFIX.to_string(),
            group_config: vec![],
        }
    }
}

impl Config {
    /// Load configuration from an optional path, falling back to the default
    /// configuration on any error.
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::from_file(path) {
                Ok(config) => {
                    debug!("loaded configuration from {}", path.display());
                    return config;
                }
                Err(err) => {
                    warn!(
                        "invalid configuration file {}: {err}",
                        path.display()
                    );
                }
            }
        }

        warn!("using default config to parse changelog");
        Self::default()
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse and validate config file content.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|err| ChangelogError::invalid_config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the constraints the JSON types alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.header_prefix.is_empty() {
            return Err(ChangelogError::invalid_config(
                "configuration must contain header_prefix",
            ));
        }

        self.group_config.iter().try_for_each(GroupConfig::validate)
    }
}

impl GroupConfig {
    /// A group needs a title and at least one non-empty label.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ChangelogError::invalid_config(
                "group_config item must contain title",
            ));
        }

        if self.labels.is_empty() {
            return Err(ChangelogError::invalid_config(format!(
                "group_config item must contain labels: {}",
                self.title
            )));
        }

        if self.labels.iter().any(String::is_empty) {
            return Err(ChangelogError::invalid_config(format!(
                "group_config labels must be non-empty strings: {}",
                self.title
            )));
        }

        Ok(())
    }
}
