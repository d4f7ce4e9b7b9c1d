//! The subset of a `pull_request` webhook event the changelog needs.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable GitHub Actions sets to the event payload path.
pub const EVENT_PATH_ENV_VAR: &str = "GITHUB_EVENT_PATH";

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub pull_request: PullRequestInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestInfo {
    pub number: u64,
    pub comments_url: String,
    pub user: UserInfo,
    pub base: Option<BaseInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BaseInfo {
    #[serde(rename = "ref")]
    pub ref_name: String,
}

impl PullRequestEvent {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::InvalidEventPayload)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadEventPayload {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
