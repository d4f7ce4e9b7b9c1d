//! Commit subjects supplied up front as a JSON changelog payload.
//!
//! Workflows that compute the log in an earlier step pass it as
//! `{"body": "<one subject per line>"}`, usually through the `CHANGELOG`
//! environment variable.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::CollectError;

use super::{CommitSource, PullRequestRange};

/// Environment variable carrying a pre-computed changelog payload.
pub const CHANGELOG_ENV_VAR: &str = "CHANGELOG";

#[derive(Debug, Deserialize)]
struct ChangelogPayload {
    body: String,
}

/// Serves subjects parsed from a changelog payload, ignoring the range.
#[derive(Debug, Clone)]
pub struct PayloadCollector {
    subjects: Vec<String>,
}

impl PayloadCollector {
    /// Parse a `{"body": "..."}` payload.
    pub fn from_json(json: &str) -> Result<Self, CollectError> {
        let payload: ChangelogPayload =
            serde_json::from_str(json).map_err(CollectError::InvalidPayload)?;

        Ok(Self {
            subjects: split_subjects(&payload.body),
        })
    }
}

/// One subject per non-blank line. Lines are kept verbatim: the payload is
/// not `git log --pretty='%s'` output, so quotes belong to the subject.
fn split_subjects(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl CommitSource for PayloadCollector {
    async fn collect(&self, _range: &PullRequestRange) -> Result<Vec<String>, CollectError> {
        Ok(self.subjects.clone())
    }
}
