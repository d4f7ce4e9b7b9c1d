//! Commit range collection.
//!
//! A [`CommitSource`] turns a pull request range into the ordered list of
//! commit subjects the changelog is built from. Three sources exist:
//!
//! - [`GitLogCollector`] fetches refs and runs `git log` as a subprocess.
//! - [`LocalRepoCollector`] walks refs already present in a local clone with git2.
//! - [`PayloadCollector`] reads a pre-computed `{"body": "..."}` changelog.

pub mod git_cli;
pub mod local;
pub mod payload;

use async_trait::async_trait;

use crate::error::CollectError;

pub use git_cli::GitLogCollector;
pub use local::LocalRepoCollector;
pub use payload::PayloadCollector;

/// The commits of a pull request: reachable from its head, not from its base branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRange {
    pub remote: String,
    pub number: u64,
    pub base_branch: String,
}

impl PullRequestRange {
    pub fn new(remote: impl Into<String>, number: u64, base_branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            number,
            base_branch: base_branch.into(),
        }
    }

    /// Remote-tracking ref of the pull request head, e.g. `origin/pr/42`.
    pub fn head_ref(&self) -> String {
        format!("{}/pr/{}", self.remote, self.number)
    }

    /// Remote-tracking ref of the base branch, e.g. `origin/master`.
    pub fn base_ref(&self) -> String {
        format!("{}/{}", self.remote, self.base_branch)
    }
}

/// Source of commit subjects for a pull request.
///
/// This abstraction keeps the changelog core independent of git and allows
/// mocking collection in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Commit subjects in the range, most recent first.
    async fn collect(&self, range: &PullRequestRange) -> Result<Vec<String>, CollectError>;
}

/// Remove one matching pair of wrapping `'` or `"` quotes.
pub fn strip_wrapping_quotes(line: &str) -> &str {
    for quote in ['\'', '"'] {
        if line.len() >= 2 && line.starts_with(quote) && line.ends_with(quote) {
            return &line[1..line.len() - 1];
        }
    }
    line
}

/// Split tool output into commit subjects, dropping blank lines.
pub fn parse_log_output(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| strip_wrapping_quotes(line.trim_end_matches('\r')))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
