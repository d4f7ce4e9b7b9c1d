//! Run configuration, resolved once at the process boundary.
//!
//! Values come from explicit overrides (CLI flags) first, then from the CI
//! environment: action inputs, the `pull_request` event payload and a few
//! well-known environment variables. Nothing below `main` reads the
//! environment on its own.

use std::env;
use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::changelog::RenderOptions;
use crate::collect::PullRequestRange;
use crate::collect::payload::CHANGELOG_ENV_VAR;
use crate::error::ConfigError;
use crate::github::event::{EVENT_PATH_ENV_VAR, PullRequestEvent};
use crate::github::resolve_token;

/// Base branch used when neither the event nor an override names one.
pub const DEFAULT_BASE_BRANCH: &str = "master";

/// Remote that pull request and branch refs are fetched from.
pub const DEFAULT_REMOTE: &str = "origin";

/// Comment target used with a pre-computed changelog payload.
pub const URL_ENV_VAR: &str = "URL";

/// Login greeted when a pre-computed changelog payload is used.
pub const USER_ENV_VAR: &str = "USER";

/// Placeholder pull request number when a changelog payload replaces collection.
const PAYLOAD_PR_NUMBER: u64 = 0;

/// Explicit values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub event_path: Option<PathBuf>,
    pub pr_number: Option<u64>,
    pub base_branch: Option<String>,
    pub comments_url: Option<String>,
    pub user: Option<String>,
    pub remote: Option<String>,
    pub repo_dir: Option<PathBuf>,
    pub no_fetch: bool,
    pub dry_run: bool,
}

/// Everything a run needs, immutable once built.
#[derive(Clone)]
pub struct Config {
    /// Token for the comments API. Always present unless `dry_run`.
    pub token: Option<String>,
    /// Target of the comment POST. Always present unless `dry_run`.
    pub comments_url: Option<String>,
    /// Login of the pull request author, greeted in the comment.
    pub user: String,
    pub range: PullRequestRange,
    /// Working copy the git collectors run in (current directory when unset).
    pub repo_dir: Option<PathBuf>,
    /// Fetch refs from the remote before collecting commits.
    pub fetch: bool,
    /// Render only; never publish.
    pub dry_run: bool,
    /// Pre-computed `{"body": ...}` changelog replacing git collection.
    pub changelog_payload: Option<String>,
    pub render: RenderOptions,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("comments_url", &self.comments_url)
            .field("user", &self.user)
            .field("range", &self.range)
            .field("repo_dir", &self.repo_dir)
            .field("fetch", &self.fetch)
            .field("dry_run", &self.dry_run)
            .field("changelog_payload", &self.changelog_payload.is_some())
            .field("render", &self.render)
            .finish()
    }
}

impl Config {
    /// Resolve the configuration from overrides and the environment.
    ///
    /// A missing token is reported before the event payload is even read.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let token = resolve_token(overrides.token.as_deref());
        if token.is_none() && !overrides.dry_run {
            return Err(ConfigError::MissingToken);
        }

        let event_path = overrides
            .event_path
            .clone()
            .or_else(|| non_empty_env(EVENT_PATH_ENV_VAR).map(PathBuf::from));

        let event = match event_path {
            Some(path) => {
                debug!("reading event payload from {}", path.display());
                Some(PullRequestEvent::read(&path)?.pull_request)
            }
            None => None,
        };

        // A pre-computed changelog needs no range, so the pull request
        // number is optional and the comment target may come from `URL`.
        let changelog_payload = non_empty_env(CHANGELOG_ENV_VAR);
        let payload_mode = changelog_payload.is_some();

        let number = match overrides.pr_number.or(event.as_ref().map(|pr| pr.number)) {
            Some(number) => number,
            None if payload_mode => PAYLOAD_PR_NUMBER,
            None => return Err(ConfigError::MissingField("number")),
        };

        let comments_url = overrides
            .comments_url
            .or_else(|| event.as_ref().map(|pr| pr.comments_url.clone()))
            .or_else(|| payload_mode.then(|| non_empty_env(URL_ENV_VAR)).flatten());
        if comments_url.is_none() && !overrides.dry_run {
            return Err(ConfigError::MissingField("comments_url"));
        }

        let user = overrides
            .user
            .or_else(|| event.as_ref().map(|pr| pr.user.login.clone()))
            .or_else(|| payload_mode.then(|| non_empty_env(USER_ENV_VAR)).flatten())
            .ok_or(ConfigError::MissingField("user login"))?;

        let base_branch = overrides
            .base_branch
            .or_else(|| {
                event
                    .as_ref()
                    .and_then(|pr| pr.base.as_ref())
                    .map(|base| base.ref_name.clone())
            })
            .unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string());

        let remote = overrides
            .remote
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string());

        Ok(Self {
            token,
            comments_url,
            user,
            range: PullRequestRange::new(remote, number, base_branch),
            repo_dir: overrides.repo_dir,
            fetch: !overrides.no_fetch,
            dry_run: overrides.dry_run,
            changelog_payload,
            render: RenderOptions::default(),
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
