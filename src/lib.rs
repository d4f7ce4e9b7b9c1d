//! pr-changelog - posts a changelog of a pull request's commits as a PR comment.
//!
//! # Overview
//!
//! pr-changelog collects the commit subjects of a pull request, classifies each
//! as a major, minor or patch change following gitmoji and Conventional Commits,
//! groups them by leading token and posts the rendered HTML as a comment.

pub mod changelog;
pub mod collect;
pub mod config;
pub mod error;
pub mod github;
pub mod pipeline;

// Re-export commonly used types
pub use changelog::{ChangeGroup, Changelog, RenderOptions, SeverityTier, classify};
pub use collect::{CommitSource, PullRequestRange};
pub use config::{Config, ConfigOverrides};
pub use error::{CollectError, ConfigError, PipelineError, PublishError};
pub use github::{CommentPublisher, GitHubCommentPublisher, PublishedComment};
pub use pipeline::{RunOutcome, run};
