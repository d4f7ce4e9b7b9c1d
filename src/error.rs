//! Error types for pr-changelog modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing auth token: pass --token or set the INPUT_TOKEN, token or GITHUB_TOKEN environment variable"
    )]
    MissingToken,

    #[error("Failed to read event payload {path}: {source}")]
    ReadEventPayload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Event payload is not a valid pull request event: {0}")]
    InvalidEventPayload(#[source] serde_json::Error),

    #[error("Missing pull request {0}: not found in the event payload and no override given")]
    MissingField(&'static str),
}

/// Errors from commit range collection.
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("git not found on PATH")]
    GitNotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("`git {command}` exited with code {code}: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("`git {command}` wrote to stderr: {stderr}")]
    StderrOutput { command: String, stderr: String },

    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),

    #[error("Changelog payload is not valid JSON: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

/// Errors from posting the changelog comment.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Comment request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Comment endpoint responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Collect(#[from] CollectError),

    #[error(transparent)]
    Publish(#[from] PublishError),
}
