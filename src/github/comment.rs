//! Posting the changelog as a pull request comment.
//!
//! Pull request comments are issue comments on GitHub, so the target is the
//! pull request's `comments_url`.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::PublishError;

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Maximum error body length kept in [`PublishError::Status`].
const MAX_ERROR_BODY_LENGTH: usize = 1024;

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

/// What we keep of the API response. Used for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PublishedComment {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Destination for the rendered changelog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentPublisher: Send + Sync {
    async fn publish(&self, body: &str) -> Result<PublishedComment, PublishError>;
}

/// Posts comments to a GitHub `comments_url` with `token` authorization.
#[derive(Debug, Clone)]
pub struct GitHubCommentPublisher {
    client: Client,
    url: String,
    token: String,
}

impl GitHubCommentPublisher {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Result<Self, PublishError> {
        let client = Client::builder()
            .build()
            .map_err(PublishError::ClientBuild)?;

        Ok(Self::with_client(client, url, token))
    }

    /// Use a pre-configured client.
    pub fn with_client(client: Client, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl CommentPublisher for GitHubCommentPublisher {
    async fn publish(&self, body: &str) -> Result<PublishedComment, PublishError> {
        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .header(USER_AGENT, concat!("pr-changelog/", env!("CARGO_PKG_VERSION")))
            .json(&CommentRequest { body })
            .send()
            .await
            .map_err(PublishError::Request)?;

        let status = response.status();
        let text = response.text().await.map_err(PublishError::Request)?;

        if !status.is_success() {
            return Err(PublishError::Status {
                status: status.as_u16(),
                body: truncate(&text, MAX_ERROR_BODY_LENGTH),
            });
        }

        let comment: PublishedComment = serde_json::from_str(&text).unwrap_or_default();
        info!(
            "Changelog successfully posted{}",
            comment
                .html_url
                .as_deref()
                .map(|url| format!(": {url}"))
                .unwrap_or_default()
        );

        Ok(comment)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated]", &text[..end])
}
