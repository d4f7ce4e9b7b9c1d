//! GitHub integration: token lookup, event payload and comment posting.

pub mod auth;
pub mod comment;
pub mod event;

pub use auth::resolve_token;
pub use comment::{CommentPublisher, GitHubCommentPublisher, PublishedComment};
pub use event::PullRequestEvent;
