//! Integration tests for comment posting against a mocked GitHub API.

use pr_changelog::error::PublishError;
use pr_changelog::github::{CommentPublisher, GitHubCommentPublisher, PublishedComment};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMMENTS_PATH: &str = "/repos/owner/repo/issues/12/comments";

fn publisher(server: &MockServer) -> GitHubCommentPublisher {
    GitHubCommentPublisher::new(format!("{}{}", server.uri(), COMMENTS_PATH), "secret-token")
        .expect("Failed to build publisher")
}

#[tokio::test]
async fn test_posts_body_with_token_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMMENTS_PATH))
        .and(header("authorization", "token secret-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "body": "<h1>Changelog</h1>" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 99,
            "html_url": "https://github.com/owner/repo/pull/12#issuecomment-99",
            "body": "<h1>Changelog</h1>"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let comment = publisher(&server)
        .publish("<h1>Changelog</h1>")
        .await
        .expect("Expected success");

    assert_eq!(
        comment,
        PublishedComment {
            id: Some(99),
            html_url: Some("https://github.com/owner/repo/pull/12#issuecomment-99".to_string()),
        }
    );
}

#[tokio::test]
async fn test_non_json_success_response_is_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMMENTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let comment = publisher(&server).publish("body").await.expect("Expected success");

    assert_eq!(comment, PublishedComment::default());
}

#[tokio::test]
async fn test_forbidden_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMMENTS_PATH))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "message": "Resource not accessible by integration" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = publisher(&server).publish("body").await;

    match result {
        Err(PublishError::Status { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("Resource not accessible"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(COMMENTS_PATH))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let result = publisher(&server).publish("body").await;

    assert!(matches!(result, Err(PublishError::Status { status: 502, .. })));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_request_error() {
    let publisher = GitHubCommentPublisher::new("http://127.0.0.1:1/comments", "secret-token")
        .expect("Failed to build publisher");

    let result = publisher.publish("body").await;

    assert!(matches!(result, Err(PublishError::Request(_))));
}
