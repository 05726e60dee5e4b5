//! Integration tests for the pageauth HTTP client

#![cfg(feature = "client")]

use pageauth_http::{AuthClient, ClientError, LoginForm};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = AuthClient::builder()
        .base_url("http://localhost:8000/")
        .build()
        .unwrap();

    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(client.login_path(), "/api/auth/login");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = AuthClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_rejects_relative_login_path() {
    let result = AuthClient::builder()
        .base_url("http://localhost:8000")
        .login_path("api/auth/login")
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_rejects_bad_base_url() {
    let result = AuthClient::new("not a url");
    assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_login_posts_multipart_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"username\""))
        .and(body_string_contains("ann@example.com"))
        .and(body_string_contains("name=\"password\""))
        .and(body_string_contains("hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123",
            "refresh_token": "def456",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let reply = client
        .login(&LoginForm::credentials("ann@example.com", "hunter2"))
        .await
        .unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.body.access_token.as_deref(), Some("abc123"));
    assert_eq!(reply.body.refresh_token.as_deref(), Some("def456"));
}

#[tokio::test]
async fn test_login_decodes_rejection_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid password"})),
        )
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let reply = client
        .login(&LoginForm::credentials("ann@example.com", "wrong"))
        .await
        .unwrap();

    assert_eq!(reply.status, 401);
    assert!(!reply.is_success());
    assert!(reply.body.access_token.is_none());
    assert_eq!(reply.body.detail, Some(json!("Invalid password")));
}

#[tokio::test]
async fn test_login_non_json_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let err = client
        .login(&LoginForm::credentials("ann@example.com", "hunter2"))
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_login_accepts_any_json_document() {
    let cases = [
        (json!("str"), None),
        (json!([]), None),
        (json!({"access_token": 123}), Some("123")),
        (json!({"access_token": null}), None),
    ];

    for (body, expected) in cases {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = AuthClient::new(mock_server.uri()).unwrap();
        let reply = client
            .login(&LoginForm::credentials("ann@example.com", "hunter2"))
            .await
            .unwrap();

        assert_eq!(reply.body.access_token.as_deref(), expected, "body: {body}");
    }
}

#[tokio::test]
async fn test_login_custom_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "t"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthClient::builder()
        .base_url(mock_server.uri())
        .login_path("/auth/token")
        .build()
        .unwrap();

    let reply = client.login(&LoginForm::new()).await.unwrap();
    assert_eq!(reply.body.access_token.as_deref(), Some("t"));
}

#[tokio::test]
async fn test_fetch_page_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Dashboard</h1>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let page = client
        .fetch_page(&format!("{}/dashboard", mock_server.uri()), Some("abc123"))
        .await
        .unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.body, "<h1>Dashboard</h1>");
}

#[tokio::test]
async fn test_fetch_page_without_token_sends_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(header("authorization", "Bearer null"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let page = client
        .fetch_page(&format!("{}/dashboard", mock_server.uri()), None)
        .await
        .unwrap();

    assert_eq!(page.body, "ok");
}

#[tokio::test]
async fn test_fetch_page_returns_error_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("<p>Not enough permissions</p>"),
        )
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(mock_server.uri()).unwrap();
    let page = client
        .fetch_page(&format!("{}/admin", mock_server.uri()), Some("abc123"))
        .await
        .unwrap();

    assert_eq!(page.status, 403);
    assert_eq!(page.body, "<p>Not enough permissions</p>");
}

#[tokio::test]
async fn test_fetch_page_rejects_relative_url() {
    let client = AuthClient::new("http://localhost:8000").unwrap();
    let result = client.fetch_page("/dashboard", None).await;
    assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
}
