//! Integration tests for the identity gate.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_every_route_requires_identity() {
    let app = TestApp::new();

    let routes = [
        ("GET", "/api/v1/hello", None),
        (
            "PUT",
            "/api/v1/custom-status-change",
            Some(r#"{"emoji":"😀","text":"Busy"}"#),
        ),
    ];

    for (method, path, body) in routes {
        let response = app.request(method, path, body, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
        assert_eq!(response.json["error"], "UNAUTHORIZED");
    }

    assert_eq!(app.store.total_calls(), 0);
}

#[tokio::test]
async fn test_blank_identity_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/v1/custom-status-change",
            Some(r#"{"text":"Busy"}"#),
            Some("   "),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.total_calls(), 0);
}

#[tokio::test]
async fn test_identity_from_query_parameter() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/v1/hello?user_id=u1", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_identity_from_host_query_parameter() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/v1/hello?Mattermost-User-ID=u1", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Hello, world!");
}

#[tokio::test]
async fn test_status_change_with_host_query_identity() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/v1/custom-status-change?Mattermost-User-ID=u2",
            Some(r#"{"emoji":"🎉"}"#),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.store.update_calls(), 1);
    assert!(app.stored("u2").prop("customStatus").is_some());
}

#[tokio::test]
async fn test_invalid_body_without_identity_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .request("PUT", "/api/v1/custom-status-change", Some("{not json"), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/goodbye", None, Some("u1")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
