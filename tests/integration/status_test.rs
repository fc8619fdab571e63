//! Integration tests for the custom status route.

use std::sync::atomic::Ordering;

use axum::http::StatusCode;

use plugin_custom_status::{CustomStatus, USER_PROPS_KEY_CUSTOM_STATUS, codec};

use crate::helpers::TestApp;

const PATH: &str = "/api/v1/custom-status-change";

#[tokio::test]
async fn test_status_change_persists_encoded_status() {
    let app = TestApp::new();

    let response = app
        .request("PUT", PATH, Some(r#"{"emoji":"😀","text":"Busy"}"#), Some("u1"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.is_empty());

    assert_eq!(app.store.get_calls.load(Ordering::SeqCst), 1);
    let updates = app.store.updates.lock().expect("lock");
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].prop(USER_PROPS_KEY_CUSTOM_STATUS),
        Some(r#"{"emoji":"😀","text":"Busy"}"#)
    );
}

#[tokio::test]
async fn test_status_change_keeps_other_props() {
    let app = TestApp::new();

    let response = app
        .request("PUT", PATH, Some(r#"{"emoji":"🎉"}"#), Some("u1"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let stored = app.stored("u1");
    let props = stored.props.expect("props");
    assert_eq!(props.len(), 2);
    assert_eq!(props.get("theme").map(String::as_str), Some("dark"));

    let status = codec::decode(&props[USER_PROPS_KEY_CUSTOM_STATUS]).expect("decode");
    assert_eq!(status, CustomStatus::new("🎉", ""));
}

#[tokio::test]
async fn test_status_change_initializes_missing_props() {
    let app = TestApp::new();

    let response = app
        .request("PUT", PATH, Some(r#"{"text":"Out sick"}"#), Some("u2"))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let stored = app.stored("u2");
    let props = stored.props.expect("props");
    assert_eq!(props.len(), 1);
    assert!(props.contains_key(USER_PROPS_KEY_CUSTOM_STATUS));
    assert!(stored.notify_props.is_some_and(|p| p.is_empty()));
}

#[tokio::test]
async fn test_empty_object_is_bad_request_without_store_calls() {
    let app = TestApp::new();

    let response = app.request("PUT", PATH, Some("{}"), Some("u1")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["error"], "VALIDATION_ERROR");
    assert_eq!(app.store.total_calls(), 0);
}

#[tokio::test]
async fn test_empty_strings_are_bad_request() {
    let app = TestApp::new();

    let response = app
        .request("PUT", PATH, Some(r#"{"emoji":"","text":""}"#), Some("u1"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.total_calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app.request("PUT", PATH, Some("{not json"), Some("u1")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["message"], "Invalid request body");
    assert_eq!(app.store.total_calls(), 0);
}

#[tokio::test]
async fn test_missing_body_is_bad_request() {
    let app = TestApp::new();

    let response = app.request("PUT", PATH, None, Some("u1")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.total_calls(), 0);
}

#[tokio::test]
async fn test_lookup_failure_is_server_error_and_skips_update() {
    let app = TestApp::new();
    app.store.fail_get.store(true, Ordering::SeqCst);

    let response = app
        .request("PUT", PATH, Some(r#"{"emoji":"😀","text":"Busy"}"#), Some("u1"))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json["error"], "UPSTREAM_ERROR");
    assert!(!response.text.contains("unavailable"));
    assert_eq!(app.store.update_calls(), 0);
}

#[tokio::test]
async fn test_null_emoji_is_accepted() {
    let app = TestApp::new();

    let response = app
        .request("PUT", PATH, Some(r#"{"emoji":null,"text":"Busy"}"#), Some("u1"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        app.stored("u1").prop(USER_PROPS_KEY_CUSTOM_STATUS),
        Some(r#"{"emoji":"","text":"Busy"}"#)
    );
}

#[tokio::test]
async fn test_padded_identity_is_not_rewritten() {
    let app = TestApp::new();

    let response = app
        .request(
            "PUT",
            "/api/v1/custom-status-change?user_id=%20u1%20",
            Some(r#"{"text":"Busy"}"#),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.get_calls.load(Ordering::SeqCst), 1);
    assert_eq!(app.store.update_calls(), 0);
    assert_eq!(app.stored("u1").prop(USER_PROPS_KEY_CUSTOM_STATUS), None);
}

#[tokio::test]
async fn test_unknown_user_is_server_error() {
    let app = TestApp::new();

    let response = app
        .request("PUT", PATH, Some(r#"{"text":"Busy"}"#), Some("ghost"))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.update_calls(), 0);
}

#[tokio::test]
async fn test_update_failure_is_server_error_and_store_unchanged() {
    let app = TestApp::new();
    app.store.fail_update.store(true, Ordering::SeqCst);
    let before = app.stored("u1");

    let response = app
        .request("PUT", PATH, Some(r#"{"text":"Busy"}"#), Some("u1"))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.update_calls(), 1);
    assert_eq!(app.stored("u1"), before);
}

#[tokio::test]
async fn test_get_on_status_route_is_not_handled() {
    let app = TestApp::new();

    let response = app.request("GET", PATH, None, Some("u1")).await;

    assert_ne!(response.status, StatusCode::OK);
    assert_eq!(app.store.total_calls(), 0);
}
