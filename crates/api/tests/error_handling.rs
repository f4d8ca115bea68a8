//! Tests for `AppError` / `ProxyError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use focusapp_api::error::{AppError, ProxyError};
use focusapp_core::error::CoreError;
use focusapp_upstream::FetchError;

/// Helper: convert an error into its status code and parsed JSON body.
async fn to_response(err: impl IntoResponse) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn unknown_role_returns_400() {
    let (status, json) = to_response(AppError::Core(CoreError::UnknownRole("x".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Unknown role: x");
}

#[tokio::test]
async fn proxy_upstream_status_is_passed_through() {
    let err = ProxyError(FetchError::Upstream {
        status: 502,
        body: "bad gateway detail".into(),
    });

    let (status, json) = to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json, serde_json::json!({ "error": "GitHub API error" }));
}

#[tokio::test]
async fn proxy_malformed_body_is_generic_500() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();

    let (status, json) = to_response(ProxyError::from(FetchError::Malformed(json_err))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Internal server error" }));
}
