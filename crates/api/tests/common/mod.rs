#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use focusapp_api::config::ServerConfig;
use focusapp_api::router::build_app_router;
use focusapp_api::state::AppState;

pub const LATEST_PATH: &str = "/repos/mhommet/FocusAPP/releases/latest";

/// Build a test `ServerConfig` pointing the GitHub client at `api_base`.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default).
pub fn test_config(api_base: &str) -> ServerConfig {
    ServerConfig::from_lookup(|name| match name {
        "HOST" => Some("127.0.0.1".into()),
        "PORT" => Some("0".into()),
        "GITHUB_API_URL" => Some(api_base.to_string()),
        "GITHUB_TOKEN" => Some("test-token".into()),
        "UPSTREAM_TIMEOUT_SECS" => Some("5".into()),
        _ => None,
    })
    .unwrap()
}

/// Build the full application router with all middleware layers, exactly as
/// the binary does.
pub fn build_test_app(config: ServerConfig) -> Router {
    build_app_router(AppState::from_config(config).unwrap())
}

/// Serve `router` on an ephemeral local port and return its base URL.
///
/// Used as a stand-in for GitHub and the tierlist feed.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
