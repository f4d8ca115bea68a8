use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use focusapp_core::error::CoreError;
use focusapp_upstream::FetchError;
use serde_json::json;

/// Body message for upstream failures on the release proxy.
pub const PROXY_UPSTREAM_MESSAGE: &str = "GitHub API error";

/// Body message for every other release proxy failure.
pub const PROXY_INTERNAL_MESSAGE: &str = "Internal server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors raised while validating request
/// input. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `focusapp_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Core errors only reach handlers through path and query parsing.
        let (status, code, message) = match &self {
            AppError::Core(core) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", core.to_string()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Failure of the `/api/release` proxy.
///
/// The proxy fronts a credentialed request, so its error bodies are fixed
/// strings: upstream status codes are passed through, everything else is a
/// bare 500.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ProxyError(#[from] pub FetchError);

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            FetchError::Upstream { status, body } => {
                tracing::warn!(status, body = %body, "GitHub API returned an error");
                (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    PROXY_UPSTREAM_MESSAGE,
                )
            }
            other => {
                tracing::error!(error = %other, "Error fetching release");
                (StatusCode::INTERNAL_SERVER_ERROR, PROXY_INTERNAL_MESSAGE)
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
