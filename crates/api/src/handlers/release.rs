//! Handlers for latest-release lookups.
//!
//! `/api/release` proxies the GitHub response for browser scripts that do
//! their own asset selection; `/api/download` returns the resolved outcome.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use focusapp_core::release::ReleaseOutcome;

use crate::error::ProxyError;
use crate::state::AppState;

/// GET /api/release
///
/// Upstream JSON is returned verbatim with status 200. Upstream error
/// statuses are passed through with a fixed error body.
pub async fn latest_release(State(state): State<AppState>) -> Result<Response, ProxyError> {
    let body = state.github.fetch_raw(&state.config.github_repo).await?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

/// GET /api/download
///
/// Always 200: lookup failures are reported in the body as `unavailable`.
pub async fn download(State(state): State<AppState>) -> Json<ReleaseOutcome> {
    let outcome = state.github.resolve_latest(&state.resolver).await;

    if let ReleaseOutcome::Available(summary) = &outcome {
        tracing::debug!(
            version = %summary.version,
            asset = %summary.asset_name,
            "Resolved latest installer"
        );
    }

    Json(outcome)
}
