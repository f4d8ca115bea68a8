pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /release                  GitHub latest release, proxied verbatim
/// /download                 resolved installer or unavailable outcome
/// /tierlist/{role}          tierlist widget data (live or sample)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/release", get(handlers::release::latest_release))
        .route("/download", get(handlers::release::download))
        .route("/tierlist/{role}", get(handlers::tierlist::get_tierlist))
}
