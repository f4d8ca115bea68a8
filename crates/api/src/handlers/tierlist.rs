use axum::extract::{Path, State};
use axum::Json;
use focusapp_core::tierlist::{Role, TierlistOutcome};
use focusapp_upstream::tierlist::tierlist_for;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/tierlist/{role}
///
/// Serves sample data (`"source": "sample"`) when the feed is unavailable.
pub async fn get_tierlist(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> AppResult<Json<TierlistOutcome>> {
    let role: Role = role.parse()?;

    let outcome = tierlist_for(
        state.tierlist.as_ref(),
        role,
        &state.config.icon_cdn_version,
    )
    .await;

    Ok(Json(outcome))
}
