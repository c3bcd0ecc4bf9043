//! Handlers for administrator badge grants.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use sattva_core::types::DbId;
use sattva_db::models::badge::GrantBadge;

use crate::error::AppResult;
use crate::handlers::require_user;
use crate::response::DataResponse;
use crate::services;
use crate::state::AppState;

/// POST /api/v1/admin/users/{id}/badges
///
/// Grant an admin-only badge (`ambassador` or `hall_of_fame`) directly,
/// bypassing threshold and pattern logic. Granting a badge the user
/// already holds is an idempotent no-op signalled in the payload, not an
/// error.
pub async fn grant_badge(
    Path(user_id): Path<DbId>,
    State(state): State<AppState>,
    Json(input): Json<GrantBadge>,
) -> AppResult<impl IntoResponse> {
    require_user(&state.pool, user_id).await?;

    let outcome =
        services::badges::award_admin_badge(&state.pool, user_id, &input.badge_key).await?;

    Ok(Json(DataResponse { data: outcome }))
}
