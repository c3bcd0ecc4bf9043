//! Handlers for badge holdings, the badge catalog, and evaluation.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use sattva_core::badges::{BadgeSpec, BADGE_CATALOG};
use sattva_core::streak::parse_activity_date;
use sattva_core::types::DbId;
use sattva_db::repositories::BadgeRepo;

use crate::error::AppResult;
use crate::handlers::require_user;
use crate::response::DataResponse;
use crate::services;
use crate::state::AppState;

/// DTO for a badge evaluation request. The date is optional; the server's
/// UTC date is used when omitted.
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub date: Option<String>,
}

/// Payload returned by an evaluation pass.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub new_badges: Vec<String>,
    pub has_new_badges: bool,
}

/// GET /api/v1/badges/catalog
///
/// The full declarative badge catalog.
pub async fn get_catalog() -> Json<DataResponse<&'static [BadgeSpec]>> {
    Json(DataResponse {
        data: BADGE_CATALOG,
    })
}

/// GET /api/v1/users/{id}/badges
///
/// All badges held by the user, oldest award first. Read-only: the
/// notified flag is not touched.
pub async fn get_badges(
    Path(user_id): Path<DbId>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    require_user(&state.pool, user_id).await?;

    let badges = BadgeRepo::all_for_user(&state.pool, user_id).await?;

    Ok(Json(DataResponse { data: badges }))
}

/// POST /api/v1/users/{id}/badges/evaluate
///
/// Run the streak/badge evaluator for the user and return the badge keys
/// to surface as new achievements (newly awarded plus previously
/// unnotified admin grants).
pub async fn evaluate(
    Path(user_id): Path<DbId>,
    State(state): State<AppState>,
    body: Option<Json<EvaluateRequest>>,
) -> AppResult<impl IntoResponse> {
    require_user(&state.pool, user_id).await?;

    let today = match body.as_ref().and_then(|b| b.date.as_deref()) {
        Some(raw) => parse_activity_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };

    let new_badges = services::badges::evaluate_badges(&state.pool, user_id, today).await?;

    Ok(Json(DataResponse {
        data: EvaluateResponse {
            has_new_badges: !new_badges.is_empty(),
            new_badges,
        },
    }))
}
