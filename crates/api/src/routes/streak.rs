//! Route definitions for streak tracking and the consistency calendar.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::streak;
use crate::state::AppState;

/// Routes for activity marking and activity views.
///
/// ```text
/// POST /users/{id}/streak/mark-today     -> mark_today
/// GET  /users/{id}/streak/last-7-days    -> last_7_days
/// GET  /users/{id}/consistency/month     -> consistency_month
/// GET  /users/{id}/consistency/range     -> consistency_range
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/{id}/streak/mark-today", post(streak::mark_today))
        .route("/users/{id}/streak/last-7-days", get(streak::last_7_days))
        .route("/users/{id}/consistency/month", get(streak::consistency_month))
        .route("/users/{id}/consistency/range", get(streak::consistency_range))
}
