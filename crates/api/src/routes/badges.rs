//! Route definitions for badge resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::badges;
use crate::state::AppState;

/// Routes for the badge catalog, holdings, and evaluation.
///
/// ```text
/// GET  /badges/catalog                -> get_catalog
/// GET  /users/{id}/badges             -> get_badges
/// POST /users/{id}/badges/evaluate    -> evaluate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/badges/catalog", get(badges::get_catalog))
        .route("/users/{id}/badges", get(badges::get_badges))
        .route("/users/{id}/badges/evaluate", post(badges::evaluate))
}
