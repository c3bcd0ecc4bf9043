//! Route definitions for the `/admin` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /users/{id}/badges    -> grant_badge
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/users/{id}/badges", post(admin::grant_badge))
}
