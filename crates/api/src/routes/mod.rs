pub mod admin;
pub mod badges;
pub mod health;
pub mod streak;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /badges/catalog                          badge catalog (GET)
/// /users/{id}/badges                       held badges (GET)
/// /users/{id}/badges/evaluate              run evaluator (POST)
///
/// /users/{id}/streak/mark-today            record activity day (POST)
/// /users/{id}/streak/last-7-days           7-day window (GET)
/// /users/{id}/consistency/month            monthly calendar (GET)
/// /users/{id}/consistency/range            history span + streak (GET)
///
/// /admin/users/{id}/badges                 admin badge grant (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(badges::router())
        .merge(streak::router())
        .nest("/admin", admin::router())
}
