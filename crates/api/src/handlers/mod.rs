//! HTTP handler functions, grouped by resource.

pub mod admin;
pub mod badges;
pub mod streak;

use sqlx::PgPool;

use sattva_core::error::CoreError;
use sattva_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Look up a user by id, mapping absence to a 404.
pub(crate) async fn require_user(pool: &PgPool, user_id: DbId) -> AppResult<()> {
    sattva_db::repositories::UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    Ok(())
}
