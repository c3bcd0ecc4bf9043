//! Badge ledger entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sattva_core::types::{DbId, Timestamp};

/// A row from the `user_badges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBadge {
    pub id: DbId,
    pub user_id: DbId,
    pub badge_key: String,
    pub metadata: Option<serde_json::Value>,
    pub is_notified: bool,
    pub notified_at: Option<Timestamp>,
    pub awarded_at: Timestamp,
}

/// DTO for an admin badge grant.
#[derive(Debug, Deserialize)]
pub struct GrantBadge {
    pub badge_key: String,
}
