//! Repository for the `user_badges` ledger.

use sqlx::PgPool;

use sattva_core::types::DbId;

use crate::models::badge::UserBadge;

/// Column list for `user_badges` queries.
const COLUMNS: &str = "id, user_id, badge_key, metadata, is_notified, notified_at, awarded_at";

/// Provides operations for the badge ledger.
///
/// Rows are never deleted; `is_notified` only transitions false -> true.
pub struct BadgeRepo;

impl BadgeRepo {
    /// All badge keys currently held by the user.
    pub async fn badge_keys(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT badge_key FROM user_badges \
             WHERE user_id = $1 \
             ORDER BY awarded_at, id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// All badge rows held by the user, oldest award first.
    pub async fn all_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<UserBadge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_badges \
             WHERE user_id = $1 \
             ORDER BY awarded_at, id"
        );
        sqlx::query_as::<_, UserBadge>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Whether the user holds the given badge.
    pub async fn has_badge(
        pool: &PgPool,
        user_id: DbId,
        badge_key: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM user_badges WHERE user_id = $1 AND badge_key = $2)",
        )
        .bind(user_id)
        .bind(badge_key)
        .fetch_one(pool)
        .await
    }

    /// Award a badge to a user.
    ///
    /// The `uq_user_badges_user_key` unique index is the at-most-once
    /// guard: if the badge is already held (including by a concurrent
    /// evaluation that won the race) the insert is a no-op and `None` is
    /// returned.
    pub async fn award(
        pool: &PgPool,
        user_id: DbId,
        badge_key: &str,
        metadata: Option<&serde_json::Value>,
    ) -> Result<Option<UserBadge>, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_badges (user_id, badge_key, metadata) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_user_badges_user_key DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserBadge>(&query)
            .bind(user_id)
            .bind(badge_key)
            .bind(metadata)
            .fetch_optional(pool)
            .await
    }

    /// Badge keys awarded to the user but not yet surfaced to the client.
    pub async fn unnotified_keys(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT badge_key FROM user_badges \
             WHERE user_id = $1 AND is_notified = false \
             ORDER BY awarded_at, id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Mark the given badges as notified in one batch.
    ///
    /// Returns the number of rows that transitioned. Already-notified rows
    /// are left untouched.
    pub async fn mark_notified(
        pool: &PgPool,
        user_id: DbId,
        badge_keys: &[String],
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_badges \
             SET is_notified = true, notified_at = NOW() \
             WHERE user_id = $1 AND badge_key = ANY($2) AND is_notified = false",
        )
        .bind(user_id)
        .bind(badge_keys)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
