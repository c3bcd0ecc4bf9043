//! Repository for the `user_activity_days` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use sattva_core::streak;
use sattva_core::types::DbId;

/// Provides operations for a user's activity-day history.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Mark a day as active for a user.
    ///
    /// Idempotent: marking the same day twice is a no-op. Returns `true`
    /// if a new row was created.
    pub async fn mark_day(
        pool: &PgPool,
        user_id: DbId,
        date: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO user_activity_days (user_id, activity_on) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_user_activity_days_user_day DO NOTHING",
        )
        .bind(user_id)
        .bind(date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load the user's full activity history, ascending.
    pub async fn all_dates(pool: &PgPool, user_id: DbId) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT activity_on FROM user_activity_days \
             WHERE user_id = $1 \
             ORDER BY activity_on",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Of the given days, return those on which the user was active.
    pub async fn active_among(
        pool: &PgPool,
        user_id: DbId,
        dates: &[NaiveDate],
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT activity_on FROM user_activity_days \
             WHERE user_id = $1 AND activity_on = ANY($2) \
             ORDER BY activity_on",
        )
        .bind(user_id)
        .bind(dates)
        .fetch_all(pool)
        .await
    }

    /// Active days within a calendar month.
    pub async fn month_dates(
        pool: &PgPool,
        user_id: DbId,
        year: i32,
        month: u32,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT activity_on FROM user_activity_days \
             WHERE user_id = $1 \
               AND activity_on >= make_date($2, $3, 1) \
               AND activity_on < make_date($2, $3, 1) + INTERVAL '1 month' \
             ORDER BY activity_on",
        )
        .bind(user_id)
        .bind(year)
        .bind(month as i32)
        .fetch_all(pool)
        .await
    }

    /// The user's earliest recorded activity day, if any.
    pub async fn earliest_date(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT MIN(activity_on) FROM user_activity_days WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Current consecutive-day streak ending at (or the day before) `today`.
    ///
    /// Gap semantics live in [`sattva_core::streak::current_streak`]:
    /// yesterday's activity keeps the streak alive until the end of today,
    /// any fully missed day resets it.
    pub async fn current_streak(
        pool: &PgPool,
        user_id: DbId,
        today: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let dates = Self::all_dates(pool, user_id).await?;
        Ok(streak::current_streak(&dates, today))
    }
}
