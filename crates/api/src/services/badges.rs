//! Badge evaluation and admin grants.
//!
//! The evaluator is invoked synchronously after a qualifying user action.
//! It is idempotent: the badge ledger is the source of truth for "already
//! awarded" checks, individual awards are guarded by a unique index, and
//! re-running with the same history awards nothing new.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::PgPool;

use sattva_core::badges::{self, PlannedAward};
use sattva_core::error::CoreError;
use sattva_core::streak;
use sattva_core::types::DbId;
use sattva_db::repositories::{ActivityRepo, BadgeRepo};

use crate::error::AppResult;

/// Evaluate a user's badges as of `today`.
///
/// Awards every badge the user newly qualifies for, then surfaces the
/// full unnotified set (new awards plus any admin grants made since the
/// last evaluation) and marks it notified in one batch. Returns the keys
/// the caller should present as new achievements.
///
/// A failure mid-way leaves already-persisted awards in place (they are
/// individually idempotent); the notified-flag update is simply retried
/// on the next evaluation.
pub async fn evaluate_badges(
    pool: &PgPool,
    user_id: DbId,
    today: NaiveDate,
) -> Result<Vec<String>, sqlx::Error> {
    let earned: std::collections::HashSet<String> = BadgeRepo::badge_keys(pool, user_id)
        .await?
        .into_iter()
        .collect();

    let current_streak = ActivityRepo::current_streak(pool, user_id, today).await?;

    let history = ActivityRepo::all_dates(pool, user_id).await?;
    let analysis = streak::analyze_history(&history);

    let planned = badges::plan_awards(&earned, current_streak, &analysis);
    for PlannedAward { key, metadata } in &planned {
        match BadgeRepo::award(pool, user_id, key, metadata.as_ref()).await? {
            Some(_) => {
                tracing::info!(user_id, badge_key = %key, current_streak, "Badge awarded");
            }
            // A concurrent evaluation won the insert; nothing to do.
            None => {
                tracing::debug!(user_id, badge_key = %key, "Badge already held, skipping");
            }
        }
    }

    let unnotified = BadgeRepo::unnotified_keys(pool, user_id).await?;
    if !unnotified.is_empty() {
        BadgeRepo::mark_notified(pool, user_id, &unnotified).await?;
    }

    Ok(unnotified)
}

/// Result of an admin badge grant.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAwardOutcome {
    pub success: bool,
    pub already_earned: bool,
}

/// Grant an admin-only badge (`ambassador` or `hall_of_fame`) directly.
///
/// Idempotent no-op when the badge is already held. The notified flag is
/// left untouched; the next regular evaluation surfaces the grant to the
/// user.
pub async fn award_admin_badge(
    pool: &PgPool,
    user_id: DbId,
    badge_key: &str,
) -> AppResult<AdminAwardOutcome> {
    if !badges::is_admin_badge(badge_key) {
        return Err(CoreError::Validation(format!(
            "'{badge_key}' is not an admin-grantable badge"
        ))
        .into());
    }

    if BadgeRepo::has_badge(pool, user_id, badge_key).await? {
        return Ok(AdminAwardOutcome {
            success: false,
            already_earned: true,
        });
    }

    match BadgeRepo::award(pool, user_id, badge_key, None).await? {
        Some(_) => {
            tracing::info!(user_id, badge_key, "Admin badge granted");
            Ok(AdminAwardOutcome {
                success: true,
                already_earned: false,
            })
        }
        // Lost a race against another grant of the same badge.
        None => Ok(AdminAwardOutcome {
            success: false,
            already_earned: true,
        }),
    }
}
