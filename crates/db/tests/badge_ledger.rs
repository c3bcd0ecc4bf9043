//! Integration tests for the badge ledger repository.
//!
//! Exercises the at-most-once award guarantee (unique index), the
//! notified-flag lifecycle, and holdings queries against a real database.

use sqlx::PgPool;

use sattva_core::badges::{BADGE_AMBASSADOR, BADGE_DAY_ZERO, BADGE_RELENTLESS, BADGE_SPARK};
use sattva_db::models::user::CreateUser;
use sattva_db::repositories::{BadgeRepo, UserRepo};

async fn new_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "./migrations")]
async fn award_creates_a_row_once(pool: PgPool) {
    let user_id = new_user(&pool, "ada").await;

    let first = BadgeRepo::award(&pool, user_id, BADGE_SPARK, None)
        .await
        .unwrap();
    assert!(first.is_some());
    let row = first.unwrap();
    assert_eq!(row.badge_key, BADGE_SPARK);
    assert!(!row.is_notified);
    assert!(row.notified_at.is_none());

    // Second award of the same badge is a silent no-op.
    let second = BadgeRepo::award(&pool, user_id, BADGE_SPARK, None)
        .await
        .unwrap();
    assert!(second.is_none());

    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM user_badges WHERE user_id = $1 AND badge_key = $2")
            .bind(user_id)
            .bind(BADGE_SPARK)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn award_stores_metadata(pool: PgPool) {
    let user_id = new_user(&pool, "grace").await;

    let metadata = serde_json::json!({ "cyclesCompleted": 3 });
    let row = BadgeRepo::award(&pool, user_id, BADGE_RELENTLESS, Some(&metadata))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.metadata, Some(metadata));
}

#[sqlx::test(migrations = "./migrations")]
async fn notified_flag_lifecycle(pool: PgPool) {
    let user_id = new_user(&pool, "edsger").await;

    BadgeRepo::award(&pool, user_id, BADGE_DAY_ZERO, None)
        .await
        .unwrap();
    BadgeRepo::award(&pool, user_id, BADGE_SPARK, None)
        .await
        .unwrap();

    let unnotified = BadgeRepo::unnotified_keys(&pool, user_id).await.unwrap();
    assert_eq!(unnotified, vec![BADGE_DAY_ZERO, BADGE_SPARK]);

    let transitioned = BadgeRepo::mark_notified(&pool, user_id, &unnotified)
        .await
        .unwrap();
    assert_eq!(transitioned, 2);

    // Nothing left to surface, and re-marking touches no rows.
    assert!(BadgeRepo::unnotified_keys(&pool, user_id)
        .await
        .unwrap()
        .is_empty());
    let again = BadgeRepo::mark_notified(&pool, user_id, &unnotified)
        .await
        .unwrap();
    assert_eq!(again, 0);

    // The full held set is unaffected by the notified flag.
    let keys = BadgeRepo::badge_keys(&pool, user_id).await.unwrap();
    assert_eq!(keys, vec![BADGE_DAY_ZERO, BADGE_SPARK]);
}

#[sqlx::test(migrations = "./migrations")]
async fn has_badge_reflects_holdings(pool: PgPool) {
    let user_id = new_user(&pool, "barbara").await;

    assert!(!BadgeRepo::has_badge(&pool, user_id, BADGE_AMBASSADOR)
        .await
        .unwrap());

    BadgeRepo::award(&pool, user_id, BADGE_AMBASSADOR, None)
        .await
        .unwrap();

    assert!(BadgeRepo::has_badge(&pool, user_id, BADGE_AMBASSADOR)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn awards_are_isolated_per_user(pool: PgPool) {
    let first = new_user(&pool, "alan").await;
    let second = new_user(&pool, "john").await;

    BadgeRepo::award(&pool, first, BADGE_SPARK, None)
        .await
        .unwrap();

    assert!(BadgeRepo::badge_keys(&pool, second).await.unwrap().is_empty());
    // Same badge key is still awardable to another user.
    assert!(BadgeRepo::award(&pool, second, BADGE_SPARK, None)
        .await
        .unwrap()
        .is_some());
}
