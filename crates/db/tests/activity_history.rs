//! Integration tests for the activity-day repository.

use chrono::NaiveDate;
use sqlx::PgPool;

use sattva_db::models::user::CreateUser;
use sattva_db::repositories::{ActivityRepo, UserRepo};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

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
async fn mark_day_is_idempotent(pool: PgPool) {
    let user_id = new_user(&pool, "ada").await;

    assert!(ActivityRepo::mark_day(&pool, user_id, d("2026-03-01"))
        .await
        .unwrap());
    // Same day again collapses to the existing row.
    assert!(!ActivityRepo::mark_day(&pool, user_id, d("2026-03-01"))
        .await
        .unwrap());

    let dates = ActivityRepo::all_dates(&pool, user_id).await.unwrap();
    assert_eq!(dates, vec![d("2026-03-01")]);
}

#[sqlx::test(migrations = "./migrations")]
async fn all_dates_are_ordered_ascending(pool: PgPool) {
    let user_id = new_user(&pool, "grace").await;

    for day in ["2026-03-03", "2026-03-01", "2026-03-02"] {
        ActivityRepo::mark_day(&pool, user_id, d(day)).await.unwrap();
    }

    let dates = ActivityRepo::all_dates(&pool, user_id).await.unwrap();
    assert_eq!(dates, vec![d("2026-03-01"), d("2026-03-02"), d("2026-03-03")]);
}

#[sqlx::test(migrations = "./migrations")]
async fn active_among_filters_to_given_window(pool: PgPool) {
    let user_id = new_user(&pool, "edsger").await;

    ActivityRepo::mark_day(&pool, user_id, d("2026-03-01")).await.unwrap();
    ActivityRepo::mark_day(&pool, user_id, d("2026-03-05")).await.unwrap();
    ActivityRepo::mark_day(&pool, user_id, d("2026-04-01")).await.unwrap();

    let window = vec![d("2026-03-01"), d("2026-03-02"), d("2026-03-05")];
    let active = ActivityRepo::active_among(&pool, user_id, &window)
        .await
        .unwrap();
    assert_eq!(active, vec![d("2026-03-01"), d("2026-03-05")]);
}

#[sqlx::test(migrations = "./migrations")]
async fn month_dates_respects_month_boundaries(pool: PgPool) {
    let user_id = new_user(&pool, "barbara").await;

    ActivityRepo::mark_day(&pool, user_id, d("2026-02-28")).await.unwrap();
    ActivityRepo::mark_day(&pool, user_id, d("2026-03-01")).await.unwrap();
    ActivityRepo::mark_day(&pool, user_id, d("2026-03-31")).await.unwrap();
    ActivityRepo::mark_day(&pool, user_id, d("2026-04-01")).await.unwrap();

    let march = ActivityRepo::month_dates(&pool, user_id, 2026, 3).await.unwrap();
    assert_eq!(march, vec![d("2026-03-01"), d("2026-03-31")]);
}

#[sqlx::test(migrations = "./migrations")]
async fn earliest_date_and_empty_history(pool: PgPool) {
    let user_id = new_user(&pool, "alan").await;

    assert_eq!(ActivityRepo::earliest_date(&pool, user_id).await.unwrap(), None);

    ActivityRepo::mark_day(&pool, user_id, d("2026-03-02")).await.unwrap();
    ActivityRepo::mark_day(&pool, user_id, d("2026-03-01")).await.unwrap();

    assert_eq!(
        ActivityRepo::earliest_date(&pool, user_id).await.unwrap(),
        Some(d("2026-03-01"))
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn current_streak_counts_back_from_today(pool: PgPool) {
    let user_id = new_user(&pool, "john").await;

    for day in ["2026-03-01", "2026-03-02", "2026-03-03"] {
        ActivityRepo::mark_day(&pool, user_id, d(day)).await.unwrap();
    }

    assert_eq!(
        ActivityRepo::current_streak(&pool, user_id, d("2026-03-03"))
            .await
            .unwrap(),
        3
    );
    // Yesterday's activity keeps the streak alive.
    assert_eq!(
        ActivityRepo::current_streak(&pool, user_id, d("2026-03-04"))
            .await
            .unwrap(),
        3
    );
    // A fully missed day resets it.
    assert_eq!(
        ActivityRepo::current_streak(&pool, user_id, d("2026-03-05"))
            .await
            .unwrap(),
        0
    );
}
