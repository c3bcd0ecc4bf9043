//! Handlers for activity marking, the 7-day streak view, and the
//! consistency calendar.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use sattva_core::error::CoreError;
use sattva_core::streak::parse_activity_date;
use sattva_core::types::DbId;
use sattva_db::models::activity::{DayActivity, MarkActivity};
use sattva_db::repositories::ActivityRepo;

use crate::error::AppResult;
use crate::handlers::require_user;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters carrying an optional `YYYY-MM-DD` base date.
#[derive(Debug, Deserialize)]
pub struct BaseDateQuery {
    pub date: Option<String>,
}

/// Query parameters for the monthly consistency view.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

/// Query parameters for the consistency range view.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub today: Option<String>,
}

/// Payload for a marked activity day.
#[derive(Debug, Serialize)]
pub struct MarkedActivity {
    pub date: NaiveDate,
    /// False when the day was already recorded.
    pub created: bool,
}

/// Payload for the monthly consistency view.
#[derive(Debug, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayActivity>,
}

/// Payload for the consistency range view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeView {
    /// `YYYY-MM` of the earliest recorded activity (current month when
    /// there is no history yet).
    pub start_month: String,
    pub current_month: String,
    pub current_streak: i64,
}

/// POST /api/v1/users/{id}/streak/mark-today
///
/// Record a qualifying-activity day. Append-only and deduplicated:
/// marking an already-recorded day is a no-op.
pub async fn mark_today(
    Path(user_id): Path<DbId>,
    State(state): State<AppState>,
    Json(input): Json<MarkActivity>,
) -> AppResult<impl IntoResponse> {
    require_user(&state.pool, user_id).await?;

    let date = match input.date.as_deref() {
        Some(raw) => parse_activity_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };

    let created = ActivityRepo::mark_day(&state.pool, user_id, date).await?;
    if created {
        tracing::info!(user_id, %date, "Activity day recorded");
    }

    Ok(Json(DataResponse {
        data: MarkedActivity { date, created },
    }))
}

/// GET /api/v1/users/{id}/streak/last-7-days
///
/// Per-day active flags for the 7-day window ending at `date` (default:
/// the server's UTC date).
pub async fn last_7_days(
    Path(user_id): Path<DbId>,
    Query(query): Query<BaseDateQuery>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    require_user(&state.pool, user_id).await?;

    let base = match query.date.as_deref() {
        Some(raw) => parse_activity_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };

    let window: Vec<NaiveDate> = (0..7u64)
        .rev()
        .filter_map(|offset| base.checked_sub_days(Days::new(offset)))
        .collect();

    let days = activity_flags(&state.pool, user_id, &window).await?;

    Ok(Json(DataResponse { data: days }))
}

/// GET /api/v1/users/{id}/consistency/month?year=&month=
///
/// Active flag for every day of the given calendar month.
pub async fn consistency_month(
    Path(user_id): Path<DbId>,
    Query(query): Query<MonthQuery>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    require_user(&state.pool, user_id).await?;

    let Some(first) = NaiveDate::from_ymd_opt(query.year, query.month, 1) else {
        return Err(CoreError::Validation(format!(
            "Invalid year/month {}-{}",
            query.year, query.month
        ))
        .into());
    };

    let active: std::collections::HashSet<NaiveDate> =
        ActivityRepo::month_dates(&state.pool, user_id, query.year, query.month)
            .await?
            .into_iter()
            .collect();

    let days: Vec<DayActivity> = first
        .iter_days()
        .take_while(|d| d.month() == query.month)
        .map(|date| DayActivity {
            date,
            active: active.contains(&date),
        })
        .collect();

    Ok(Json(DataResponse {
        data: MonthView {
            year: query.year,
            month: query.month,
            days,
        },
    }))
}

/// GET /api/v1/users/{id}/consistency/range?today=
///
/// The span of the user's history (earliest month to current month) plus
/// the current streak length.
pub async fn consistency_range(
    Path(user_id): Path<DbId>,
    Query(query): Query<RangeQuery>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    require_user(&state.pool, user_id).await?;

    let today = match query.today.as_deref() {
        Some(raw) => parse_activity_date(raw)?,
        None => chrono::Utc::now().date_naive(),
    };

    let current_month = today.format("%Y-%m").to_string();
    let start_month = ActivityRepo::earliest_date(&state.pool, user_id)
        .await?
        .map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_else(|| current_month.clone());
    let current_streak = ActivityRepo::current_streak(&state.pool, user_id, today).await?;

    Ok(Json(DataResponse {
        data: RangeView {
            start_month,
            current_month,
            current_streak,
        },
    }))
}

/// Resolve a list of days to per-day active flags.
async fn activity_flags(
    pool: &sattva_db::DbPool,
    user_id: DbId,
    days: &[NaiveDate],
) -> Result<Vec<DayActivity>, sqlx::Error> {
    let active: std::collections::HashSet<NaiveDate> =
        ActivityRepo::active_among(pool, user_id, days)
            .await?
            .into_iter()
            .collect();

    Ok(days
        .iter()
        .map(|&date| DayActivity {
            date,
            active: active.contains(&date),
        })
        .collect())
}
