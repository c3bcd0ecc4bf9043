//! Streak cycle analysis over a user's activity-day history.
//!
//! Cycles are always recomputed from the authoritative activity set and
//! never persisted, so there is no derived state to go stale.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;

/// A maximal run of consecutive calendar days within a user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakCycle {
    /// First active day of the run.
    pub start: NaiveDate,
    /// Last active day of the run.
    pub end: NaiveDate,
    /// Number of days in the run.
    pub length: i64,
}

/// Result of analysing a full activity history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakAnalysis {
    /// All cycles in ascending date order.
    pub cycles: Vec<StreakCycle>,
    /// Length of the most recent cycle (0 for an empty history).
    pub current_streak: i64,
    /// Whether any gap of more than one day was observed.
    pub had_break: bool,
}

impl StreakAnalysis {
    /// The most recent cycle, if any activity exists at all.
    pub fn last_cycle(&self) -> Option<&StreakCycle> {
        self.cycles.last()
    }

    /// Count of cycles with length of at least `min_days`.
    pub fn cycles_of_at_least(&self, min_days: i64) -> usize {
        self.cycles.iter().filter(|c| c.length >= min_days).count()
    }
}

/// Derive streak cycles from an activity history in a single pass.
///
/// The input may be unsorted and may contain duplicates; it is sorted
/// ascending and deduplicated first. A new cycle starts whenever the gap
/// to the previous day exceeds one day.
pub fn analyze_history(dates: &[NaiveDate]) -> StreakAnalysis {
    let mut sorted: Vec<NaiveDate> = dates.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let Some(&first) = sorted.first() else {
        return StreakAnalysis {
            cycles: Vec::new(),
            current_streak: 0,
            had_break: false,
        };
    };

    let mut cycles: Vec<StreakCycle> = Vec::new();
    let mut cycle_start = first;
    let mut cycle_end = first;
    let mut had_break = false;

    for &day in &sorted[1..] {
        if (day - cycle_end).num_days() == 1 {
            cycle_end = day;
        } else {
            cycles.push(make_cycle(cycle_start, cycle_end));
            had_break = true;
            cycle_start = day;
            cycle_end = day;
        }
    }
    cycles.push(make_cycle(cycle_start, cycle_end));

    let current_streak = cycles.last().map(|c| c.length).unwrap_or(0);

    StreakAnalysis {
        cycles,
        current_streak,
        had_break,
    }
}

/// Count the live streak ending at `today`.
///
/// The streak is anchored at `today` if it is active, otherwise at
/// yesterday (activity logged yesterday still counts as an unbroken
/// streak until the end of today). Any missing day breaks the count;
/// there is no gap tolerance.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> i64 {
    let active: std::collections::HashSet<NaiveDate> = dates.iter().copied().collect();

    let anchor = if active.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if active.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 0i64;
    let mut day = anchor;
    while active.contains(&day) {
        streak += 1;
        let Some(prev) = day.checked_sub_days(Days::new(1)) else {
            break;
        };
        day = prev;
    }
    streak
}

/// Parse a `YYYY-MM-DD` activity date from client input.
pub fn parse_activity_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("Invalid date '{input}'. Use YYYY-MM-DD")))
}

fn make_cycle(start: NaiveDate, end: NaiveDate) -> StreakCycle {
    StreakCycle {
        start,
        end,
        length: (end - start).num_days() + 1,
    }
}
