//! Badge catalog and award planning.
//!
//! The catalog is data, not control flow: every badge is a [`BadgeSpec`]
//! row consumed by one generic planning pass, so adding a tier means
//! adding a row rather than new branches.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::json;

use crate::streak::StreakAnalysis;

// ---------------------------------------------------------------------------
// Badge keys
// ---------------------------------------------------------------------------

pub const BADGE_DAY_ZERO: &str = "day_zero";
pub const BADGE_SPARK: &str = "spark";
pub const BADGE_PULSE: &str = "pulse";
pub const BADGE_ANCHOR: &str = "anchor";
pub const BADGE_ALIGNED: &str = "aligned";
pub const BADGE_DISCIPLINED: &str = "disciplined";
pub const BADGE_UNSTOPPABLE: &str = "unstoppable";
pub const BADGE_INTEGRATED: &str = "integrated";
pub const BADGE_TITAN: &str = "titan";
pub const BADGE_RESILIENT: &str = "resilient";
pub const BADGE_RELENTLESS: &str = "relentless";
pub const BADGE_AMBASSADOR: &str = "ambassador";
pub const BADGE_HALL_OF_FAME: &str = "hall_of_fame";

// ---------------------------------------------------------------------------
// Pattern badge parameters
// ---------------------------------------------------------------------------

/// Minimum length of the rebuilt cycle for the `resilient` badge.
pub const RESILIENT_REBUILD_DAYS: i64 = 14;

/// Minimum cycle length that counts towards the `relentless` badge.
pub const RELENTLESS_CYCLE_DAYS: i64 = 30;

/// Number of qualifying cycles required for the `relentless` badge.
pub const RELENTLESS_CYCLES_REQUIRED: usize = 3;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// How a badge is earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BadgeKind {
    /// Awarded unconditionally the first time evaluation runs.
    Milestone,
    /// Awarded when the current streak first reaches `days`.
    Threshold { days: i64 },
    /// Awarded based on properties of the full cycle history.
    Pattern,
    /// Only granted out-of-band by an administrator.
    Admin,
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeSpec {
    pub key: &'static str,
    pub display_name: &'static str,
    pub meaning: &'static str,
    pub how_to_earn: &'static str,
    pub kind: BadgeKind,
}

/// The full badge catalog, threshold badges in ascending threshold order.
pub const BADGE_CATALOG: &[BadgeSpec] = &[
    BadgeSpec {
        key: BADGE_DAY_ZERO,
        display_name: "Day Zero",
        meaning: "Awareness before action",
        how_to_earn: "Create your account to begin the journey",
        kind: BadgeKind::Milestone,
    },
    BadgeSpec {
        key: BADGE_SPARK,
        display_name: "Spark",
        meaning: "Momentum initiated",
        how_to_earn: "Earned after 3 days of consistency",
        kind: BadgeKind::Threshold { days: 3 },
    },
    BadgeSpec {
        key: BADGE_PULSE,
        display_name: "Pulse",
        meaning: "Rhythm established",
        how_to_earn: "Earned after 7 days of consistency",
        kind: BadgeKind::Threshold { days: 7 },
    },
    BadgeSpec {
        key: BADGE_ANCHOR,
        display_name: "Anchor",
        meaning: "Habit grounded",
        how_to_earn: "Earned after 30 days of consistency",
        kind: BadgeKind::Threshold { days: 30 },
    },
    BadgeSpec {
        key: BADGE_ALIGNED,
        display_name: "Aligned",
        meaning: "Practice internalized",
        how_to_earn: "Earned after 90 days of consistency",
        kind: BadgeKind::Threshold { days: 90 },
    },
    BadgeSpec {
        key: BADGE_DISCIPLINED,
        display_name: "Disciplined",
        meaning: "Control beyond motivation",
        how_to_earn: "Earned after 100 days of consistency",
        kind: BadgeKind::Threshold { days: 100 },
    },
    BadgeSpec {
        key: BADGE_UNSTOPPABLE,
        display_name: "Unstoppable",
        meaning: "Rare continuity",
        how_to_earn: "Earned after 365 days of consistency",
        kind: BadgeKind::Threshold { days: 365 },
    },
    BadgeSpec {
        key: BADGE_INTEGRATED,
        display_name: "Integrated",
        meaning: "Lifestyle-level integration",
        how_to_earn: "Earned after 1000 days of consistency",
        kind: BadgeKind::Threshold { days: 1000 },
    },
    BadgeSpec {
        key: BADGE_TITAN,
        display_name: "Titan",
        meaning: "Permanence",
        how_to_earn: "Earned after 3000 days of consistency",
        kind: BadgeKind::Threshold { days: 3000 },
    },
    BadgeSpec {
        key: BADGE_RESILIENT,
        display_name: "Resilient",
        meaning: "Strength through setback",
        how_to_earn: "Rebuild a 14-day streak after a break",
        kind: BadgeKind::Pattern,
    },
    BadgeSpec {
        key: BADGE_RELENTLESS,
        display_name: "Relentless",
        meaning: "Repeated mastery",
        how_to_earn: "Complete 3 separate 30-day streaks",
        kind: BadgeKind::Pattern,
    },
    BadgeSpec {
        key: BADGE_AMBASSADOR,
        display_name: "Ambassador",
        meaning: "Inspiring others through authentic sharing",
        how_to_earn: "Awarded for sharing authentic testimonials about your journey",
        kind: BadgeKind::Admin,
    },
    BadgeSpec {
        key: BADGE_HALL_OF_FAME,
        display_name: "Hall of Fame",
        meaning: "Meaningful transformation achieved",
        how_to_earn: "Awarded for achieving meaningful personal outcomes",
        kind: BadgeKind::Admin,
    },
];

/// Look up a catalog entry by key.
pub fn badge_by_key(key: &str) -> Option<&'static BadgeSpec> {
    BADGE_CATALOG.iter().find(|b| b.key == key)
}

/// Whether `key` names an admin-only badge.
pub fn is_admin_badge(key: &str) -> bool {
    matches!(badge_by_key(key), Some(spec) if spec.kind == BadgeKind::Admin)
}

// ---------------------------------------------------------------------------
// Award planning
// ---------------------------------------------------------------------------

/// A badge the evaluator has decided to award in this pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAward {
    pub key: &'static str,
    pub metadata: Option<serde_json::Value>,
}

impl PlannedAward {
    fn new(key: &'static str) -> Self {
        Self {
            key,
            metadata: None,
        }
    }
}

/// Decide which badges to award given the user's current holdings and
/// streak state.
///
/// The `earned` set loaded before the pass is the sole source of truth for
/// "already awarded" checks; badges are never revoked and thresholds are
/// evaluated independently, so a user who jumps straight to a long streak
/// collects every threshold reached in one pass. Admin badges are never
/// planned here.
pub fn plan_awards(
    earned: &HashSet<String>,
    current_streak: i64,
    analysis: &StreakAnalysis,
) -> Vec<PlannedAward> {
    let mut planned = Vec::new();

    for spec in BADGE_CATALOG {
        if earned.contains(spec.key) {
            continue;
        }
        match spec.kind {
            BadgeKind::Milestone => planned.push(PlannedAward::new(spec.key)),
            BadgeKind::Threshold { days } => {
                if current_streak >= days {
                    planned.push(PlannedAward::new(spec.key));
                }
            }
            BadgeKind::Pattern => {
                if let Some(award) = plan_pattern_award(spec.key, analysis) {
                    planned.push(award);
                }
            }
            BadgeKind::Admin => {}
        }
    }

    planned
}

/// Evaluate a single pattern badge against the cycle history.
fn plan_pattern_award(key: &'static str, analysis: &StreakAnalysis) -> Option<PlannedAward> {
    match key {
        BADGE_RESILIENT => {
            // Reward recovery: the user broke a streak and rebuilt a
            // substantial new one.
            let rebuilt = analysis.had_break
                && analysis.cycles.len() >= 2
                && analysis
                    .last_cycle()
                    .is_some_and(|c| c.length >= RESILIENT_REBUILD_DAYS);
            rebuilt.then(|| PlannedAward::new(BADGE_RESILIENT))
        }
        BADGE_RELENTLESS => {
            let qualifying = analysis.cycles_of_at_least(RELENTLESS_CYCLE_DAYS);
            (qualifying >= RELENTLESS_CYCLES_REQUIRED).then(|| PlannedAward {
                key: BADGE_RELENTLESS,
                metadata: Some(json!({ "cyclesCompleted": qualifying })),
            })
        }
        _ => None,
    }
}
