// ABOUTME: Trailing 7-day aggregation of workout sessions into a daily series
// ABOUTME: Produces per-day calorie/minute/session sums plus element-wise totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Weekly activity aggregation

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use fittrack_core::constants::time;
use fittrack_core::models::WorkoutSession;

/// Aggregated workout activity for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySummary {
    /// The calendar day
    pub date: NaiveDate,
    /// Calories burned across the day's sessions (kcal)
    pub calories_burned: u32,
    /// Active minutes across the day's sessions (each session rounded)
    pub active_minutes: u32,
    /// Number of sessions started that day
    pub workouts: u32,
}

/// Element-wise totals across the weekly window
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyTotals {
    /// Total calories burned (kcal)
    pub calories_burned: u32,
    /// Total active minutes
    pub active_minutes: u32,
    /// Total sessions
    pub workouts: u32,
}

/// Trailing 7-day activity report, oldest day first, `today` last
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklyReport {
    /// One summary per day in the window
    pub days: Vec<DaySummary>,
    /// Sums across the window
    pub totals: WeeklyTotals,
}

/// Aggregate sessions over the trailing 7 calendar days ending at `today`
///
/// A session belongs to the calendar day its `start_time` falls on (UTC).
/// `today` is caller-supplied so the report is deterministic under test;
/// production callers pass `Utc::now().date_naive()`.
#[must_use]
pub fn weekly_report(sessions: &[WorkoutSession], today: NaiveDate) -> WeeklyReport {
    tracing::trace!(sessions = sessions.len(), %today, "building weekly report");
    let mut days = Vec::with_capacity(time::WEEKLY_WINDOW_DAYS as usize);
    for offset in (0..time::WEEKLY_WINDOW_DAYS).rev() {
        let date = today
            .checked_sub_days(Days::new(u64::from(offset)))
            .unwrap_or(today);
        days.push(summarize_day(sessions, date));
    }

    let totals = days.iter().fold(WeeklyTotals::default(), |acc, day| {
        WeeklyTotals {
            calories_burned: acc.calories_burned + day.calories_burned,
            active_minutes: acc.active_minutes + day.active_minutes,
            workouts: acc.workouts + day.workouts,
        }
    });

    WeeklyReport { days, totals }
}

fn summarize_day(sessions: &[WorkoutSession], date: NaiveDate) -> DaySummary {
    let mut summary = DaySummary {
        date,
        calories_burned: 0,
        active_minutes: 0,
        workouts: 0,
    };
    for session in sessions {
        if session.start_time.date_naive() != date {
            continue;
        }
        summary.calories_burned += session.calories_burned;
        summary.active_minutes +=
            (session.duration_seconds as f64 / time::SECS_PER_MINUTE as f64).round() as u32;
        summary.workouts += 1;
    }
    summary
}
