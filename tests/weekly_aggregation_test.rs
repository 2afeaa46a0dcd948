// ABOUTME: Unit tests for trailing 7-day workout aggregation
// ABOUTME: Validates day ordering, per-day sums, minute rounding, and totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use fittrack::intelligence::weekly::weekly_report;
use fittrack::models::{WorkoutSession, WorkoutType};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn session_on(date: NaiveDate, duration_seconds: u64, calories: u32) -> WorkoutSession {
    let mut session = WorkoutSession::begin(WorkoutType::Running);
    session.start_time = Utc
        .from_utc_datetime(&date.and_hms_opt(8, 30, 0).unwrap());
    session.end_time = Some(session.start_time + Duration::seconds(duration_seconds as i64));
    session.duration_seconds = duration_seconds;
    session.calories_burned = calories;
    session
}

#[test]
fn test_report_has_seven_days_oldest_first() {
    let today = day(2025, 6, 15);
    let report = weekly_report(&[], today);

    assert_eq!(report.days.len(), 7);
    assert_eq!(report.days[0].date, day(2025, 6, 9));
    assert_eq!(report.days[6].date, today);
    assert!(report.days.iter().all(|d| d.workouts == 0));
    assert_eq!(report.totals.calories_burned, 0);
}

#[test]
fn test_sessions_land_in_their_day_slot() {
    let today = day(2025, 6, 15);
    let sessions = vec![
        session_on(today, 1500, 50),                       // today, last slot
        session_on(today - Duration::days(3), 900, 30),    // three slots earlier
    ];
    let report = weekly_report(&sessions, today);

    assert_eq!(report.days[6].calories_burned, 50);
    assert_eq!(report.days[3].calories_burned, 30);
    for idx in [0, 1, 2, 4, 5] {
        assert_eq!(report.days[idx].calories_burned, 0, "day {idx} should be empty");
    }
    assert_eq!(report.totals.calories_burned, 80);
    assert_eq!(report.totals.workouts, 2);
}

#[test]
fn test_minutes_rounded_per_session() {
    let today = day(2025, 6, 15);
    // 1510 seconds -> 25.17 minutes -> 25; 110 seconds -> 1.83 -> 2
    let sessions = vec![
        session_on(today, 1510, 10),
        session_on(today, 110, 5),
    ];
    let report = weekly_report(&sessions, today);

    assert_eq!(report.days[6].active_minutes, 27);
    assert_eq!(report.days[6].workouts, 2);
    assert_eq!(report.totals.active_minutes, 27);
}

#[test]
fn test_sessions_outside_window_are_ignored() {
    let today = day(2025, 6, 15);
    let sessions = vec![
        session_on(today - Duration::days(7), 1800, 100), // one day too old
        session_on(today + Duration::days(1), 1800, 100), // tomorrow
    ];
    let report = weekly_report(&sessions, today);

    assert_eq!(report.totals.workouts, 0);
    assert_eq!(report.totals.calories_burned, 0);
}

#[test]
fn test_multiple_sessions_same_day_sum() {
    let today = day(2025, 6, 15);
    let sessions = vec![
        session_on(today, 600, 40),
        session_on(today, 1200, 80),
    ];
    let report = weekly_report(&sessions, today);

    assert_eq!(report.days[6].calories_burned, 120);
    assert_eq!(report.days[6].active_minutes, 30);
    assert_eq!(report.days[6].workouts, 2);
}
