// ABOUTME: Daily aggregate statistics model keyed by calendar day
// ABOUTME: One DailyStats record per day, upserted as workouts complete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one calendar day
///
/// Keyed by `date`; the store upserts exactly one record per day. Completing
/// a workout adds its calories and active minutes and bumps
/// `workouts_completed`; the remaining fields are manually entered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    /// Calendar day this record covers (serialized as an ISO day string)
    pub date: NaiveDate,
    /// Steps taken
    pub steps: u32,
    /// Calories burned (kcal)
    pub calories_burned: u32,
    /// Minutes of activity
    pub active_minutes: u32,
    /// Number of completed workouts
    pub workouts_completed: u32,
    /// Water intake in milliliters
    pub water_intake_ml: u32,
    /// Hours slept
    pub sleep_hours: f64,
}

impl DailyStats {
    /// Empty record for a given day
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            calories_burned: 0,
            active_minutes: 0,
            workouts_completed: 0,
            water_intake_ml: 0,
            sleep_hours: 0.0,
        }
    }
}
