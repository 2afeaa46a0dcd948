// ABOUTME: Fixed contract constants for the FitTrack tracker organized by domain
// ABOUTME: BMI thresholds, default calorie rates, storage key, and timer period
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. The BMI thresholds and category
//! labels are fixed contract values, not configuration; calorie rates have
//! runtime overrides in [`crate::config::FitnessConfig`] but the defaults
//! live here.

/// BMI category thresholds (inclusive lower bound, exclusive upper bound)
pub mod bmi {
    /// Below this value the category is underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// `[UNDERWEIGHT_MAX, NORMAL_MAX)` is the normal range
    pub const NORMAL_MAX: f64 = 24.0;
    /// `[NORMAL_MAX, OVERWEIGHT_MAX)` is overweight; at or above is obese
    pub const OVERWEIGHT_MAX: f64 = 28.0;
}

/// Default calorie burn rates per workout type (kcal per minute)
pub mod calorie_rates {
    /// Running
    pub const RUNNING: f64 = 10.0;
    /// Walking
    pub const WALKING: f64 = 4.0;
    /// Cycling
    pub const CYCLING: f64 = 8.0;
    /// Strength training
    pub const STRENGTH: f64 = 6.0;
    /// Yoga
    pub const YOGA: f64 = 3.0;
    /// Anything else - a conservative middle rate
    pub const OTHER: f64 = 5.0;
}

/// Persistence layout
pub mod storage {
    /// Fixed key the whole health state blob is stored under
    pub const HEALTH_STATE_KEY: &str = "fittrack-health-state";
}

/// Timer behavior
pub mod timer {
    /// Nominal tick period in seconds; each tick advances elapsed time by
    /// exactly one regardless of wall-clock scheduling jitter
    pub const TICK_PERIOD_SECS: u64 = 1;
}

/// Time math
pub mod time {
    /// Seconds in a minute
    pub const SECS_PER_MINUTE: u64 = 60;
    /// Seconds in an hour
    pub const SECS_PER_HOUR: u64 = 3600;
    /// Days in the trailing weekly report window
    pub const WEEKLY_WINDOW_DAYS: u32 = 7;
}
