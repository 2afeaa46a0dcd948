// ABOUTME: Derived-metrics engine for the FitTrack fitness tracker
// ABOUTME: Pure functions over the core models - no I/O, no side effects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Intelligence
//!
//! Pure, side-effect-free computations over the core data models. Every
//! function here is total over its domain: undefined arithmetic (zero height,
//! zero target) resolves to a sentinel value, never an error or a panic.
//!
//! ## Modules
//!
//! - **metrics**: BMI and category, calorie estimates, elapsed-time formatting
//! - **progress**: goal completion percentage per goal type
//! - **weekly**: trailing 7-day aggregation of workout sessions

/// BMI, calorie estimation, and elapsed-time formatting
pub mod metrics;

/// Goal completion percentage
pub mod progress;

/// Trailing 7-day workout aggregation
pub mod weekly;

pub use metrics::{bmi, estimate_calories, format_elapsed, BmiCategory};
pub use progress::goal_progress;
pub use weekly::{weekly_report, DaySummary, WeeklyReport, WeeklyTotals};
