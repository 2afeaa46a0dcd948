// ABOUTME: Body and workout metric calculations - BMI, calorie burn, elapsed formatting
// ABOUTME: Total functions with sentinel results for undefined arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Body and workout metrics

use serde::{Deserialize, Serialize};

use fittrack_core::constants::{bmi as bmi_thresholds, time};

/// BMI classification
///
/// Thresholds are fixed contract values: `<18.5` underweight, `[18.5, 24)`
/// normal, `[24, 28)` overweight, `>= 28` obese.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in `[18.5, 24)`
    Normal,
    /// BMI in `[24, 28)`
    Overweight,
    /// BMI at or above 28
    Obese,
}

impl BmiCategory {
    /// Classify a computed BMI value
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi_thresholds::UNDERWEIGHT_MAX {
            Self::Underweight
        } else if value < bmi_thresholds::NORMAL_MAX {
            Self::Normal
        } else if value < bmi_thresholds::OVERWEIGHT_MAX {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        };
        f.write_str(label)
    }
}

/// Body mass index: `weight_kg / (height_cm / 100)^2`
///
/// Returns `None` when either measurement is non-positive - the UI renders
/// that as "--"/unknown. This is the sentinel for undefined arithmetic, not
/// an error condition.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Estimated calories burned over an elapsed time at a per-minute rate
///
/// `round(elapsed_seconds / 60 * rate)`, recomputed live on every timer tick
/// and finalized once at stop.
#[must_use]
pub fn estimate_calories(elapsed_seconds: u64, rate_kcal_per_min: f64) -> u32 {
    let minutes = elapsed_seconds as f64 / time::SECS_PER_MINUTE as f64;
    (minutes * rate_kcal_per_min).round().max(0.0) as u32
}

/// Format elapsed seconds as zero-padded `HH:MM:SS`
#[must_use]
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / time::SECS_PER_HOUR;
    let minutes = (total_seconds % time::SECS_PER_HOUR) / time::SECS_PER_MINUTE;
    let seconds = total_seconds % time::SECS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
