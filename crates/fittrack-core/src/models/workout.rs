// ABOUTME: Workout session model recording one timed activity from start to stop
// ABOUTME: Defines WorkoutSession and WorkoutType with unknown-tag coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Type of workout activity
///
/// Each type carries a default calorie burn rate (see
/// [`crate::constants::calorie_rates`]); unknown persisted tags coerce to
/// `Other`, which uses a conservative middle rate.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running
    Running,
    /// Walking
    Walking,
    /// Cycling
    Cycling,
    /// Strength training
    Strength,
    /// Yoga practice
    Yoga,
    /// Anything else
    Other,
}

impl WorkoutType {
    /// All known workout types, in display order
    pub const ALL: [Self; 6] = [
        Self::Running,
        Self::Walking,
        Self::Cycling,
        Self::Strength,
        Self::Yoga,
        Self::Other,
    ];

    /// Parse a persisted tag, coercing unknown tags to `Other`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "running" => Self::Running,
            "walking" => Self::Walking,
            "cycling" => Self::Cycling,
            "strength" => Self::Strength,
            "yoga" => Self::Yoga,
            "other" => Self::Other,
            unknown => {
                tracing::debug!(tag = unknown, "unknown workout type tag, coercing to 'other'");
                Self::Other
            }
        }
    }

    /// Wire tag for this variant
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Walking => "walking",
            Self::Cycling => "cycling",
            Self::Strength => "strength",
            Self::Yoga => "yoga",
            Self::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One timed workout from start-press to stop-press
///
/// Created by the timer at start with `duration_seconds = 0`, finalized once
/// at stop (`end_time`, `duration_seconds`, `calories_burned` set), and
/// immutable thereafter - the store exposes no update operation for sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Unique identifier for the session
    pub id: Uuid,
    /// What kind of activity this was
    pub workout_type: WorkoutType,
    /// When the session started (UTC)
    pub start_time: DateTime<Utc>,
    /// When the session ended (UTC); `None` while in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Elapsed duration in seconds
    pub duration_seconds: u64,
    /// Estimated calories burned (kcal), derived at stop and stored
    pub calories_burned: u32,
    /// Distance covered in meters, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    /// Step count, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    /// Average heart rate in BPM, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<u32>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutSession {
    /// Create an in-progress session starting now
    #[must_use]
    pub fn begin(workout_type: WorkoutType) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_type,
            start_time: Utc::now(),
            end_time: None,
            duration_seconds: 0,
            calories_burned: 0,
            distance_meters: None,
            steps: None,
            average_heart_rate: None,
            notes: None,
        }
    }
}
