// ABOUTME: Fitness goal model with goal type tags and explicit start value
// ABOUTME: Defines FitnessGoal and GoalType with unknown-tag coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Category of a fitness goal
///
/// The category decides how progress is computed: weight-loss goals count
/// down from a start value, everything else counts up toward the target.
/// Unknown persisted tags coerce to `GeneralHealth`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Reduce body weight toward a target
    WeightLoss,
    /// Build muscle mass toward a target
    MuscleGain,
    /// Improve endurance (e.g., minutes of sustained activity)
    Endurance,
    /// Improve flexibility (e.g., consecutive practice days)
    Flexibility,
    /// General wellness score
    GeneralHealth,
}

impl GoalType {
    /// Parse a persisted tag, coercing unknown tags to `GeneralHealth`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            "endurance" => Self::Endurance,
            "flexibility" => Self::Flexibility,
            "general_health" => Self::GeneralHealth,
            unknown => {
                tracing::debug!(tag = unknown, "unknown goal type tag, coercing to 'general_health'");
                Self::GeneralHealth
            }
        }
    }

    /// Wire tag for this variant
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Endurance => "endurance",
            Self::Flexibility => "flexibility",
            Self::GeneralHealth => "general_health",
        }
    }
}

impl<'de> Deserialize<'de> for GoalType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A tracked fitness goal
///
/// `start_value` records the metric at goal creation. Weight-loss progress is
/// measured against it, so it must not be reconstructed from the current and
/// target values later (the reconstruction degenerates once the user edits
/// either value). Once `is_completed` is set it is never auto-reverted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessGoal {
    /// Unique identifier for the goal
    pub id: Uuid,
    /// Goal category, decides the progress formula
    pub goal_type: GoalType,
    /// Value to reach
    pub target_value: f64,
    /// Latest recorded value
    pub current_value: f64,
    /// Value when the goal was created
    pub start_value: f64,
    /// Unit the values are expressed in (kg, minutes, days, ...)
    pub unit: String,
    /// When the goal was created (UTC)
    pub start_date: DateTime<Utc>,
    /// Deadline for the goal (UTC)
    pub target_date: DateTime<Utc>,
    /// Whether the user marked the goal as done
    pub is_completed: bool,
}

impl FitnessGoal {
    /// Create a goal starting now; `start_value` is captured from `current_value`
    #[must_use]
    pub fn new(
        goal_type: GoalType,
        target_value: f64,
        current_value: f64,
        unit: impl Into<String>,
        target_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            goal_type,
            target_value,
            current_value,
            start_value: current_value,
            unit: unit.into(),
            start_date: Utc::now(),
            target_date,
            is_completed: false,
        }
    }
}
