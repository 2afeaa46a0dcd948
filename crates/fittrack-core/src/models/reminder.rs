// ABOUTME: Health reminder model for scheduled notification-style prompts
// ABOUTME: Structural only - the store exposes CRUD but no core logic consumes it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Category of a health reminder
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    /// Drink water
    Water,
    /// Time to exercise
    Exercise,
    /// Take a rest
    Rest,
    /// Take medication
    Medication,
    /// User-defined
    Custom,
}

impl ReminderType {
    /// Parse a persisted tag, coercing unknown tags to `Custom`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "water" => Self::Water,
            "exercise" => Self::Exercise,
            "rest" => Self::Rest,
            "medication" => Self::Medication,
            "custom" => Self::Custom,
            unknown => {
                tracing::debug!(tag = unknown, "unknown reminder type tag, coercing to 'custom'");
                Self::Custom
            }
        }
    }

    /// Wire tag for this variant
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Exercise => "exercise",
            Self::Rest => "rest",
            Self::Medication => "medication",
            Self::Custom => "custom",
        }
    }
}

impl<'de> Deserialize<'de> for ReminderType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl std::fmt::Display for ReminderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A recurring reminder shown to the user at a time of day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthReminder {
    /// Unique identifier for the reminder
    pub id: Uuid,
    /// Reminder category
    pub reminder_type: ReminderType,
    /// Short title
    pub title: String,
    /// Message body
    pub message: String,
    /// Time of day the reminder fires
    pub time_of_day: NaiveTime,
    /// Weekdays the reminder repeats on
    pub repeat_days: Vec<Weekday>,
    /// Whether the reminder is active
    pub is_enabled: bool,
}
