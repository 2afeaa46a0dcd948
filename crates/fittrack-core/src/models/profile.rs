// ABOUTME: User profile model with body measurements used for BMI and calorie math
// ABOUTME: Defines UserProfile and the Gender tag with unknown-tag coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Gender of the profile owner
///
/// Closed set on the wire; any tag outside the set deserializes to `Other`
/// rather than rejecting the persisted record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// Parse a persisted tag, coercing unknown tags to `Other`
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "male" => Self::Male,
            "female" => Self::Female,
            "other" => Self::Other,
            unknown => {
                tracing::debug!(tag = unknown, "unknown gender tag, coercing to 'other'");
                Self::Other
            }
        }
    }

    /// Wire tag for this variant
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// The user's profile and body measurements
///
/// Height and weight drive the BMI calculation in `fittrack-intelligence`.
/// Non-positive measurements degrade BMI display to "unknown" rather than
/// producing an error, so no validation happens here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Unique identifier for the profile
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<f64>,
    /// Resting heart rate in BPM, if tracked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<u32>,
    /// When the profile was created (UTC)
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated (UTC)
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with fresh identity and timestamps
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, gender: Gender, height_cm: f64, weight_kg: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            gender,
            height_cm,
            weight_kg,
            body_fat_percentage: None,
            resting_heart_rate: None,
            created_at: now,
            updated_at: now,
        }
    }
}
