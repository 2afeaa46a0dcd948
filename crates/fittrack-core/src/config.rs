// ABOUTME: Fitness-specific runtime configuration with environment overrides
// ABOUTME: Manages per-workout-type calorie rates loaded env-first with built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Fitness configuration
//!
//! All configuration is environment-variable based with built-in defaults, so
//! a deployment (or a test) can tune calorie rates without a config file.
//! Override pattern: `FITTRACK_CAL_RATE_{TYPE}=<kcal per minute>`, e.g.
//! `FITTRACK_CAL_RATE_RUNNING=11.5`.

use std::collections::HashMap;

use crate::constants::calorie_rates;
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutType;

/// Environment variable prefix for calorie rate overrides
const CAL_RATE_ENV_PREFIX: &str = "FITTRACK_CAL_RATE_";

/// Runtime fitness configuration
///
/// Holds the calorie burn rate table used by the timer's live estimate and
/// the final calorie computation at stop.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessConfig {
    rates: HashMap<WorkoutType, f64>,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert(WorkoutType::Running, calorie_rates::RUNNING);
        rates.insert(WorkoutType::Walking, calorie_rates::WALKING);
        rates.insert(WorkoutType::Cycling, calorie_rates::CYCLING);
        rates.insert(WorkoutType::Strength, calorie_rates::STRENGTH);
        rates.insert(WorkoutType::Yoga, calorie_rates::YOGA);
        rates.insert(WorkoutType::Other, calorie_rates::OTHER);
        Self { rates }
    }
}

impl FitnessConfig {
    /// Load configuration from environment variables over built-in defaults
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] if an override is present but is
    /// not a positive number.
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();
        for workout_type in WorkoutType::ALL {
            let env_key = format!(
                "{CAL_RATE_ENV_PREFIX}{}",
                workout_type.as_tag().to_uppercase()
            );
            if let Ok(raw) = std::env::var(&env_key) {
                let rate: f64 = raw.parse().map_err(|_| AppError::InvalidConfig {
                    key: env_key.clone(),
                    reason: format!("'{raw}' is not a number"),
                })?;
                if rate <= 0.0 {
                    return Err(AppError::InvalidConfig {
                        key: env_key,
                        reason: format!("rate must be positive, got {rate}"),
                    });
                }
                tracing::debug!(%workout_type, rate, "calorie rate overridden from environment");
                config.rates.insert(workout_type, rate);
            }
        }
        Ok(config)
    }

    /// Calorie burn rate for a workout type (kcal per minute)
    #[must_use]
    pub fn calorie_rate(&self, workout_type: WorkoutType) -> f64 {
        self.rates
            .get(&workout_type)
            .copied()
            .unwrap_or(calorie_rates::OTHER)
    }
}
