// ABOUTME: Goal completion percentage computation per goal type
// ABOUTME: Weight-loss goals count down from start_value, all others count up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Goal progress

use fittrack_core::models::{FitnessGoal, GoalType};

/// Completion percentage of a goal, clamped to `[0, 100]`
///
/// - `WeightLoss`: `(start - current) / (start - target) * 100`, measured
///   against the goal's stored `start_value`.
/// - Everything else: `current / target * 100`.
///
/// A non-positive denominator (target of zero, or a weight-loss target at or
/// above the start value) yields `0.0` - never a division by zero.
#[must_use]
pub fn goal_progress(goal: &FitnessGoal) -> f64 {
    let raw = match goal.goal_type {
        GoalType::WeightLoss => {
            let total_to_lose = goal.start_value - goal.target_value;
            if total_to_lose <= 0.0 {
                return 0.0;
            }
            (goal.start_value - goal.current_value) / total_to_lose * 100.0
        }
        GoalType::MuscleGain
        | GoalType::Endurance
        | GoalType::Flexibility
        | GoalType::GeneralHealth => {
            if goal.target_value <= 0.0 {
                return 0.0;
            }
            goal.current_value / goal.target_value * 100.0
        }
    };
    raw.clamp(0.0, 100.0)
}
