// ABOUTME: Unit tests for goal completion percentage computation
// ABOUTME: Covers count-up goals, weight-loss count-down goals, clamping, and zero targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use fittrack::intelligence::progress::goal_progress;
use fittrack::models::{FitnessGoal, GoalType};

fn goal(goal_type: GoalType, target: f64, current: f64) -> FitnessGoal {
    FitnessGoal::new(goal_type, target, current, "units", Utc::now() + Duration::days(30))
}

#[test]
fn test_count_up_progress() {
    let g = goal(GoalType::Endurance, 10_000.0, 6_500.0);
    assert!((goal_progress(&g) - 65.0).abs() < f64::EPSILON);
}

#[test]
fn test_progress_clamps_at_100() {
    let g = goal(GoalType::MuscleGain, 100.0, 150.0);
    assert!((goal_progress(&g) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_target_yields_zero_not_panic() {
    let g = goal(GoalType::GeneralHealth, 0.0, 50.0);
    assert!(goal_progress(&g).abs() < f64::EPSILON);
}

#[test]
fn test_weight_loss_measures_against_start_value() {
    // Started at 80 kg, aiming for 70 kg, currently 75 kg: half way there
    let mut g = goal(GoalType::WeightLoss, 70.0, 80.0);
    assert!((g.start_value - 80.0).abs() < f64::EPSILON);
    g.current_value = 75.0;
    assert!((goal_progress(&g) - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_weight_loss_complete_clamps_at_100() {
    let mut g = goal(GoalType::WeightLoss, 70.0, 80.0);
    g.current_value = 68.0; // lost more than planned
    assert!((goal_progress(&g) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_weight_loss_degenerate_target_yields_zero() {
    // Target at or above the start value leaves nothing to lose
    let g = goal(GoalType::WeightLoss, 80.0, 80.0);
    assert!(goal_progress(&g).abs() < f64::EPSILON);

    let g = goal(GoalType::WeightLoss, 85.0, 80.0);
    assert!(goal_progress(&g).abs() < f64::EPSILON);
}

#[test]
fn test_negative_progress_clamps_at_zero() {
    // Weight went up on a weight-loss goal
    let mut g = goal(GoalType::WeightLoss, 70.0, 80.0);
    g.current_value = 82.0;
    assert!(goal_progress(&g).abs() < f64::EPSILON);
}
