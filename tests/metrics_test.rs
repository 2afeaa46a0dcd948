// ABOUTME: Unit tests for BMI, calorie estimation, and elapsed-time formatting
// ABOUTME: Validates sentinel behavior for undefined arithmetic and category boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::intelligence::metrics::{bmi, estimate_calories, format_elapsed, BmiCategory};

#[test]
fn test_bmi_typical_profile() {
    let value = bmi(65.0, 170.0).unwrap();
    assert!((value - 22.49).abs() < 0.01, "got {value}");
    assert_eq!(BmiCategory::from_bmi(value), BmiCategory::Normal);
}

#[test]
fn test_bmi_zero_height_is_undefined() {
    assert_eq!(bmi(65.0, 0.0), None);
    assert_eq!(bmi(65.0, -170.0), None);
}

#[test]
fn test_bmi_zero_weight_is_undefined() {
    assert_eq!(bmi(0.0, 170.0), None);
}

#[test]
fn test_bmi_category_boundaries() {
    // Inclusive lower bound, exclusive upper bound
    assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(23.99), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(24.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(27.99), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(28.0), BmiCategory::Obese);
}

#[test]
fn test_bmi_category_labels() {
    assert_eq!(BmiCategory::Underweight.to_string(), "underweight");
    assert_eq!(BmiCategory::Normal.to_string(), "normal");
    assert_eq!(BmiCategory::Overweight.to_string(), "overweight");
    assert_eq!(BmiCategory::Obese.to_string(), "obese");
}

#[test]
fn test_estimate_calories_rounds_to_nearest() {
    // 125 seconds of running at 10 kcal/min: 125/60*10 = 20.83 -> 21
    assert_eq!(estimate_calories(125, 10.0), 21);
    // 30 minutes of walking at 4 kcal/min
    assert_eq!(estimate_calories(1800, 4.0), 120);
    assert_eq!(estimate_calories(0, 10.0), 0);
}

#[test]
fn test_format_elapsed_zero_padded() {
    assert_eq!(format_elapsed(0), "00:00:00");
    assert_eq!(format_elapsed(125), "00:02:05");
    assert_eq!(format_elapsed(3600), "01:00:00");
    assert_eq!(format_elapsed(3661), "01:01:01");
    assert_eq!(format_elapsed(86_400 + 59), "24:00:59");
}
