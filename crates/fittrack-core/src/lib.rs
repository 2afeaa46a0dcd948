// ABOUTME: Core types and constants for the FitTrack local fitness tracker
// ABOUTME: Foundation crate with domain models, error types, config, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing shared types and constants for the FitTrack
//! fitness tracker. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Domain data shapes (`UserProfile`, `FitnessGoal`, `WorkoutSession`, ...)
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **constants**: Fixed contract values (BMI thresholds, calorie rates, storage key)
//! - **config**: Runtime fitness configuration with environment overrides

/// Domain data models (`UserProfile`, `FitnessGoal`, `WorkoutSession`, etc.)
pub mod models;

/// Unified error handling with `AppError` and the `AppResult` alias
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Fitness-specific configuration (calorie rates, overridable via environment)
pub mod config;

pub use config::FitnessConfig;
pub use errors::{AppError, AppResult};
