// ABOUTME: Main library entry point for the FitTrack local fitness tracker
// ABOUTME: Ties the core models, derived metrics, timer, and persisted store together
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack
//!
//! Local-first fitness tracking core: a persisted state store, a workout
//! timer, and pure derived-metrics functions, ready for a UI layer to sit on
//! top of. There is no networking and no sync - all values are manually
//! entered or produced by the timer, and everything persists to one local
//! key-value blob.
//!
//! ## Architecture
//!
//! - **`fittrack-core`** (re-exported here): domain models, errors, constants,
//!   and fitness configuration
//! - **`fittrack-intelligence`** (re-exported as [`intelligence`]): pure
//!   derived-metrics computations (BMI, goal progress, weekly aggregation)
//! - **[`storage`]**: pluggable blob storage backends (memory, file)
//! - **[`store`]**: the owned, persisted health-state container
//! - **[`timer`]**: the start/stop workout timer state machine
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use fittrack::models::WorkoutType;
//! use fittrack::storage::MemoryStorage;
//! use fittrack::store::HealthStore;
//! use fittrack::timer::WorkoutTimer;
//! use fittrack::FitnessConfig;
//!
//! # async fn example() -> Result<(), fittrack::AppError> {
//! let store = HealthStore::load(MemoryStorage::new()).await?;
//! let mut timer = WorkoutTimer::new(FitnessConfig::default());
//!
//! timer.start(WorkoutType::Running)?;
//! let live = timer.tick()?; // once per second from the UI loop
//! println!("{} ({} kcal)", live.formatted_elapsed, live.calories_burned);
//! let _completed = timer.stop(&store).await?;
//! # Ok(())
//! # }
//! ```

/// Structured logging setup
pub mod logging;

/// Pluggable blob storage backends
pub mod storage;

/// The persisted health-state container
pub mod store;

/// Workout timer state machine
pub mod timer;

// Foundation types live in fittrack-core; surface them under the familiar paths
pub use fittrack_core::{config, constants, errors, models};
pub use fittrack_core::{AppError, AppResult, FitnessConfig};

/// Derived-metrics engine (BMI, goal progress, weekly aggregation)
pub use fittrack_intelligence as intelligence;
