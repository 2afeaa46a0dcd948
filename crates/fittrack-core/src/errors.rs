// ABOUTME: Unified error types for the FitTrack workspace
// ABOUTME: Defines AppError with structured context and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Unified Error Handling
//!
//! The core error taxonomy is deliberately narrow: undefined arithmetic
//! (zero height, zero target) resolves to sentinels in the metrics layer and
//! never reaches here, and persistence write-through is best-effort. What
//! remains is timer state violations, missing-id mutations, and storage I/O.

use uuid::Uuid;

use crate::models::WorkoutType;

/// Result alias used throughout the workspace
pub type AppResult<T> = Result<T, AppError>;

/// Common error type for store, timer, and storage operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A workout is already being timed; stop it before starting another
    #[error("a '{workout_type}' workout is already in progress")]
    WorkoutInProgress {
        /// Type of the workout currently running
        workout_type: WorkoutType,
    },

    /// Tick or stop was requested while the timer is idle
    #[error("no workout is currently in progress")]
    NoActiveWorkout,

    /// A mutation referenced an id that is not in the collection
    #[error("{entity} with id '{id}' not found")]
    NotFound {
        /// Kind of record that was looked up
        entity: &'static str,
        /// Id that was not found
        id: Uuid,
    },

    /// Storage backend I/O failure
    #[error("storage operation failed for key '{key}'")]
    Storage {
        /// Storage key being read or written
        key: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Persisted state could not be serialized or deserialized
    #[error("serialization failed for {context}")]
    Serialization {
        /// What was being (de)serialized
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A configuration override could not be parsed
    #[error("invalid configuration value in '{key}': {reason}")]
    InvalidConfig {
        /// Environment variable or config key
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}
