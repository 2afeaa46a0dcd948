// ABOUTME: Core data models for the FitTrack fitness tracker
// ABOUTME: Re-exports UserProfile, FitnessGoal, WorkoutSession and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Data Models
//!
//! Plain data shapes owned by the state store. The UI layer holds only
//! transient copies (form fields in progress) until it commits them through a
//! store mutation.
//!
//! ## Design Principles
//!
//! - **Serializable**: every model round-trips through JSON for the persisted blob
//! - **Closed enums**: type tags are closed sets; unknown tags read back from
//!   persisted state coerce to an explicit catch-all variant instead of
//!   failing the whole load
//! - **Type safe**: timestamps are `chrono` types, identities are `Uuid`

// Domain modules
mod goal;
mod profile;
mod reminder;
mod stats;
mod workout;

pub use goal::{FitnessGoal, GoalType};
pub use profile::{Gender, UserProfile};
pub use reminder::{HealthReminder, ReminderType};
pub use stats::DailyStats;
pub use workout::{WorkoutSession, WorkoutType};
