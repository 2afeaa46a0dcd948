// ABOUTME: Workout timer state machine - Idle/Running with a tick-driven elapsed counter
// ABOUTME: Finalizes sessions into the store with derived calories and daily stats upsert
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

//! # Workout timer
//!
//! A start/stop stopwatch for one workout at a time. Elapsed time is an
//! integer counter advanced by [`WorkoutTimer::tick`]; the caller (a UI loop,
//! or a tokio interval as in the demo seeder) schedules ticks at the nominal
//! one-second period. Ticks are not wall-clock-exact and no drift correction
//! is applied - duration is defined by the counter, not by timestamps.
//!
//! There is no paused state: stopping always finalizes the session, appends
//! it to the store, and folds it into that day's stats. Starting while a
//! workout is running is rejected rather than silently replacing the
//! in-progress session.

use chrono::Utc;

use fittrack_core::config::FitnessConfig;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{WorkoutSession, WorkoutType};
use fittrack_intelligence::metrics::{estimate_calories, format_elapsed};

use crate::storage::StorageBackend;
use crate::store::HealthStore;

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No workout is being timed
    Idle,
    /// A workout is in progress
    Running,
}

/// Live view of the in-progress workout, recomputed each tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    /// Type of the running workout
    pub workout_type: WorkoutType,
    /// Elapsed seconds counted so far
    pub elapsed_seconds: u64,
    /// Elapsed time as zero-padded `HH:MM:SS`
    pub formatted_elapsed: String,
    /// Live calorie estimate for the elapsed time
    pub calories_burned: u32,
}

/// One in-progress workout plus its elapsed counter
#[derive(Debug, Clone)]
struct ActiveWorkout {
    session: WorkoutSession,
    elapsed_seconds: u64,
}

/// Start/stop elapsed-time counter driving live derived stats
#[derive(Debug, Clone)]
pub struct WorkoutTimer {
    config: FitnessConfig,
    active: Option<ActiveWorkout>,
}

impl WorkoutTimer {
    /// Create an idle timer using the given calorie rate table
    #[must_use]
    pub const fn new(config: FitnessConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    /// Current state of the timer
    #[must_use]
    pub const fn state(&self) -> TimerState {
        if self.active.is_some() {
            TimerState::Running
        } else {
            TimerState::Idle
        }
    }

    /// Begin timing a workout of the given type
    ///
    /// Creates the in-progress session (`start_time = now`, duration 0) and
    /// resets the elapsed counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WorkoutInProgress`] if a workout is already
    /// running; stop it first.
    pub fn start(&mut self, workout_type: WorkoutType) -> AppResult<()> {
        if let Some(active) = &self.active {
            return Err(AppError::WorkoutInProgress {
                workout_type: active.session.workout_type,
            });
        }
        tracing::debug!(%workout_type, "starting workout");
        self.active = Some(ActiveWorkout {
            session: WorkoutSession::begin(workout_type),
            elapsed_seconds: 0,
        });
        Ok(())
    }

    /// Advance the elapsed counter by exactly one tick
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoActiveWorkout`] if the timer is idle.
    pub fn tick(&mut self) -> AppResult<TimerSnapshot> {
        let active = self.active.as_mut().ok_or(AppError::NoActiveWorkout)?;
        active.elapsed_seconds += 1;
        let snapshot = Self::snapshot_of(&self.config, active);
        Ok(snapshot)
    }

    /// Live view of the running workout without advancing the counter
    #[must_use]
    pub fn snapshot(&self) -> Option<TimerSnapshot> {
        self.active
            .as_ref()
            .map(|active| Self::snapshot_of(&self.config, active))
    }

    /// Stop the running workout and commit it to the store
    ///
    /// Finalizes the session (`end_time = now`, duration from the counter,
    /// calories from the counter and the type's rate), appends it to the
    /// session list, upserts the current day's stats, and resets to idle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoActiveWorkout`] if the timer is idle.
    pub async fn stop<S: StorageBackend + 'static>(
        &mut self,
        store: &HealthStore<S>,
    ) -> AppResult<WorkoutSession> {
        let active = self.active.take().ok_or(AppError::NoActiveWorkout)?;

        let mut session = active.session;
        session.end_time = Some(Utc::now());
        session.duration_seconds = active.elapsed_seconds;
        session.calories_burned = estimate_calories(
            active.elapsed_seconds,
            self.config.calorie_rate(session.workout_type),
        );

        tracing::info!(
            workout_type = %session.workout_type,
            duration_seconds = session.duration_seconds,
            calories_burned = session.calories_burned,
            "workout completed"
        );

        store.record_completed_session(session.clone()).await;
        Ok(session)
    }

    fn snapshot_of(config: &FitnessConfig, active: &ActiveWorkout) -> TimerSnapshot {
        let workout_type = active.session.workout_type;
        TimerSnapshot {
            workout_type,
            elapsed_seconds: active.elapsed_seconds,
            formatted_elapsed: format_elapsed(active.elapsed_seconds),
            calories_burned: estimate_calories(
                active.elapsed_seconds,
                config.calorie_rate(workout_type),
            ),
        }
    }
}
