// ABOUTME: HealthStore - the owned, persisted container of all user fitness data
// ABOUTME: Lock-serialized mutations with generation-ordered async write-through
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

//! # Health state store
//!
//! `HealthStore` is the single source of truth for profile, goals, sessions,
//! daily stats, and reminders. It is an explicitly-owned container handed to
//! consumers - never a global. All mutations go through the operation set
//! below; each one mutates the state under the write lock and then
//! write-throughs the whole snapshot to the storage backend.
//!
//! Write-through is fire-and-forget: a failed persist is logged at `warn` and
//! not surfaced to the mutation caller. Call [`HealthStore::flush`] when a
//! durable write matters (shutdown, tests).
//!
//! The original UI design relied on a single-threaded event loop to make
//! read-then-write mutations race-free; here the state sits behind an async
//! `RwLock`, so each mutation is atomic even off a UI thread. Persistence
//! must not escape that serialization either: every snapshot carries a
//! generation taken under the state lock, and saves go through one writer
//! guard that drops any snapshot older than what is already durable. A slow
//! earlier save can therefore never land on top of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use fittrack_core::constants::storage::HEALTH_STATE_KEY;
use fittrack_core::constants::time::SECS_PER_MINUTE;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{
    DailyStats, FitnessGoal, HealthReminder, UserProfile, WorkoutSession,
};
use serde::{Deserialize, Serialize};

use crate::storage::StorageBackend;

/// The complete persisted state: one serialized record under one fixed key
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthState {
    /// The user's profile, once created
    pub user_profile: Option<UserProfile>,
    /// All fitness goals, active and completed
    pub fitness_goals: Vec<FitnessGoal>,
    /// All finalized workout sessions, oldest first
    pub workout_sessions: Vec<WorkoutSession>,
    /// Daily aggregate records, one per calendar day
    pub daily_stats: Vec<DailyStats>,
    /// Health reminders
    pub reminders: Vec<HealthReminder>,
}

/// Owned, persisted container of all user fitness data
///
/// Constructed with a [`StorageBackend`] and injected into every consumer.
/// Cloning is cheap and shares the same state and backend.
#[derive(Debug)]
pub struct HealthStore<S: StorageBackend> {
    state: Arc<RwLock<HealthState>>,
    backend: Arc<S>,
    /// Monotonic snapshot counter, bumped under the state write lock
    generation: Arc<AtomicU64>,
    /// Generation of the newest snapshot known to be durable; the mutex
    /// doubles as the writer guard serializing all saves
    last_persisted: Arc<Mutex<u64>>,
}

impl<S: StorageBackend> Clone for HealthStore<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            backend: Arc::clone(&self.backend),
            generation: Arc::clone(&self.generation),
            last_persisted: Arc::clone(&self.last_persisted),
        }
    }
}

impl<S: StorageBackend + 'static> HealthStore<S> {
    /// Initialize the store, loading persisted state from the backend
    ///
    /// A missing blob starts the store empty. A blob that fails to
    /// deserialize is logged and discarded in favor of the empty state -
    /// unknown enum tags inside a well-formed blob are coerced by the model
    /// layer and do not fail the load.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] only if the backend itself cannot be
    /// read.
    pub async fn load(backend: S) -> AppResult<Self> {
        let state = match backend.load(HEALTH_STATE_KEY).await? {
            Some(bytes) => match serde_json::from_slice::<HealthState>(&bytes) {
                Ok(state) => {
                    tracing::debug!(
                        goals = state.fitness_goals.len(),
                        sessions = state.workout_sessions.len(),
                        "loaded persisted health state"
                    );
                    state
                }
                Err(e) => {
                    tracing::warn!(error = %e, "persisted health state is unreadable, starting empty");
                    HealthState::default()
                }
            },
            None => HealthState::default(),
        };

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            backend: Arc::new(backend),
            generation: Arc::new(AtomicU64::new(0)),
            last_persisted: Arc::new(Mutex::new(0)),
        })
    }

    // --- Profile ---

    /// Current user profile, if one was created
    pub async fn profile(&self) -> Option<UserProfile> {
        self.state.read().await.user_profile.clone()
    }

    /// Replace the user profile
    pub async fn set_profile(&self, profile: UserProfile) {
        self.mutate(|state| state.user_profile = Some(profile)).await;
    }

    // --- Goals ---

    /// All goals, in insertion order
    pub async fn goals(&self) -> Vec<FitnessGoal> {
        self.state.read().await.fitness_goals.clone()
    }

    /// Append a new goal
    pub async fn add_goal(&self, goal: FitnessGoal) {
        self.mutate(|state| state.fitness_goals.push(goal)).await;
    }

    /// Replace the goal with the same id (full replacement, idempotent)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no goal has the given id.
    pub async fn update_goal(&self, goal: FitnessGoal) -> AppResult<()> {
        self.try_mutate(|state| {
            let slot = state
                .fitness_goals
                .iter_mut()
                .find(|g| g.id == goal.id)
                .ok_or(AppError::NotFound {
                    entity: "goal",
                    id: goal.id,
                })?;
            *slot = goal;
            Ok(())
        })
        .await
    }

    /// Remove the goal with the given id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no goal has the given id.
    pub async fn delete_goal(&self, id: Uuid) -> AppResult<()> {
        self.try_mutate(|state| {
            if !state.fitness_goals.iter().any(|g| g.id == id) {
                return Err(AppError::NotFound { entity: "goal", id });
            }
            state.fitness_goals.retain(|g| g.id != id);
            Ok(())
        })
        .await
    }

    // --- Workout sessions ---

    /// All finalized sessions, oldest first
    pub async fn sessions(&self) -> Vec<WorkoutSession> {
        self.state.read().await.workout_sessions.clone()
    }

    /// Append a finalized session without touching daily stats
    pub async fn add_session(&self, session: WorkoutSession) {
        self.mutate(|state| state.workout_sessions.push(session)).await;
    }

    /// Commit a completed workout: append the session and fold its calories,
    /// active minutes, and completion count into that day's stats record
    ///
    /// The day is taken from the session's end time (falling back to its
    /// start time for sessions finalized without one).
    pub async fn record_completed_session(&self, session: WorkoutSession) {
        let day = session
            .end_time
            .unwrap_or(session.start_time)
            .date_naive();
        let minutes =
            (session.duration_seconds as f64 / SECS_PER_MINUTE as f64).round() as u32;

        self.mutate(|state| {
            let mut stats = state
                .daily_stats
                .iter()
                .find(|s| s.date == day)
                .cloned()
                .unwrap_or_else(|| DailyStats::empty(day));
            stats.calories_burned += session.calories_burned;
            stats.active_minutes += minutes;
            stats.workouts_completed += 1;
            upsert_daily(&mut state.daily_stats, stats);

            state.workout_sessions.push(session);
        })
        .await;
    }

    // --- Daily stats ---

    /// The aggregate record for a calendar day, if any
    pub async fn daily_stats(&self, date: NaiveDate) -> Option<DailyStats> {
        self.state
            .read()
            .await
            .daily_stats
            .iter()
            .find(|s| s.date == date)
            .cloned()
    }

    /// Upsert the aggregate record for its day
    pub async fn set_daily_stats(&self, stats: DailyStats) {
        self.mutate(|state| upsert_daily(&mut state.daily_stats, stats)).await;
    }

    // --- Reminders ---

    /// All reminders, in insertion order
    pub async fn reminders(&self) -> Vec<HealthReminder> {
        self.state.read().await.reminders.clone()
    }

    /// Append a new reminder
    pub async fn add_reminder(&self, reminder: HealthReminder) {
        self.mutate(|state| state.reminders.push(reminder)).await;
    }

    /// Replace the reminder with the same id (full replacement, idempotent)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no reminder has the given id.
    pub async fn update_reminder(&self, reminder: HealthReminder) -> AppResult<()> {
        self.try_mutate(|state| {
            let slot = state
                .reminders
                .iter_mut()
                .find(|r| r.id == reminder.id)
                .ok_or(AppError::NotFound {
                    entity: "reminder",
                    id: reminder.id,
                })?;
            *slot = reminder;
            Ok(())
        })
        .await
    }

    /// Remove the reminder with the given id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no reminder has the given id.
    pub async fn delete_reminder(&self, id: Uuid) -> AppResult<()> {
        self.try_mutate(|state| {
            if !state.reminders.iter().any(|r| r.id == id) {
                return Err(AppError::NotFound {
                    entity: "reminder",
                    id,
                });
            }
            state.reminders.retain(|r| r.id != id);
            Ok(())
        })
        .await
    }

    // --- Persistence ---

    /// Full copy of the current state (for serialization and inspection)
    pub async fn state(&self) -> HealthState {
        self.state.read().await.clone()
    }

    /// Persist the current state and wait for the write to finish
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Serialization`] or [`AppError::Storage`] if the
    /// durable write fails - unlike the mutation write-through, flush
    /// surfaces failures.
    pub async fn flush(&self) -> AppResult<()> {
        let (snapshot, generation) = {
            let state = self.state.read().await;
            (state.clone(), self.generation.load(Ordering::SeqCst))
        };
        let bytes =
            serde_json::to_vec(&snapshot).map_err(|e| AppError::Serialization {
                context: "health state",
                source: e,
            })?;

        let mut written = self.last_persisted.lock().await;
        self.backend.save(HEALTH_STATE_KEY, &bytes).await?;
        if generation > *written {
            *written = generation;
        }
        Ok(())
    }

    /// Apply an infallible mutation and schedule its write-through
    async fn mutate<F>(&self, op: F)
    where
        F: FnOnce(&mut HealthState),
    {
        let (snapshot, generation) = {
            let mut state = self.state.write().await;
            op(&mut state);
            (state.clone(), self.next_generation())
        };
        self.persist(snapshot, generation);
    }

    /// Apply a fallible mutation; nothing is persisted when it fails
    async fn try_mutate<F>(&self, op: F) -> AppResult<()>
    where
        F: FnOnce(&mut HealthState) -> AppResult<()>,
    {
        let (snapshot, generation) = {
            let mut state = self.state.write().await;
            op(&mut state)?;
            (state.clone(), self.next_generation())
        };
        self.persist(snapshot, generation);
        Ok(())
    }

    /// Next snapshot generation; only called under the state write lock so
    /// the numbering matches the snapshot order
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fire-and-forget write-through of a generation-tagged snapshot
    fn persist(&self, snapshot: HealthState, generation: u64) {
        let backend = Arc::clone(&self.backend);
        let last_persisted = Arc::clone(&self.last_persisted);
        tokio::spawn(async move {
            let bytes = match serde_json::to_vec(&snapshot) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to serialize health state for write-through");
                    return;
                }
            };

            // The writer guard serializes saves; a snapshot older than what
            // is already durable is dropped, never written
            let mut written = last_persisted.lock().await;
            if generation <= *written {
                return;
            }
            match backend.save(HEALTH_STATE_KEY, &bytes).await {
                Ok(()) => *written = generation,
                Err(e) => {
                    tracing::warn!(error = %e, "health state write-through failed");
                }
            }
        });
    }
}

/// Replace the record matching `stats.date` or append it, preserving order
fn upsert_daily(existing: &mut Vec<DailyStats>, stats: DailyStats) {
    if let Some(slot) = existing.iter_mut().find(|s| s.date == stats.date) {
        *slot = stats;
    } else {
        existing.push(stats);
    }
}
