// ABOUTME: Integration tests for HealthStore mutations and persistence behavior
// ABOUTME: Covers CRUD operations, idempotence, daily stats upserts, and reload round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::{Duration, Utc, Weekday};
use uuid::Uuid;

use fittrack::models::{
    DailyStats, FitnessGoal, Gender, GoalType, HealthReminder, ReminderType, UserProfile,
    WorkoutSession, WorkoutType,
};
use fittrack::storage::{MemoryStorage, StorageBackend};
use fittrack::store::HealthStore;
use fittrack::{AppError, AppResult};

fn sample_goal() -> FitnessGoal {
    FitnessGoal::new(
        GoalType::Endurance,
        10_000.0,
        2_000.0,
        "steps",
        Utc::now() + Duration::days(30),
    )
}

fn sample_reminder() -> HealthReminder {
    HealthReminder {
        id: Uuid::new_v4(),
        reminder_type: ReminderType::Water,
        title: "Hydrate".into(),
        message: "Drink a glass of water".into(),
        time_of_day: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        repeat_days: vec![
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ],
        is_enabled: true,
    }
}

fn completed_session(workout_type: WorkoutType, duration_seconds: u64, calories: u32) -> WorkoutSession {
    let mut session = WorkoutSession::begin(workout_type);
    session.start_time = session.start_time - Duration::seconds(duration_seconds as i64);
    session.end_time = Some(Utc::now());
    session.duration_seconds = duration_seconds;
    session.calories_burned = calories;
    session
}

#[tokio::test]
async fn test_store_starts_empty() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    assert!(store.profile().await.is_none());
    assert!(store.goals().await.is_empty());
    assert!(store.sessions().await.is_empty());
    assert!(store.reminders().await.is_empty());
}

#[tokio::test]
async fn test_profile_set_and_get() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let profile = UserProfile::new("Alex", 29, Gender::Female, 170.0, 65.0);
    store.set_profile(profile.clone()).await;
    assert_eq!(store.profile().await, Some(profile));
}

#[tokio::test]
async fn test_goal_crud() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let goal = sample_goal();
    store.add_goal(goal.clone()).await;

    let mut updated = goal.clone();
    updated.current_value = 5_000.0;
    store.update_goal(updated.clone()).await.unwrap();
    assert_eq!(store.goals().await, vec![updated]);

    store.delete_goal(goal.id).await.unwrap();
    assert!(store.goals().await.is_empty());
}

#[tokio::test]
async fn test_update_goal_is_idempotent() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let first = sample_goal();
    let second = sample_goal();
    store.add_goal(first.clone()).await;
    store.add_goal(second.clone()).await;

    let mut replacement = first.clone();
    replacement.current_value = 9_000.0;
    store.update_goal(replacement.clone()).await.unwrap();
    let after_once = store.goals().await;
    store.update_goal(replacement.clone()).await.unwrap();
    let after_twice = store.goals().await;

    assert_eq!(after_once, after_twice);
    assert_eq!(after_twice, vec![replacement, second]);
}

#[tokio::test]
async fn test_goal_mutations_on_missing_id() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let unseen = sample_goal();

    let err = store.update_goal(unseen.clone()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "goal", .. }));

    let err = store.delete_goal(unseen.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "goal", .. }));
}

#[tokio::test]
async fn test_completed_goal_is_not_auto_reverted() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let mut goal = sample_goal();
    goal.is_completed = true;
    store.add_goal(goal.clone()).await;

    // Progress updates preserve whatever the caller passes; only the caller
    // ever flips is_completed back
    let mut updated = goal.clone();
    updated.current_value = 1.0;
    store.update_goal(updated).await.unwrap();
    assert!(store.goals().await[0].is_completed);
}

#[tokio::test]
async fn test_reminder_crud() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let reminder = sample_reminder();
    store.add_reminder(reminder.clone()).await;

    let mut updated = reminder.clone();
    updated.is_enabled = false;
    store.update_reminder(updated.clone()).await.unwrap();
    assert_eq!(store.reminders().await, vec![updated]);

    store.delete_reminder(reminder.id).await.unwrap();
    assert!(store.reminders().await.is_empty());

    let err = store.delete_reminder(reminder.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "reminder", .. }));
}

#[tokio::test]
async fn test_daily_stats_upsert_replaces_same_day() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let today = Utc::now().date_naive();

    let mut stats = DailyStats::empty(today);
    stats.steps = 4_000;
    store.set_daily_stats(stats.clone()).await;

    stats.steps = 9_000;
    store.set_daily_stats(stats.clone()).await;

    assert_eq!(store.daily_stats(today).await, Some(stats));
}

#[tokio::test]
async fn test_record_completed_session_accumulates_daily_stats() {
    let store = HealthStore::load(MemoryStorage::new()).await.unwrap();
    let today = Utc::now().date_naive();

    store
        .record_completed_session(completed_session(WorkoutType::Running, 1800, 300))
        .await;
    store
        .record_completed_session(completed_session(WorkoutType::Yoga, 600, 30))
        .await;

    let stats = store.daily_stats(today).await.unwrap();
    assert_eq!(stats.calories_burned, 330);
    assert_eq!(stats.active_minutes, 40);
    assert_eq!(stats.workouts_completed, 2);
    assert_eq!(store.sessions().await.len(), 2);
}

#[tokio::test]
async fn test_flush_and_reload_round_trip() {
    let backend = MemoryStorage::new();
    let store = HealthStore::load(backend.clone()).await.unwrap();

    store
        .set_profile(UserProfile::new("Alex", 29, Gender::Male, 180.0, 75.0))
        .await;
    store.add_goal(sample_goal()).await;
    store.add_reminder(sample_reminder()).await;
    store
        .record_completed_session(completed_session(WorkoutType::Cycling, 2400, 320))
        .await;
    store.flush().await.unwrap();

    let reloaded = HealthStore::load(backend).await.unwrap();
    assert_eq!(reloaded.state().await, store.state().await);
}

/// Backend whose first save stalls, exposing any unordered write-through
#[derive(Debug, Clone, Default)]
struct SlowFirstSaveStorage {
    inner: MemoryStorage,
    saves: Arc<AtomicU32>,
}

#[async_trait::async_trait]
impl StorageBackend for SlowFirstSaveStorage {
    async fn load(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        self.inner.load(key).await
    }

    async fn save(&self, key: &str, bytes: &[u8]) -> AppResult<()> {
        if self.saves.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(std::time::Duration::from_millis(300)).await;
        }
        self.inner.save(key, bytes).await
    }

    async fn clear(&self, key: &str) -> AppResult<()> {
        self.inner.clear(key).await
    }
}

#[tokio::test]
async fn test_slow_earlier_save_cannot_clobber_newer_snapshot() {
    let backend = SlowFirstSaveStorage::default();
    let store = HealthStore::load(backend.clone()).await.unwrap();

    let first = UserProfile::new("Sam", 41, Gender::Other, 168.0, 61.0);
    let mut second = first.clone();
    second.weight_kg = 59.5;

    store.set_profile(first).await;
    store.set_profile(second.clone()).await;

    // Let both background write-throughs settle, the stalled one included
    tokio::time::sleep(std::time::Duration::from_millis(600)).await;

    let reloaded = HealthStore::load(backend).await.unwrap();
    assert_eq!(reloaded.profile().await, Some(second));
}

#[tokio::test]
async fn test_corrupt_blob_starts_empty() {
    use fittrack::constants::storage::HEALTH_STATE_KEY;

    let backend = MemoryStorage::new();
    backend
        .save(HEALTH_STATE_KEY, b"not json at all")
        .await
        .unwrap();

    let store = HealthStore::load(backend).await.unwrap();
    assert!(store.profile().await.is_none());
    assert!(store.goals().await.is_empty());
}
