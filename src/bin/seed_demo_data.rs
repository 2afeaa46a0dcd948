// ABOUTME: Demo data seeder for FitTrack development and UI testing
// ABOUTME: Populates the store with a profile, goals, and a week of workout sessions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 FitTrack Contributors

//! Demo data seeder for FitTrack.
//!
//! Populates local storage with realistic demo data so a UI build has
//! something to render: a profile, a few goals in progress, and a trailing
//! week of workout sessions. Finishes by printing the derived weekly report.
//!
//! Usage:
//! ```bash
//! # Seed into the platform data directory
//! cargo run --bin seed-demo-data
//!
//! # Seed into a specific directory, wiping previous state first
//! cargo run --bin seed-demo-data -- --data-dir /tmp/fittrack --reset
//!
//! # Deterministic output
//! cargo run --bin seed-demo-data -- --seed 42
//! ```

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Days, Duration as ChronoDuration, Utc};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use fittrack::constants::storage::HEALTH_STATE_KEY;
use fittrack::intelligence::metrics::{bmi, estimate_calories, BmiCategory};
use fittrack::intelligence::weekly::weekly_report;
use fittrack::logging::{init_logging, LoggingConfig};
use fittrack::models::{FitnessGoal, Gender, GoalType, UserProfile, WorkoutSession, WorkoutType};
use fittrack::storage::{FileStorage, StorageBackend};
use fittrack::store::HealthStore;
use fittrack::FitnessConfig;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "FitTrack demo data seeder",
    long_about = "Populate local storage with a demo profile, goals, and a week of workouts"
)]
struct SeedArgs {
    /// Data directory override (defaults to the platform data dir)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Remove any existing state before seeding
    #[arg(long)]
    reset: bool,

    /// RNG seed for reproducible demo data
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&LoggingConfig::from_env())?;
    let args = SeedArgs::parse();

    let storage = match args.data_dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::in_data_dir(),
    };
    info!(dir = %storage.dir().display(), "seeding demo data");

    if args.reset {
        storage.clear(HEALTH_STATE_KEY).await?;
        info!("existing state cleared");
    }

    let store = HealthStore::load(storage).await?;
    let config = FitnessConfig::load()?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    seed_profile(&store).await;
    seed_goals(&store).await;
    seed_sessions(&store, &config, &mut rng).await;
    store.flush().await?;

    print_summary(&store).await;
    Ok(())
}

async fn seed_profile(store: &HealthStore<FileStorage>) {
    let mut profile = UserProfile::new("Demo User", 32, Gender::Other, 173.0, 70.5);
    profile.resting_heart_rate = Some(58);
    if let Some(value) = bmi(profile.weight_kg, profile.height_cm) {
        info!(bmi = format!("{value:.1}"), category = %BmiCategory::from_bmi(value), "profile seeded");
    }
    store.set_profile(profile).await;
}

async fn seed_goals(store: &HealthStore<FileStorage>) {
    let in_a_month = Utc::now() + ChronoDuration::days(30);

    let mut weight_loss = FitnessGoal::new(GoalType::WeightLoss, 66.0, 70.5, "kg", in_a_month);
    weight_loss.current_value = 69.2; // some progress already
    store.add_goal(weight_loss).await;

    store
        .add_goal(FitnessGoal::new(
            GoalType::Endurance,
            10_000.0,
            6_500.0,
            "steps",
            in_a_month,
        ))
        .await;
    info!(count = 2, "goals seeded");
}

async fn seed_sessions(
    store: &HealthStore<FileStorage>,
    config: &FitnessConfig,
    rng: &mut StdRng,
) {
    let workout_types = [
        WorkoutType::Running,
        WorkoutType::Walking,
        WorkoutType::Cycling,
        WorkoutType::Strength,
        WorkoutType::Yoga,
    ];

    let mut seeded = 0;
    for days_ago in 0..7_u64 {
        // A rest day roughly every third day
        if rng.gen_range(0..3) == 0 {
            continue;
        }
        let workout_type = workout_types[rng.gen_range(0..workout_types.len())];
        let duration_seconds = u64::from(rng.gen_range(15..55_u32)) * 60;
        let start_time = Utc::now()
            .checked_sub_days(Days::new(days_ago))
            .unwrap_or_else(Utc::now)
            - ChronoDuration::seconds(duration_seconds as i64);

        let mut session = WorkoutSession::begin(workout_type);
        session.start_time = start_time;
        session.end_time = Some(start_time + ChronoDuration::seconds(duration_seconds as i64));
        session.duration_seconds = duration_seconds;
        session.calories_burned =
            estimate_calories(duration_seconds, config.calorie_rate(workout_type));

        store.record_completed_session(session).await;
        seeded += 1;
    }
    info!(count = seeded, "workout sessions seeded");
}

async fn print_summary(store: &HealthStore<FileStorage>) {
    let sessions = store.sessions().await;
    let report = weekly_report(&sessions, Utc::now().date_naive());
    info!(
        workouts = report.totals.workouts,
        active_minutes = report.totals.active_minutes,
        calories_burned = report.totals.calories_burned,
        "weekly totals"
    );
    for day in &report.days {
        info!(
            date = %day.date,
            workouts = day.workouts,
            minutes = day.active_minutes,
            calories = day.calories_burned,
            "daily summary"
        );
    }
}
