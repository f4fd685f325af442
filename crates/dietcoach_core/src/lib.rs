//! Core domain logic for DietCoach, a single-user diet and fitness tracker.
//! This crate is the single source of truth for tracking invariants.

pub mod catalog;
pub mod config;
pub mod db;
pub mod estimate;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, TrackerConfig};
pub use estimate::{CatalogEstimator, EstimateError, NutritionEstimator};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::daily_log::{
    CustomExerciseEntry, CustomMealEntry, DailyLog, DailyLogPatch, MealEntry, MealSlot,
};
pub use model::macros::Macros;
pub use model::profile::{Gender, UserProfile, WorkoutMode};
pub use model::weight::{WeightEntry, WeightHistory};
pub use repo::state_repo::{
    LogsByDate, RepoError, RepoResult, SqliteStateRepository, StateRepository,
};
pub use service::summary::{DaySummary, WeightStats, WeightWindow};
pub use uuid::Uuid;

pub use service::tracker_service::{
    StateSnapshot, Tracker, TrackerError, TrackerResult, MAX_HISTORY_DAYS, ROLLOVER_CHECK_INTERVAL,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
