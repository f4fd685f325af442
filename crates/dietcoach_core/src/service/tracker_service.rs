//! Tracker use-case service: the single in-process state container.
//!
//! # Responsibility
//! - Hold today's date, logs-by-date, weight history and profile.
//! - Validate mutations against the reference catalog, then persist.
//! - Derive summaries, history and weight statistics.
//!
//! # Invariants
//! - Every successful mutation persists all three state blobs.
//! - A rejected mutation leaves in-memory and persisted state unchanged.
//! - Logs are materialized lazily; reading a date never creates an entry.
//! - Load failures degrade to defaults and never abort startup.

use crate::catalog::{find_exercise, find_meal_option, find_supplement, scheduled_supplements};
use crate::config::TrackerConfig;
use crate::estimate::NutritionEstimator;
use crate::model::daily_log::{
    CustomExerciseEntry, CustomMealEntry, DailyLog, DailyLogPatch, MealEntry, MealSlot,
};
use crate::model::macros::Macros;
use crate::model::profile::{UserProfile, WorkoutMode};
use crate::model::weight::WeightHistory;
use crate::repo::state_repo::{
    LogsByDate, RepoError, RepoResult, StateRepository, LOGS_KEY, PROFILE_KEY, WEIGHTS_KEY,
};
use crate::service::summary::{summarize_day, weight_stats, DaySummary, WeightStats, WeightWindow};
use chrono::{DateTime, Days, NaiveDate, Utc};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use uuid::Uuid;

/// How often a long-running host should call `Tracker::refresh_today`.
pub const ROLLOVER_CHECK_INTERVAL: Duration = Duration::from_secs(60);
const MAX_WEIGHT_KG: f64 = 500.0;
const MAX_HEIGHT_CM: f64 = 300.0;
/// Upper bound for `Tracker::history`.
pub const MAX_HISTORY_DAYS: u32 = 366;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Service error for tracker use-cases.
#[derive(Debug)]
pub enum TrackerError {
    UnknownMealOption { slot: MealSlot, id: String },
    UnknownExercise { date: NaiveDate, id: String },
    UnknownSupplement(String),
    SupplementNotScheduled { date: NaiveDate, id: String },
    /// Supplement needs a fat-containing meal, and breakfast is not logged.
    SupplementRequiresMeal(String),
    CustomEntryNotFound(String),
    InvalidInput(String),
    Repo(RepoError),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMealOption { slot, id } => {
                write!(f, "unknown meal option `{id}` for slot {slot}")
            }
            Self::UnknownExercise { date, id } => {
                write!(f, "exercise `{id}` is not in the plan for {date}")
            }
            Self::UnknownSupplement(id) => write!(f, "unknown supplement `{id}`"),
            Self::SupplementNotScheduled { date, id } => {
                write!(f, "supplement `{id}` is not scheduled on {date}")
            }
            Self::SupplementRequiresMeal(id) => write!(
                f,
                "supplement `{id}` must be taken with a fat-containing breakfast; log breakfast first"
            ),
            Self::CustomEntryNotFound(id) => write!(f, "custom entry not found: {id}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TrackerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Export envelope of everything the tracker persists.
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot<'a> {
    pub logs: &'a LogsByDate,
    pub weights: &'a WeightHistory,
    pub profile: &'a UserProfile,
}

/// Stateful tracker over a repository implementation.
pub struct Tracker<R: StateRepository> {
    repo: R,
    config: TrackerConfig,
    today: NaiveDate,
    logs: LogsByDate,
    weights: WeightHistory,
    profile: UserProfile,
}

impl<R: StateRepository> Tracker<R> {
    /// Loads persisted state, falling back to defaults per blob on failure.
    pub fn load(repo: R, today: NaiveDate, config: TrackerConfig) -> Self {
        let logs = load_or_default(repo.load_logs(), LOGS_KEY);
        let weights = load_or_default(repo.load_weights(), WEIGHTS_KEY);
        let profile = load_or_default(repo.load_profile(), PROFILE_KEY);

        info!(
            "event=state_load module=tracker status=ok today={} logs={} weights={}",
            today,
            logs.len(),
            weights.len()
        );

        Self {
            repo,
            config,
            today,
            logs,
            weights,
            profile,
        }
    }

    /// Loads state with "today" derived from `now` and the configured offset.
    pub fn load_at(repo: R, now: DateTime<Utc>, config: TrackerConfig) -> Self {
        let today = config.local_date(now);
        Self::load(repo, today, config)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn weights(&self) -> &WeightHistory {
        &self.weights
    }

    pub fn logs(&self) -> &LogsByDate {
        &self.logs
    }

    /// Log for `date`, or an empty one when nothing was recorded.
    pub fn log_for(&self, date: NaiveDate) -> Cow<'_, DailyLog> {
        match self.logs.get(&date) {
            Some(log) => Cow::Borrowed(log),
            None => Cow::Owned(DailyLog::empty(date)),
        }
    }

    pub fn current_log(&self) -> Cow<'_, DailyLog> {
        self.log_for(self.today)
    }

    /// Points the tracker at another day, e.g. to backfill a missed entry.
    pub fn set_today(&mut self, date: NaiveDate) {
        if date != self.today {
            debug!(
                "event=set_today module=tracker from={} to={}",
                self.today, date
            );
            self.today = date;
        }
    }

    /// Day-rollover check. Returns `true` when the calendar day changed.
    pub fn refresh_today(&mut self, now: DateTime<Utc>) -> bool {
        let date = self.config.local_date(now);
        if date == self.today {
            return false;
        }
        info!(
            "event=day_rollover module=tracker from={} to={}",
            self.today, date
        );
        self.today = date;
        true
    }

    /// Partially merges `patch` into today's log.
    ///
    /// Meal option ids and completed exercise ids present in the patch are
    /// validated against the catalog for today. A patched weight is mirrored
    /// into the weight history; `Some(None)` removes today's weigh-in.
    pub fn update_log(&mut self, patch: DailyLogPatch) -> TrackerResult<()> {
        if let Some(meals) = &patch.meals {
            for (slot, entry) in meals {
                self.require_meal_option(*slot, &entry.id)?;
            }
        }
        if let Some(completed) = &patch.completed_exercises {
            for id in completed {
                self.require_exercise(id)?;
            }
        }
        if let Some(taken) = &patch.taken_supplements {
            for id in taken {
                self.require_scheduled_supplement(id)?;
            }
        }
        if let Some(custom_meals) = &patch.custom_meals {
            for entry in custom_meals {
                validate_custom_meal(&entry.name, &entry.macros, entry.qty)?;
            }
        }
        if let Some(custom_exercises) = &patch.custom_exercises {
            for entry in custom_exercises {
                validate_custom_exercise(&entry.name, entry.kcal_burn)?;
            }
        }
        if let Some(Some(weight)) = patch.weight {
            validate_weight(weight)?;
        }

        let weight = patch.weight;
        self.with_weight_change(weight, |tracker| {
            tracker.mutate_today("update_log", |log| {
                log.apply(patch);
                Ok(())
            })
        })
    }

    /// Selects a catalog option for `slot`, replacing any previous choice.
    pub fn select_meal(&mut self, slot: MealSlot, option_id: &str, qty: f64) -> TrackerResult<()> {
        self.require_meal_option(slot, option_id)?;
        if !qty.is_finite() || qty <= 0.0 {
            return Err(TrackerError::InvalidInput(format!(
                "meal quantity must be positive, got {qty}"
            )));
        }
        self.mutate_today("select_meal", |log| {
            log.meals.insert(slot, MealEntry::new(option_id, qty));
            Ok(())
        })
    }

    /// Clears `slot`. Returns whether anything was selected.
    pub fn clear_meal(&mut self, slot: MealSlot) -> TrackerResult<bool> {
        self.mutate_today("clear_meal", |log| Ok(log.meals.remove(&slot).is_some()))
    }

    /// Appends a free-form food entry. Returns its index.
    pub fn add_custom_meal(
        &mut self,
        name: &str,
        macros: Macros,
        qty: f64,
    ) -> TrackerResult<usize> {
        let name = name.trim();
        validate_custom_meal(name, &macros, qty)?;
        self.mutate_today("add_custom_meal", |log| {
            log.custom_meals.push(CustomMealEntry {
                name: name.to_string(),
                macros,
                qty,
            });
            Ok(log.custom_meals.len() - 1)
        })
    }

    pub fn remove_custom_meal(&mut self, index: usize) -> TrackerResult<CustomMealEntry> {
        self.mutate_today("remove_custom_meal", |log| {
            if index >= log.custom_meals.len() {
                return Err(TrackerError::CustomEntryNotFound(format!("meal #{index}")));
            }
            Ok(log.custom_meals.remove(index))
        })
    }

    /// Toggles completion of a planned exercise. Returns the new state.
    pub fn toggle_exercise(&mut self, id: &str) -> TrackerResult<bool> {
        self.require_exercise(id)?;
        self.mutate_today("toggle_exercise", |log| {
            if log.is_exercise_completed(id) {
                log.completed_exercises.retain(|done| done != id);
                Ok(false)
            } else {
                log.completed_exercises.push(id.to_string());
                Ok(true)
            }
        })
    }

    pub fn add_custom_exercise(
        &mut self,
        name: &str,
        sets: u32,
        reps: &str,
        kcal_burn: f64,
    ) -> TrackerResult<Uuid> {
        let name = name.trim();
        validate_custom_exercise(name, kcal_burn)?;
        let entry = CustomExerciseEntry {
            id: Uuid::new_v4(),
            name: name.to_string(),
            sets,
            reps: reps.trim().to_string(),
            kcal_burn,
            timestamp: Utc::now().timestamp_millis(),
        };
        let id = entry.id;
        self.mutate_today("add_custom_exercise", |log| {
            log.custom_exercises.push(entry);
            Ok(id)
        })
    }

    pub fn remove_custom_exercise(&mut self, id: Uuid) -> TrackerResult<CustomExerciseEntry> {
        self.mutate_today("remove_custom_exercise", |log| {
            let index = log
                .custom_exercises
                .iter()
                .position(|entry| entry.id == id)
                .ok_or_else(|| TrackerError::CustomEntryNotFound(id.to_string()))?;
            Ok(log.custom_exercises.remove(index))
        })
    }

    /// Adds `delta` walking minutes (may be negative). Floors at zero.
    pub fn adjust_walking(&mut self, delta: i64) -> TrackerResult<u32> {
        self.mutate_today("adjust_walking", |log| {
            log.walking_minutes = apply_delta(log.walking_minutes, delta);
            Ok(log.walking_minutes)
        })
    }

    /// Adds `delta_ml` water (may be negative). Floors at zero.
    pub fn add_water(&mut self, delta_ml: i64) -> TrackerResult<u32> {
        self.mutate_today("add_water", |log| {
            log.water_intake_ml = apply_delta(log.water_intake_ml, delta_ml);
            Ok(log.water_intake_ml)
        })
    }

    /// Toggles a scheduled supplement. Returns the new taken state.
    pub fn toggle_supplement(&mut self, id: &str) -> TrackerResult<bool> {
        let supplement = self.require_scheduled_supplement(id)?;
        self.mutate_today("toggle_supplement", |log| {
            if log.is_supplement_taken(id) {
                log.taken_supplements.retain(|taken| taken != id);
                return Ok(false);
            }
            if supplement.requires_fat && !log.meals.contains_key(&MealSlot::Breakfast) {
                return Err(TrackerError::SupplementRequiresMeal(id.to_string()));
            }
            log.taken_supplements.push(id.to_string());
            Ok(true)
        })
    }

    /// Records today's weight on the log and in the weight history.
    pub fn record_weight(&mut self, kg: f64) -> TrackerResult<()> {
        validate_weight(kg)?;
        self.with_weight_change(Some(Some(kg)), |tracker| {
            tracker.mutate_today("record_weight", |log| {
                log.weight = Some(kg);
                Ok(())
            })
        })
    }

    pub fn set_profile(&mut self, profile: UserProfile) -> TrackerResult<()> {
        validate_profile(&profile)?;
        let previous = std::mem::replace(&mut self.profile, profile);
        if let Err(err) = self.persist("set_profile") {
            self.profile = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn set_height(&mut self, height_cm: f64) -> TrackerResult<()> {
        let profile = UserProfile {
            height: height_cm,
            ..self.profile.clone()
        };
        self.set_profile(profile)
    }

    pub fn set_workout_mode(&mut self, mode: WorkoutMode) -> TrackerResult<()> {
        let profile = UserProfile {
            workout_mode: mode,
            ..self.profile.clone()
        };
        self.set_profile(profile)
    }

    /// Derived metrics for `date`.
    pub fn summary_for(&self, date: NaiveDate) -> DaySummary {
        summarize_day(&self.log_for(date), &self.weights, &self.profile, &self.config)
    }

    pub fn today_summary(&self) -> DaySummary {
        self.summary_for(self.today)
    }

    /// Summaries for the last `days` days ending today, newest first.
    ///
    /// `days` is capped at `MAX_HISTORY_DAYS`.
    pub fn history(&self, days: u32) -> Vec<DaySummary> {
        (0..days.min(MAX_HISTORY_DAYS))
            .filter_map(|offset| self.today.checked_sub_days(Days::new(u64::from(offset))))
            .map(|date| self.summary_for(date))
            .collect()
    }

    /// Trend statistics and deficit plans from the current weight.
    pub fn weight_stats(&self, window: WeightWindow) -> WeightStats {
        let current = self
            .log_for(self.today)
            .weight
            .or_else(|| self.weights.latest().map(|entry| entry.weight));
        weight_stats(&self.weights, current, &self.profile, window)
    }

    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            logs: &self.logs,
            weights: &self.weights,
            profile: &self.profile,
        }
    }

    /// Deletes all persisted state and resets to defaults.
    pub fn purge(&mut self) -> TrackerResult<()> {
        self.repo.purge().map_err(|err| {
            error!(
                "event=state_purge module=tracker status=error error={}",
                err
            );
            TrackerError::from(err)
        })?;
        self.logs.clear();
        self.weights = WeightHistory::new();
        self.profile = UserProfile::default();
        info!("event=state_purge module=tracker status=ok");
        Ok(())
    }

    /// Best-effort macro estimate for a free-text food description.
    ///
    /// Returns `None` when the estimator fails so the caller can fall back to
    /// manual entry.
    pub fn estimate_custom_meal(
        &self,
        description: &str,
        estimator: &dyn NutritionEstimator,
    ) -> Option<Macros> {
        match estimator.estimate_nutrition(description) {
            Ok(macros) => {
                debug!(
                    "event=estimate module=tracker kind=meal status=ok estimator={} kcal={}",
                    estimator.estimator_id(),
                    macros.kcal
                );
                Some(macros)
            }
            Err(err) => {
                warn!(
                    "event=estimate module=tracker kind=meal status=fallback estimator={} error={}",
                    estimator.estimator_id(),
                    err
                );
                None
            }
        }
    }

    /// Best-effort burn estimate for a free-text exercise description.
    pub fn estimate_custom_exercise(
        &self,
        description: &str,
        sets: u32,
        estimator: &dyn NutritionEstimator,
    ) -> Option<f64> {
        match estimator.estimate_exercise_burn(description, sets) {
            Ok(kcal) => Some(kcal),
            Err(err) => {
                warn!(
                    "event=estimate module=tracker kind=exercise status=fallback estimator={} error={}",
                    estimator.estimator_id(),
                    err
                );
                None
            }
        }
    }

    fn require_meal_option(&self, slot: MealSlot, id: &str) -> TrackerResult<()> {
        find_meal_option(slot, id)
            .map(|_| ())
            .ok_or_else(|| TrackerError::UnknownMealOption {
                slot,
                id: id.to_string(),
            })
    }

    fn require_exercise(&self, id: &str) -> TrackerResult<()> {
        find_exercise(self.today, self.profile.workout_mode, id)
            .map(|_| ())
            .ok_or_else(|| TrackerError::UnknownExercise {
                date: self.today,
                id: id.to_string(),
            })
    }

    fn require_scheduled_supplement(
        &self,
        id: &str,
    ) -> TrackerResult<&'static crate::model::catalog::Supplement> {
        let supplement =
            find_supplement(id).ok_or_else(|| TrackerError::UnknownSupplement(id.to_string()))?;
        if !scheduled_supplements(self.today)
            .iter()
            .any(|scheduled| scheduled.id == supplement.id)
        {
            return Err(TrackerError::SupplementNotScheduled {
                date: self.today,
                id: id.to_string(),
            });
        }
        Ok(supplement)
    }

    /// Applies a weigh-in change for today to the history, runs `mutation`,
    /// and restores the history if it fails.
    fn with_weight_change<T>(
        &mut self,
        change: Option<Option<f64>>,
        mutation: impl FnOnce(&mut Self) -> TrackerResult<T>,
    ) -> TrackerResult<T> {
        let Some(weight) = change else {
            return mutation(self);
        };
        let previous = self.weights.clone();
        match weight {
            Some(kg) => self.weights.record(self.today, kg),
            None => {
                self.weights.remove(self.today);
            }
        }
        let result = mutation(self);
        if result.is_err() {
            self.weights = previous;
        }
        result
    }

    /// Applies `change` to a copy of today's log, commits it, then persists.
    ///
    /// A failing `change` leaves state untouched; a failing write rolls the
    /// in-memory log back.
    fn mutate_today<T>(
        &mut self,
        operation: &'static str,
        change: impl FnOnce(&mut DailyLog) -> TrackerResult<T>,
    ) -> TrackerResult<T> {
        let today = self.today;
        let mut log = self.log_for(today).into_owned();
        let output = change(&mut log)?;

        let previous = self.logs.insert(today, log);
        if let Err(err) = self.persist(operation) {
            match previous {
                Some(previous) => self.logs.insert(today, previous),
                None => self.logs.remove(&today),
            };
            return Err(err);
        }
        Ok(output)
    }

    fn persist(&self, operation: &'static str) -> TrackerResult<()> {
        match self.repo.save_all(&self.logs, &self.weights, &self.profile) {
            Ok(()) => {
                debug!(
                    "event=state_persist module=tracker status=ok op={} date={}",
                    operation, self.today
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=state_persist module=tracker status=error op={} error={}",
                    operation, err
                );
                Err(err.into())
            }
        }
    }
}

fn load_or_default<T: Default>(result: RepoResult<Option<T>>, key: &str) -> T {
    match result {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!("event=state_load module=tracker status=empty key={key}");
            T::default()
        }
        Err(err) => {
            warn!(
                "event=state_load module=tracker status=fallback key={} error={}",
                key, err
            );
            T::default()
        }
    }
}

fn apply_delta(value: u32, delta: i64) -> u32 {
    let updated = i64::from(value).saturating_add(delta);
    updated.clamp(0, i64::from(u32::MAX)) as u32
}

fn validate_weight(kg: f64) -> TrackerResult<()> {
    if !kg.is_finite() || kg <= 0.0 || kg > MAX_WEIGHT_KG {
        return Err(TrackerError::InvalidInput(format!(
            "weight must be within (0, {MAX_WEIGHT_KG}] kg, got {kg}"
        )));
    }
    Ok(())
}

fn validate_custom_meal(name: &str, macros: &Macros, qty: f64) -> TrackerResult<()> {
    if name.trim().is_empty() {
        return Err(TrackerError::InvalidInput(
            "custom meal name cannot be empty".to_string(),
        ));
    }
    let values = [macros.kcal, macros.protein, macros.carbs, macros.fat, macros.fiber];
    if values
        .iter()
        .chain(macros.grams.iter())
        .any(|value| !value.is_finite() || *value < 0.0)
    {
        return Err(TrackerError::InvalidInput(format!(
            "custom meal `{name}` has negative or non-finite macros"
        )));
    }
    if !qty.is_finite() || qty <= 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "custom meal quantity must be positive, got {qty}"
        )));
    }
    Ok(())
}

fn validate_custom_exercise(name: &str, kcal_burn: f64) -> TrackerResult<()> {
    if name.trim().is_empty() {
        return Err(TrackerError::InvalidInput(
            "custom exercise name cannot be empty".to_string(),
        ));
    }
    if !kcal_burn.is_finite() || kcal_burn < 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "custom exercise burn must be non-negative, got {kcal_burn}"
        )));
    }
    Ok(())
}

fn validate_profile(profile: &UserProfile) -> TrackerResult<()> {
    if !profile.height.is_finite() || profile.height <= 0.0 || profile.height > MAX_HEIGHT_CM {
        return Err(TrackerError::InvalidInput(format!(
            "height must be within (0, {MAX_HEIGHT_CM}] cm, got {}",
            profile.height
        )));
    }
    if !profile.activity_level.is_finite() || profile.activity_level <= 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "activity level must be positive, got {}",
            profile.activity_level
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{apply_delta, validate_custom_meal};
    use crate::model::macros::Macros;

    #[test]
    fn apply_delta_floors_at_zero() {
        assert_eq!(apply_delta(10, -30), 0);
        assert_eq!(apply_delta(10, 20), 30);
        assert_eq!(apply_delta(u32::MAX, 1), u32::MAX);
    }

    #[test]
    fn custom_meal_rejects_non_finite_quantity_and_grams() {
        let macros = Macros::kcal_only(40.0);
        assert!(validate_custom_meal("Tea", &macros, 1.0).is_ok());
        assert!(validate_custom_meal("Tea", &macros, f64::NAN).is_err());
        assert!(validate_custom_meal("Tea", &macros, f64::INFINITY).is_err());
        assert!(validate_custom_meal("Tea", &macros, 0.0).is_err());

        let weighed = Macros {
            grams: Some(f64::NAN),
            ..macros
        };
        assert!(validate_custom_meal("Tea", &weighed, 1.0).is_err());
    }
}
