//! Composite 0-10 daily score.
//!
//! The weights and thresholds are product configuration rather than a derived
//! model, so every constant lives in `ScoreConfig`.

use crate::catalog::{scheduled_supplements, workout_for_date, SUNDAY_SPECIAL_SUPPLEMENT_ID};
use crate::model::catalog::SupplementTiming;
use crate::model::daily_log::DailyLog;
use crate::model::macros::Macros;
use crate::model::profile::UserProfile;
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

/// Scoring weights and thresholds.
///
/// Every field has a default, so a JSON config may override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Awarded when a body weight is recorded.
    pub weight_logged_points: f64,
    /// Inclusive intake band that earns `intake_points`.
    pub intake_min_kcal: f64,
    pub intake_max_kcal: f64,
    pub intake_points: f64,
    /// Distance outside the band that still earns `near_miss_points`.
    /// `None` disables partial credit.
    pub near_miss_margin_kcal: Option<f64>,
    pub near_miss_points: f64,
    /// Scaled by the completed fraction of the day's plan.
    pub exercise_points: f64,
    /// Awarded when walking minutes reach the day's walking target.
    pub walking_points: f64,
    /// Awarded when every scheduled supplement is taken.
    pub full_adherence_points: f64,
    /// Subtracted when the Sunday-only special supplement is missed.
    pub special_missed_penalty: f64,
    pub special_supplement_id: String,
    /// Subtracted when any scheduled night supplement is missed.
    pub night_incomplete_penalty: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            weight_logged_points: 1.0,
            intake_min_kcal: 1850.0,
            intake_max_kcal: 1950.0,
            intake_points: 4.0,
            near_miss_margin_kcal: None,
            near_miss_points: 2.0,
            exercise_points: 2.0,
            walking_points: 2.0,
            full_adherence_points: 1.0,
            special_missed_penalty: 1.0,
            special_supplement_id: SUNDAY_SPECIAL_SUPPLEMENT_ID.to_string(),
            night_incomplete_penalty: 0.5,
        }
    }
}

impl ScoreConfig {
    fn intake_score(&self, kcal: f64) -> f64 {
        if kcal >= self.intake_min_kcal && kcal <= self.intake_max_kcal {
            return self.intake_points;
        }
        match self.near_miss_margin_kcal {
            Some(margin)
                if kcal >= self.intake_min_kcal - margin
                    && kcal <= self.intake_max_kcal + margin =>
            {
                self.near_miss_points
            }
            _ => 0.0,
        }
    }
}

/// Scores one day: weight, intake band, plan completion, walking and
/// supplement adherence. Rounded to one decimal and clamped to [0, 10].
///
/// Only completed ids that belong to the day's plan count toward completion;
/// a rest day earns full exercise credit.
pub fn calculate_daily_score(
    log: &DailyLog,
    macros: &Macros,
    profile: &UserProfile,
    config: &ScoreConfig,
) -> f64 {
    let mut score = 0.0;

    if log.weight.is_some() {
        score += config.weight_logged_points;
    }

    score += config.intake_score(macros.kcal);

    let workout = workout_for_date(log.date, profile.workout_mode);
    let planned = workout.exercise_count();
    if planned == 0 {
        score += config.exercise_points;
    } else {
        let completed = workout
            .exercises()
            .filter(|exercise| log.is_exercise_completed(exercise.id))
            .count();
        score += completed as f64 / planned as f64 * config.exercise_points;
    }

    if log.walking_minutes >= workout.walking_target {
        score += config.walking_points;
    }

    score += supplement_adjustment(log, config);

    let rounded = (score * 10.0).round() / 10.0;
    rounded.clamp(MIN_SCORE, MAX_SCORE)
}

fn supplement_adjustment(log: &DailyLog, config: &ScoreConfig) -> f64 {
    let scheduled = scheduled_supplements(log.date);
    if scheduled.is_empty() {
        return 0.0;
    }

    if scheduled
        .iter()
        .all(|supplement| log.is_supplement_taken(supplement.id))
    {
        return config.full_adherence_points;
    }

    let mut adjustment = 0.0;
    if log.date.weekday() == Weekday::Sun
        && !log.is_supplement_taken(&config.special_supplement_id)
    {
        adjustment -= config.special_missed_penalty;
    }

    let mut night = scheduled
        .iter()
        .filter(|supplement| supplement.timing == SupplementTiming::Night)
        .peekable();
    let has_night = night.peek().is_some();
    if has_night && !night.all(|supplement| log.is_supplement_taken(supplement.id)) {
        adjustment -= config.night_incomplete_penalty;
    }

    adjustment
}

#[cfg(test)]
mod tests {
    use super::{calculate_daily_score, ScoreConfig};
    use crate::catalog::{scheduled_supplements, workout_for_date};
    use crate::metrics::calculate_macros;
    use crate::model::daily_log::{DailyLog, MealEntry, MealSlot};
    use crate::model::macros::Macros;
    use crate::model::profile::{UserProfile, WorkoutMode};
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    fn score(log: &DailyLog, kcal: f64) -> f64 {
        calculate_daily_score(
            log,
            &Macros::kcal_only(kcal),
            &UserProfile::default(),
            &ScoreConfig::default(),
        )
    }

    fn take_all_supplements(log: &mut DailyLog) {
        log.taken_supplements = scheduled_supplements(log.date)
            .into_iter()
            .map(|supplement| supplement.id.to_string())
            .collect();
    }

    fn complete_plan(log: &mut DailyLog) {
        log.completed_exercises = workout_for_date(log.date, WorkoutMode::Standard)
            .exercises()
            .map(|exercise| exercise.id.to_string())
            .collect();
    }

    #[test]
    fn perfect_training_day_scores_ten() {
        let mut log = DailyLog::empty(monday());
        log.weight = Some(85.0);
        log.walking_minutes = 30;
        complete_plan(&mut log);
        take_all_supplements(&mut log);

        assert_eq!(score(&log, 1900.0), 10.0);
    }

    #[test]
    fn empty_training_day_loses_night_stack_credit() {
        let log = DailyLog::empty(monday());
        // Nothing logged: only the night-stack penalty applies, clamped at zero.
        assert_eq!(score(&log, 0.0), 0.0);
    }

    #[test]
    fn rest_day_gives_full_exercise_credit() {
        let mut log = DailyLog::empty(sunday());
        take_all_supplements(&mut log);
        // exercise 2 + adherence 1
        assert_eq!(score(&log, 0.0), 3.0);
    }

    #[test]
    fn partial_plan_completion_is_proportional() {
        let mut log = DailyLog::empty(monday());
        take_all_supplements(&mut log);
        let planned = workout_for_date(monday(), WorkoutMode::Standard).exercise_count();
        log.completed_exercises = vec!["up1".to_string(), "up2".to_string()];
        let expected = ((2.0 / planned as f64 * 2.0 + 1.0) * 10.0).round() / 10.0;
        assert_eq!(score(&log, 0.0), expected);
    }

    #[test]
    fn foreign_exercise_ids_do_not_inflate_completion() {
        let mut log = DailyLog::empty(monday());
        take_all_supplements(&mut log);
        log.completed_exercises = (0..50).map(|index| format!("bogus{index}")).collect();
        assert_eq!(score(&log, 0.0), 1.0);
    }

    #[test]
    fn sunday_special_and_night_penalties_stack() {
        let mut log = DailyLog::empty(sunday());
        log.taken_supplements = vec!["multi".to_string()];
        // exercise 2 - special 1 - night 0.5
        assert_eq!(score(&log, 0.0), 0.5);
    }

    #[test]
    fn intake_band_is_inclusive_and_near_miss_is_configurable() {
        let mut log = DailyLog::empty(sunday());
        take_all_supplements(&mut log);
        assert_eq!(score(&log, 1850.0), 7.0);
        assert_eq!(score(&log, 1950.0), 7.0);
        assert_eq!(score(&log, 2000.0), 3.0);

        let config = ScoreConfig {
            near_miss_margin_kcal: Some(100.0),
            ..ScoreConfig::default()
        };
        let near = calculate_daily_score(
            &log,
            &Macros::kcal_only(2000.0),
            &UserProfile::default(),
            &config,
        );
        assert_eq!(near, 5.0);
    }

    #[test]
    fn score_stays_within_bounds_for_extreme_configs() {
        let mut log = DailyLog::empty(monday());
        log.weight = Some(90.0);
        log.walking_minutes = 600;
        log.meals.insert(MealSlot::Breakfast, MealEntry::new("b1", 5.0));
        complete_plan(&mut log);
        let macros = calculate_macros(&log);

        let generous = ScoreConfig {
            weight_logged_points: 50.0,
            exercise_points: 50.0,
            walking_points: 50.0,
            ..ScoreConfig::default()
        };
        let harsh = ScoreConfig {
            night_incomplete_penalty: 50.0,
            exercise_points: 0.0,
            walking_points: 0.0,
            weight_logged_points: 0.0,
            ..ScoreConfig::default()
        };
        let profile = UserProfile::default();
        for config in [generous, harsh] {
            let value = calculate_daily_score(&log, &macros, &profile, &config);
            assert!((0.0..=10.0).contains(&value), "score {value} out of range");
        }
    }
}
