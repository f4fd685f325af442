//! Read-side projections: per-day summaries and weight statistics.

use crate::catalog::{find_meal_option, scheduled_supplements, workout_for_date};
use crate::config::TrackerConfig;
use crate::metrics::{
    calculate_bmr, calculate_daily_score, calculate_exercise_burn, calculate_macros,
    calculate_tdee, deficit_plans, DeficitPlan,
};
use crate::model::daily_log::DailyLog;
use crate::model::macros::Macros;
use crate::model::profile::UserProfile;
use crate::model::weight::WeightHistory;
use chrono::NaiveDate;
use serde::Serialize;

/// Everything derived for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub macros: Macros,
    /// kcal burned by exercise and walking.
    pub burn: i64,
    pub bmr: f64,
    pub tdee: i64,
    pub score: f64,
    /// Intake minus burn.
    pub net_kcal: i64,
    /// TDEE minus net intake; positive means a deficit.
    pub remaining_kcal: i64,
    /// Weight used for BMR, from the log or the latest earlier weigh-in.
    pub weight: Option<f64>,
    pub workout_kind: &'static str,
    pub walking_minutes: u32,
    pub walking_target: u32,
    pub water_intake_ml: u32,
    pub eaten: Vec<String>,
    pub completed_exercises: Vec<&'static str>,
    pub supplements_taken: usize,
    pub supplements_scheduled: usize,
    pub has_data: bool,
}

pub(crate) fn summarize_day(
    log: &DailyLog,
    weights: &WeightHistory,
    profile: &UserProfile,
    config: &TrackerConfig,
) -> DaySummary {
    let macros = calculate_macros(log);
    let burn = calculate_exercise_burn(log, profile);
    let weight = log.weight.or_else(|| weights.as_of(log.date));
    let tdee = calculate_tdee(profile, weight);
    let net_kcal = macros.kcal.round() as i64 - burn;
    let workout = workout_for_date(log.date, profile.workout_mode);
    let scheduled = scheduled_supplements(log.date);

    let eaten = log
        .meals
        .iter()
        .filter_map(|(slot, entry)| find_meal_option(*slot, &entry.id))
        .map(|option| option.name.to_string())
        .chain(log.custom_meals.iter().map(|entry| entry.name.clone()))
        .collect();
    let completed_exercises = workout
        .exercises()
        .filter(|exercise| log.is_exercise_completed(exercise.id))
        .map(|exercise| exercise.name)
        .collect();

    DaySummary {
        date: log.date,
        macros,
        burn,
        bmr: calculate_bmr(profile, weight),
        tdee,
        score: calculate_daily_score(log, &macros, profile, &config.score),
        net_kcal,
        remaining_kcal: tdee - net_kcal,
        weight,
        workout_kind: workout.kind,
        walking_minutes: log.walking_minutes,
        walking_target: workout.walking_target,
        water_intake_ml: log.water_intake_ml,
        eaten,
        completed_exercises,
        supplements_taken: scheduled
            .iter()
            .filter(|supplement| log.is_supplement_taken(supplement.id))
            .count(),
        supplements_scheduled: scheduled.len(),
        has_data: log.has_activity(),
    }
}

/// Trailing window of weigh-ins used for trend statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightWindow {
    TwoWeeks,
    Year,
}

impl WeightWindow {
    pub fn entries(self) -> usize {
        match self {
            Self::TwoWeeks => 14,
            Self::Year => 365,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightStats {
    pub check_ins: usize,
    /// First minus last weight in the window; positive means weight lost.
    pub loss_kg: f64,
    pub current_weight: Option<f64>,
    pub tdee: i64,
    pub plans: Vec<DeficitPlan>,
}

pub(crate) fn weight_stats(
    weights: &WeightHistory,
    current_weight: Option<f64>,
    profile: &UserProfile,
    window: WeightWindow,
) -> WeightStats {
    let recent = weights.tail(window.entries());
    let loss_kg = match (recent.first(), recent.last()) {
        (Some(first), Some(last)) => first.weight - last.weight,
        _ => 0.0,
    };
    let tdee = calculate_tdee(profile, current_weight);

    WeightStats {
        check_ins: recent.len(),
        loss_kg,
        current_weight,
        tdee,
        plans: deficit_plans(tdee),
    }
}
