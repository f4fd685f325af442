use crate::catalog::workout_for_date;
use crate::model::catalog::{Exercise, ExerciseUnit};
use crate::model::daily_log::DailyLog;
use crate::model::profile::UserProfile;

/// Fixed duration of one timed set, in seconds.
pub const SECONDS_PER_TIMED_SET: f64 = 40.0;
/// Flat walking-burn heuristic.
pub const WALKING_KCAL_PER_MINUTE: f64 = 5.0;

/// Calories burned by completing every set of one planned exercise.
///
/// Minute-based exercises count one minute per set.
pub fn exercise_burn(exercise: &Exercise) -> f64 {
    let sets = f64::from(exercise.sets);
    match exercise.unit {
        ExerciseUnit::Set | ExerciseUnit::Minute => exercise.kcal_per_unit * sets,
        ExerciseUnit::Second => exercise.kcal_per_unit * SECONDS_PER_TIMED_SET * sets,
    }
}

/// Total kcal burned on the log's date: completed plan exercises, custom
/// exercises and walking, rounded to the nearest integer.
///
/// Only completed ids found in the weekday plan for the profile's workout mode
/// contribute.
pub fn calculate_exercise_burn(log: &DailyLog, profile: &UserProfile) -> i64 {
    let workout = workout_for_date(log.date, profile.workout_mode);
    let planned: f64 = workout
        .exercises()
        .filter(|exercise| log.is_exercise_completed(exercise.id))
        .map(exercise_burn)
        .sum();
    let custom: f64 = log
        .custom_exercises
        .iter()
        .map(|exercise| exercise.kcal_burn)
        .sum();
    let walking = f64::from(log.walking_minutes) * WALKING_KCAL_PER_MINUTE;

    (planned + custom + walking).round() as i64
}
