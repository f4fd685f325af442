//! Pure aggregation over a daily log and the reference catalog.
//!
//! # Responsibility
//! - Macro totals, calorie burn, BMR/TDEE and the composite daily score.
//!
//! # Invariants
//! - Functions are pure: no I/O, no logging, no mutation of inputs.
//! - Unknown catalog references are skipped, never reported as errors.

mod burn;
mod macros;
mod metabolic;
mod score;

pub use burn::{calculate_exercise_burn, exercise_burn, SECONDS_PER_TIMED_SET, WALKING_KCAL_PER_MINUTE};
pub use macros::calculate_macros;
pub use metabolic::{
    calculate_bmr, calculate_tdee, deficit_plans, project_weight_loss, DeficitPlan,
    FALLBACK_BMR, KCAL_PER_KG_FAT,
};
pub use score::{calculate_daily_score, ScoreConfig, MAX_SCORE, MIN_SCORE};
