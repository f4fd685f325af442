//! Static reference dataset: meal options, workout plans, supplement schedules.
//!
//! # Responsibility
//! - Provide immutable lookup tables and id/date-scoped lookups over them.
//!
//! # Invariants
//! - Tables are compiled in and never mutated at runtime.
//! - Lookups never fail loudly; unknown ids resolve to `None`.

mod meal_plan;
mod supplements;
mod workout_plan;

pub use meal_plan::{daily_targets, find_meal_option, meal_category, meal_plan};
pub use supplements::{
    find_supplement, scheduled_supplements, supplements, SUNDAY_SPECIAL_SUPPLEMENT_ID,
};
pub use workout_plan::{find_exercise, find_exercise_by_name, workout_for_date, workout_plan};
