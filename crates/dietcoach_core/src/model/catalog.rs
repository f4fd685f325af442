//! Static reference record shapes.
//!
//! # Responsibility
//! - Describe meal options, exercises, weekly workout days and supplements.
//!
//! # Invariants
//! - Records are `'static` and immutable; ids are unique within their table.
//! - Supplement weekday numbering uses 0 = Sunday.

use crate::model::daily_log::MealSlot;
use crate::model::macros::Macros;
use serde::Serialize;

/// One selectable option of a meal category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealOption {
    pub id: &'static str,
    pub name: &'static str,
    /// Human-readable serving description, e.g. `150g eggs + 60g bread`.
    pub quantity: &'static str,
    pub macros: Macros,
}

/// Meal slot with its serving window label and option list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealCategory {
    pub slot: MealSlot,
    pub label: &'static str,
    pub options: &'static [MealOption],
}

impl MealCategory {
    pub fn option(&self, id: &str) -> Option<&'static MealOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

/// Unit that `Exercise::kcal_per_unit` is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseUnit {
    Set,
    Minute,
    Second,
}

/// Planned exercise with its metabolic constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub equipment: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub kcal_per_unit: f64,
    pub unit: ExerciseUnit,
}

/// One day of a weekly workout plan.
///
/// The warm-up block is shared across training days, so it is kept apart from
/// the day's main block and chained on iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutDay {
    pub day: &'static str,
    pub kind: &'static str,
    /// Walking minutes required for walking credit.
    pub walking_target: u32,
    pub warm_up: &'static [Exercise],
    pub main: &'static [Exercise],
}

impl WorkoutDay {
    /// All planned exercises in display order (warm-up first).
    pub fn exercises(&self) -> impl Iterator<Item = &'static Exercise> {
        let (warm_up, main): (&'static [Exercise], &'static [Exercise]) = (self.warm_up, self.main);
        warm_up.iter().chain(main.iter())
    }

    pub fn exercise_count(&self) -> usize {
        self.warm_up.len() + self.main.len()
    }

    pub fn exercise(&self, id: &str) -> Option<&'static Exercise> {
        self.exercises().find(|exercise| exercise.id == id)
    }

    pub fn is_rest_day(&self) -> bool {
        self.exercise_count() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementTiming {
    Morning,
    Night,
}

/// Scheduling rule for a supplement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementFrequency {
    Daily,
    /// Weekday numbers, 0 = Sunday.
    Specific(&'static [u32]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Supplement {
    pub id: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    pub dose: &'static str,
    pub instruction: &'static str,
    pub timing: SupplementTiming,
    pub frequency: SupplementFrequency,
    /// Must be taken with a fat-containing meal.
    pub requires_fat: bool,
}

impl Supplement {
    /// Returns whether this supplement is scheduled on `weekday` (0 = Sunday).
    pub fn is_scheduled_on(&self, weekday: u32) -> bool {
        match self.frequency {
            SupplementFrequency::Daily => true,
            SupplementFrequency::Specific(days) => days.contains(&weekday),
        }
    }
}

/// Target midpoint and display range for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientTarget {
    pub midpoint: f64,
    pub min: f64,
    pub max: f64,
}

/// Daily macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTargets {
    pub kcal: NutrientTarget,
    pub protein: NutrientTarget,
    pub carbs: NutrientTarget,
    pub fat: NutrientTarget,
    pub fiber: NutrientTarget,
}
