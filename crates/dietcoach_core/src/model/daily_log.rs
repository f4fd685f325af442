//! Daily log domain model.
//!
//! # Responsibility
//! - Define the per-date record of meals, workouts, walking, water and supplements.
//! - Provide partial-merge semantics through `DailyLogPatch`.
//!
//! # Invariants
//! - `date` is the unique key of a log; one log per calendar date.
//! - Meal quantities that are missing or non-positive count as one serving.

use crate::model::macros::Macros;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Fixed meal slots of a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    Breakfast,
    MidSnack,
    Lunch,
    EveningSnack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::MidSnack,
        MealSlot::Lunch,
        MealSlot::EveningSnack,
        MealSlot::Dinner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MidSnack => "midSnack",
            Self::Lunch => "lunch",
            Self::EveningSnack => "eveningSnack",
            Self::Dinner => "dinner",
        }
    }
}

impl Display for MealSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "midsnack" => Ok(Self::MidSnack),
            "lunch" => Ok(Self::Lunch),
            "eveningsnack" => Ok(Self::EveningSnack),
            "dinner" => Ok(Self::Dinner),
            other => Err(format!(
                "unknown meal slot `{other}`; expected breakfast|midSnack|lunch|eveningSnack|dinner"
            )),
        }
    }
}

/// Selected catalog option for one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub id: String,
    #[serde(default = "default_qty")]
    pub qty: f64,
}

impl MealEntry {
    pub fn new(id: impl Into<String>, qty: f64) -> Self {
        Self { id: id.into(), qty }
    }

    /// Quantity used for aggregation.
    pub fn effective_qty(&self) -> f64 {
        effective_qty(self.qty)
    }
}

/// Free-form food entry outside the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMealEntry {
    pub name: String,
    pub macros: Macros,
    #[serde(default = "default_qty")]
    pub qty: f64,
}

impl CustomMealEntry {
    pub fn effective_qty(&self) -> f64 {
        effective_qty(self.qty)
    }
}

/// Free-form exercise with a recorded burn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomExerciseEntry {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub kcal_burn: f64,
    /// Unix epoch milliseconds when the entry was recorded.
    pub timestamp: i64,
}

/// Canonical per-date tracking record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub meals: BTreeMap<MealSlot, MealEntry>,
    pub custom_meals: Vec<CustomMealEntry>,
    pub completed_exercises: Vec<String>,
    pub custom_exercises: Vec<CustomExerciseEntry>,
    pub walking_minutes: u32,
    pub water_intake_ml: u32,
    pub taken_supplements: Vec<String>,
}

impl Default for DailyLog {
    fn default() -> Self {
        Self::empty(NaiveDate::default())
    }
}

impl DailyLog {
    /// Creates the lazily-materialized empty log for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            weight: None,
            meals: BTreeMap::new(),
            custom_meals: Vec::new(),
            completed_exercises: Vec::new(),
            custom_exercises: Vec::new(),
            walking_minutes: 0,
            water_intake_ml: 0,
            taken_supplements: Vec::new(),
        }
    }

    /// Returns whether anything food- or activity-related was recorded.
    pub fn has_activity(&self) -> bool {
        !self.meals.is_empty()
            || !self.custom_meals.is_empty()
            || !self.completed_exercises.is_empty()
            || !self.custom_exercises.is_empty()
            || self.walking_minutes > 0
    }

    pub fn is_exercise_completed(&self, id: &str) -> bool {
        self.completed_exercises.iter().any(|done| done == id)
    }

    pub fn is_supplement_taken(&self, id: &str) -> bool {
        self.taken_supplements.iter().any(|taken| taken == id)
    }

    /// Merges `patch` into this log; absent patch fields leave values unchanged.
    pub fn apply(&mut self, patch: DailyLogPatch) {
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(meals) = patch.meals {
            self.meals = meals;
        }
        if let Some(custom_meals) = patch.custom_meals {
            self.custom_meals = custom_meals;
        }
        if let Some(completed) = patch.completed_exercises {
            self.completed_exercises = completed;
        }
        if let Some(custom_exercises) = patch.custom_exercises {
            self.custom_exercises = custom_exercises;
        }
        if let Some(minutes) = patch.walking_minutes {
            self.walking_minutes = minutes;
        }
        if let Some(water) = patch.water_intake_ml {
            self.water_intake_ml = water;
        }
        if let Some(taken) = patch.taken_supplements {
            self.taken_supplements = taken;
        }
    }
}

/// Partial update for a `DailyLog`. `None` means "keep current value".
///
/// `weight` is doubly optional so a patch can clear a recorded weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLogPatch {
    pub weight: Option<Option<f64>>,
    pub meals: Option<BTreeMap<MealSlot, MealEntry>>,
    pub custom_meals: Option<Vec<CustomMealEntry>>,
    pub completed_exercises: Option<Vec<String>>,
    pub custom_exercises: Option<Vec<CustomExerciseEntry>>,
    pub walking_minutes: Option<u32>,
    pub water_intake_ml: Option<u32>,
    pub taken_supplements: Option<Vec<String>>,
}

fn default_qty() -> f64 {
    1.0
}

fn effective_qty(qty: f64) -> f64 {
    if qty.is_finite() && qty > 0.0 {
        qty
    } else {
        1.0
    }
}
