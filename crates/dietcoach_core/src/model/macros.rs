//! Macronutrient totals.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Macronutrient totals for a food, a meal or a whole day.
///
/// `grams` is the serving weight when known (estimates carry it, catalog
/// options do not).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub kcal: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams: Option<f64>,
}

impl Macros {
    pub const fn new(kcal: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Self {
        Self {
            kcal,
            protein,
            carbs,
            fat,
            fiber,
            grams: None,
        }
    }

    /// Energy-only macros, used for manual entries where only kcal is known.
    pub const fn kcal_only(kcal: f64) -> Self {
        Self::new(kcal, 0.0, 0.0, 0.0, 0.0)
    }

    /// Returns these macros multiplied by `qty`. Serving weight is dropped.
    pub fn scaled(&self, qty: f64) -> Self {
        Self::new(
            self.kcal * qty,
            self.protein * qty,
            self.carbs * qty,
            self.fat * qty,
            self.fiber * qty,
        )
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Self) -> Self::Output {
        Macros::new(
            self.kcal + rhs.kcal,
            self.protein + rhs.protein,
            self.carbs + rhs.carbs,
            self.fat + rhs.fat,
            self.fiber + rhs.fiber,
        )
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
