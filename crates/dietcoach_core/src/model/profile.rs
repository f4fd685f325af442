//! User profile singleton.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Selects which weekly workout plan variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutMode {
    Standard,
    #[serde(rename = "homegym")]
    HomeGym,
}

impl Display for WorkoutMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::HomeGym => f.write_str("homegym"),
        }
    }
}

impl FromStr for WorkoutMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "standard" => Ok(Self::Standard),
            "homegym" => Ok(Self::HomeGym),
            other => Err(format!(
                "unknown workout mode `{other}`; expected standard|homegym"
            )),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("unknown gender `{other}`; expected male|female")),
        }
    }
}

/// Body metrics and preferences used by metabolic and plan lookups.
///
/// Every field has a default, so a partially persisted profile is merged over
/// `UserProfile::default()` on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Height in cm.
    pub height: f64,
    /// Age in years.
    pub age: u32,
    pub gender: Gender,
    /// Activity multiplier applied to BMR, typically 1.2 to 1.9.
    pub activity_level: f64,
    pub workout_mode: WorkoutMode,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            height: 188.0,
            age: 30,
            gender: Gender::Male,
            activity_level: 1.0,
            workout_mode: WorkoutMode::Standard,
        }
    }
}
