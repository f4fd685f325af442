//! Pluggable nutrition and calorie-burn estimation.
//!
//! # Responsibility
//! - Define the estimator contract used to pre-fill free-text entries.
//! - Provide an offline estimator backed by the reference catalog.
//!
//! # Invariants
//! - Estimation is best-effort enrichment; callers must keep a manual path.
//! - Estimators never mutate tracker state.

mod catalog_estimator;

pub use catalog_estimator::CatalogEstimator;

use crate::model::macros::Macros;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum description length accepted for estimation.
pub const MIN_DESCRIPTION_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Description is empty or too short to estimate.
    DescriptionTooShort(usize),
    /// Estimator could not match the description to anything.
    NoMatch(String),
    /// Estimator does not implement this kind of estimate.
    Unsupported(&'static str),
    /// Backend failure (transport, quota, malformed response).
    Backend(String),
}

impl Display for EstimateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DescriptionTooShort(len) => write!(
                f,
                "description has {len} characters; at least {MIN_DESCRIPTION_CHARS} required"
            ),
            Self::NoMatch(description) => write!(f, "no estimate for `{description}`"),
            Self::Unsupported(kind) => write!(f, "estimator does not support {kind} estimates"),
            Self::Backend(message) => write!(f, "estimator backend failed: {message}"),
        }
    }
}

impl Error for EstimateError {}

/// Estimates macros or burn for a free-text description.
pub trait NutritionEstimator {
    /// Stable short name used in log events.
    fn estimator_id(&self) -> &str;

    /// Macros for one standard serving described by `description`.
    fn estimate_nutrition(&self, description: &str) -> Result<Macros, EstimateError>;

    /// kcal burned by `sets` sets of the described exercise.
    fn estimate_exercise_burn(&self, description: &str, sets: u32) -> Result<f64, EstimateError> {
        let _ = (description, sets);
        Err(EstimateError::Unsupported("exercise"))
    }
}

/// Trims `description` and rejects inputs shorter than `MIN_DESCRIPTION_CHARS`.
pub fn normalize_description(description: &str) -> Result<&str, EstimateError> {
    let trimmed = description.trim();
    let len = trimmed.chars().count();
    if len < MIN_DESCRIPTION_CHARS {
        return Err(EstimateError::DescriptionTooShort(len));
    }
    Ok(trimmed)
}
