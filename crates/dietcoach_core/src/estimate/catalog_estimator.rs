//! Offline estimator that matches descriptions against the reference catalog.

use super::{normalize_description, EstimateError, NutritionEstimator};
use crate::catalog::{meal_plan, workout_plan};
use crate::metrics::exercise_burn;
use crate::model::catalog::Exercise;
use crate::model::macros::Macros;
use crate::model::profile::WorkoutMode;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static MULTIPLIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:x|servings?|portions?|plates?|bowls?)\s+(.+)$")
        .expect("valid multiplier regex")
});
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").expect("valid word regex"));

const STOP_WORDS: &[&str] = &["a", "an", "and", "of", "the", "with", "plus", "some", "g", "ml"];
/// Share of a catalog name's words that must appear in the description.
const MIN_NAME_COVERAGE: f64 = 0.5;

/// Token-overlap matcher over meal option and exercise names.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogEstimator;

impl CatalogEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl NutritionEstimator for CatalogEstimator {
    fn estimator_id(&self) -> &str {
        "catalog"
    }

    fn estimate_nutrition(&self, description: &str) -> Result<Macros, EstimateError> {
        let description = normalize_description(description)?;
        let (multiplier, rest) = split_multiplier(description);
        let words = tokenize(rest);

        let options = meal_plan().iter().flat_map(|category| category.options.iter());
        best_match(&words, options, |option| option.name)
            .map(|option| option.macros.scaled(multiplier))
            .ok_or_else(|| EstimateError::NoMatch(description.to_string()))
    }

    fn estimate_exercise_burn(&self, description: &str, sets: u32) -> Result<f64, EstimateError> {
        let description = normalize_description(description)?;
        let words = tokenize(description);

        let exercises = [WorkoutMode::Standard, WorkoutMode::HomeGym]
            .into_iter()
            .flat_map(|mode| workout_plan(mode).iter())
            .flat_map(|day| day.exercises());
        best_match(&words, exercises, |exercise| exercise.name)
            .map(|exercise| {
                exercise_burn(&Exercise {
                    sets: sets.max(1),
                    ..*exercise
                })
            })
            .ok_or_else(|| EstimateError::NoMatch(description.to_string()))
    }
}

fn split_multiplier(description: &str) -> (f64, &str) {
    if let Some(captures) = MULTIPLIER_RE.captures(description) {
        let multiplier = captures
            .get(1)
            .and_then(|value| value.as_str().parse::<f64>().ok())
            .filter(|value| *value > 0.0);
        if let (Some(multiplier), Some(rest)) = (multiplier, captures.get(2)) {
            return (multiplier, rest.as_str());
        }
    }
    (1.0, description)
}

fn tokenize(text: &str) -> BTreeSet<String> {
    let lowered = text.to_ascii_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|word| word.as_str())
        .filter(|word| !STOP_WORDS.contains(word))
        .map(|word| word.trim_end_matches('s').to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Candidate whose name words are best covered by `words`.
///
/// Ties prefer more matched words, then the earlier candidate.
fn best_match<T: Copy>(
    words: &BTreeSet<String>,
    candidates: impl Iterator<Item = T>,
    name_of: impl Fn(T) -> &'static str,
) -> Option<T> {
    let mut best: Option<(f64, usize, T)> = None;
    for candidate in candidates {
        let name_words = tokenize(name_of(candidate));
        if name_words.is_empty() {
            continue;
        }
        let matched = name_words.intersection(words).count();
        let coverage = matched as f64 / name_words.len() as f64;
        if matched == 0 || coverage < MIN_NAME_COVERAGE {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_coverage, best_matched, _)) => {
                coverage > best_coverage || (coverage == best_coverage && matched > best_matched)
            }
        };
        if better {
            best = Some((coverage, matched, candidate));
        }
    }
    best.map(|(_, _, candidate)| candidate)
}
