use crate::model::profile::{Gender, UserProfile};
use serde::Serialize;

/// BMR returned when height, weight or age is missing.
pub const FALLBACK_BMR: f64 = 1950.0;
/// Energy deficit that corresponds to one kilogram of body fat.
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Mifflin-St Jeor basal metabolic rate in kcal/day.
///
/// `weight` is in kg; `None` or non-positive values select the fallback.
pub fn calculate_bmr(profile: &UserProfile, weight: Option<f64>) -> f64 {
    let weight = match weight {
        Some(weight) if weight > 0.0 => weight,
        _ => return FALLBACK_BMR,
    };
    if profile.height <= 0.0 || profile.age == 0 {
        return FALLBACK_BMR;
    }

    let base = 10.0 * weight + 6.25 * profile.height - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total daily energy expenditure, rounded to whole kcal.
pub fn calculate_tdee(profile: &UserProfile, weight: Option<f64>) -> i64 {
    (calculate_bmr(profile, weight) * profile.activity_level).round() as i64
}

/// Projected fat loss in kg after holding `daily_deficit` for `days`.
pub fn project_weight_loss(daily_deficit: f64, days: u32) -> f64 {
    daily_deficit * f64::from(days) / KCAL_PER_KG_FAT
}

/// One named deficit strategy derived from a TDEE.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeficitPlan {
    pub name: &'static str,
    pub daily_deficit: i64,
    /// Intake target, `tdee - daily_deficit`.
    pub daily_target: i64,
    pub ten_day_loss_kg: f64,
    pub thirty_day_loss_kg: f64,
}

const DEFICIT_STRATEGIES: [(&str, i64); 3] =
    [("Conservative", 200), ("Standard", 500), ("Aggressive", 750)];

/// Conservative/standard/aggressive plans; empty when `tdee` is not positive.
pub fn deficit_plans(tdee: i64) -> Vec<DeficitPlan> {
    if tdee <= 0 {
        return Vec::new();
    }
    DEFICIT_STRATEGIES
        .iter()
        .map(|&(name, deficit)| DeficitPlan {
            name,
            daily_deficit: deficit,
            daily_target: tdee - deficit,
            ten_day_loss_kg: project_weight_loss(deficit as f64, 10),
            thirty_day_loss_kg: project_weight_loss(deficit as f64, 30),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        calculate_bmr, calculate_tdee, deficit_plans, project_weight_loss, FALLBACK_BMR,
    };
    use crate::model::profile::{Gender, UserProfile};

    fn profile(height: f64, age: u32, gender: Gender) -> UserProfile {
        UserProfile {
            height,
            age,
            gender,
            ..UserProfile::default()
        }
    }

    #[test]
    fn mifflin_st_jeor_male_reference_value() {
        assert_eq!(calculate_bmr(&profile(180.0, 30, Gender::Male), Some(80.0)), 1930.0);
    }

    #[test]
    fn female_offset_is_minus_161() {
        let male = calculate_bmr(&profile(165.0, 40, Gender::Male), Some(60.0));
        let female = calculate_bmr(&profile(165.0, 40, Gender::Female), Some(60.0));
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn missing_inputs_fall_back() {
        assert_eq!(calculate_bmr(&profile(180.0, 30, Gender::Male), None), FALLBACK_BMR);
        assert_eq!(calculate_bmr(&profile(0.0, 30, Gender::Male), Some(80.0)), FALLBACK_BMR);
        assert_eq!(calculate_bmr(&profile(180.0, 0, Gender::Male), Some(80.0)), FALLBACK_BMR);
    }

    #[test]
    fn tdee_applies_activity_multiplier() {
        let mut active = profile(180.0, 30, Gender::Male);
        active.activity_level = 1.55;
        assert_eq!(calculate_tdee(&active, Some(80.0)), (1930.0_f64 * 1.55).round() as i64);
    }

    #[test]
    fn seven_thousand_seven_hundred_kcal_is_one_kg() {
        assert_eq!(project_weight_loss(770.0, 10), 1.0);
    }

    #[test]
    fn deficit_plans_subtract_from_tdee() {
        let plans = deficit_plans(2400);
        let targets: Vec<_> = plans.iter().map(|plan| plan.daily_target).collect();
        assert_eq!(targets, vec![2200, 1900, 1650]);
        assert!(deficit_plans(0).is_empty());
    }
}
