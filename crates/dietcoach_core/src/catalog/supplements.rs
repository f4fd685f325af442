//! Supplement schedule reference table.

use crate::model::catalog::{Supplement, SupplementFrequency, SupplementTiming};
use chrono::{Datelike, NaiveDate};

/// Id of the Sunday-only high-dose vitamin D3 supplement.
pub const SUNDAY_SPECIAL_SUPPLEMENT_ID: &str = "d3";

static SUPPLEMENTS: [Supplement; 5] = [
    Supplement {
        id: "multi",
        name: "Multivitamin",
        brand: "HealthKart HK Vitals",
        dose: "1 tablet",
        instruction: "Take right after breakfast with water.",
        timing: SupplementTiming::Morning,
        frequency: SupplementFrequency::Daily,
        requires_fat: false,
    },
    Supplement {
        id: "omega3",
        name: "Omega-3 Fish Oil",
        brand: "MuscleBlaze",
        dose: "1 softgel",
        instruction: "Take with breakfast; needs dietary fat for absorption.",
        timing: SupplementTiming::Morning,
        frequency: SupplementFrequency::Daily,
        requires_fat: true,
    },
    Supplement {
        id: SUNDAY_SPECIAL_SUPPLEMENT_ID,
        name: "Vitamin D3 60,000 IU",
        brand: "SuperD3",
        dose: "1 sachet",
        instruction: "Sunday only. Never on an empty stomach; take after a fat-containing breakfast.",
        timing: SupplementTiming::Morning,
        frequency: SupplementFrequency::Specific(&[0]),
        requires_fat: true,
    },
    Supplement {
        id: "mag",
        name: "Magnesium Glycinate",
        brand: "Wellbeing Nutrition",
        dose: "2 capsules",
        instruction: "Take 30 minutes before sleep.",
        timing: SupplementTiming::Night,
        frequency: SupplementFrequency::Daily,
        requires_fat: false,
    },
    Supplement {
        id: "zinc",
        name: "Zinc Picolinate",
        brand: "Carbamide Forte",
        dose: "1 tablet",
        instruction: "Take after dinner on training days.",
        timing: SupplementTiming::Night,
        frequency: SupplementFrequency::Specific(&[1, 3, 5]),
        requires_fat: false,
    },
];

pub fn supplements() -> &'static [Supplement] {
    &SUPPLEMENTS
}

pub fn find_supplement(id: &str) -> Option<&'static Supplement> {
    SUPPLEMENTS.iter().find(|supplement| supplement.id == id)
}

/// Supplements scheduled on `date`, in table order.
pub fn scheduled_supplements(date: NaiveDate) -> Vec<&'static Supplement> {
    let weekday = date.weekday().num_days_from_sunday();
    SUPPLEMENTS
        .iter()
        .filter(|supplement| supplement.is_scheduled_on(weekday))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{scheduled_supplements, SUNDAY_SPECIAL_SUPPLEMENT_ID};
    use chrono::NaiveDate;

    fn ids(date: NaiveDate) -> Vec<&'static str> {
        scheduled_supplements(date)
            .into_iter()
            .map(|supplement| supplement.id)
            .collect()
    }

    #[test]
    fn sunday_schedule_includes_special_supplement() {
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert!(ids(sunday).contains(&SUNDAY_SPECIAL_SUPPLEMENT_ID));
    }

    #[test]
    fn specific_days_follow_sunday_zero_numbering() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(ids(monday), vec!["multi", "omega3", "mag", "zinc"]);
        assert_eq!(ids(tuesday), vec!["multi", "omega3", "mag"]);
    }
}
