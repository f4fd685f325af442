use crate::catalog::find_meal_option;
use crate::model::daily_log::DailyLog;
use crate::model::macros::Macros;

/// Sums selected catalog options and custom entries, each scaled by quantity.
///
/// Slot entries whose id is not in the catalog are skipped.
pub fn calculate_macros(log: &DailyLog) -> Macros {
    let from_slots = log.meals.iter().filter_map(|(slot, entry)| {
        find_meal_option(*slot, &entry.id).map(|option| option.macros.scaled(entry.effective_qty()))
    });
    let from_custom = log
        .custom_meals
        .iter()
        .map(|entry| entry.macros.scaled(entry.effective_qty()));

    from_slots.chain(from_custom).fold(Macros::default(), |total, macros| total + macros)
}

#[cfg(test)]
mod tests {
    use super::calculate_macros;
    use crate::model::daily_log::{CustomMealEntry, DailyLog, MealEntry, MealSlot};
    use crate::model::macros::Macros;
    use chrono::NaiveDate;

    fn log() -> DailyLog {
        DailyLog::empty(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap())
    }

    #[test]
    fn empty_log_has_zero_macros() {
        assert_eq!(calculate_macros(&log()), Macros::default());
    }

    #[test]
    fn slot_options_are_scaled_by_quantity() {
        let mut log = log();
        log.meals.insert(MealSlot::Breakfast, MealEntry::new("b2", 2.0));
        log.meals.insert(MealSlot::MidSnack, MealEntry::new("ms1", 1.0));

        let totals = calculate_macros(&log);
        assert_eq!(totals.kcal, 390.0 * 2.0 + 60.0);
        assert_eq!(totals.protein, 32.0 * 2.0 + 1.0);
        assert_eq!(totals.fiber, 7.0 * 2.0 + 3.0);
    }

    #[test]
    fn unknown_option_is_skipped() {
        let mut log = log();
        log.meals.insert(MealSlot::Lunch, MealEntry::new("b1", 1.0));
        log.meals.insert(MealSlot::Dinner, MealEntry::new("d1", 1.0));
        assert_eq!(calculate_macros(&log).kcal, 450.0);
    }

    #[test]
    fn custom_entries_are_added() {
        let mut log = log();
        log.custom_meals.push(CustomMealEntry {
            name: "Masala dosa".to_string(),
            macros: Macros::new(350.0, 8.0, 50.0, 12.0, 3.0),
            qty: 0.0,
        });
        log.custom_meals.push(CustomMealEntry {
            name: "Tea".to_string(),
            macros: Macros::kcal_only(40.0),
            qty: 2.0,
        });
        assert_eq!(calculate_macros(&log).kcal, 350.0 + 80.0);
    }

    #[test]
    fn totals_are_order_independent() {
        let custom = |name: &str, kcal: f64| CustomMealEntry {
            name: name.to_string(),
            macros: Macros::new(kcal, 1.0, 2.0, 3.0, 0.5),
            qty: 1.0,
        };
        let mut first = log();
        first.custom_meals = vec![custom("a", 100.0), custom("b", 250.0)];
        first.meals.insert(MealSlot::Dinner, MealEntry::new("d2", 1.0));
        let mut second = log();
        second.custom_meals = vec![custom("b", 250.0), custom("a", 100.0)];
        second.meals.insert(MealSlot::Dinner, MealEntry::new("d2", 1.0));

        assert_eq!(calculate_macros(&first), calculate_macros(&second));
    }
}
