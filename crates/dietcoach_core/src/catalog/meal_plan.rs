//! Meal plan reference table: five slots with ten options each.

use crate::model::catalog::{DailyTargets, MealCategory, MealOption, NutrientTarget};
use crate::model::daily_log::MealSlot;
use crate::model::macros::Macros;

#[allow(clippy::too_many_arguments)]
const fn option(
    id: &'static str,
    name: &'static str,
    quantity: &'static str,
    kcal: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
) -> MealOption {
    MealOption {
        id,
        name,
        quantity,
        macros: Macros::new(kcal, protein, carbs, fat, fiber),
    }
}

const BREAKFAST: &[MealOption] = &[
    option("b1", "3 eggs + 2 wheat bread slices", "150g eggs + 60g bread", 380.0, 26.0, 28.0, 18.0, 4.0),
    option("b2", "Oats + 1 scoop whey", "60g oats", 390.0, 32.0, 35.0, 12.0, 7.0),
    option("b3", "Sweet potato boiled + 2 eggs", "200g sweet potato", 430.0, 22.0, 45.0, 14.0, 8.0),
    option("b4", "Curd + 10 almonds", "250g curd", 360.0, 24.0, 14.0, 14.0, 2.0),
    option("b5", "Paneer bhurji + 1 chapati", "100g paneer", 450.0, 28.0, 30.0, 18.0, 5.0),
    option("b6", "Mixed sprouts (plain)", "150g", 360.0, 20.0, 42.0, 6.0, 8.0),
    option("b7", "Boiled chickpeas", "150g", 410.0, 18.0, 55.0, 8.0, 12.0),
    option("b8", "Upma + milk", "200g upma + 200ml milk", 440.0, 18.0, 52.0, 14.0, 7.0),
    option("b9", "Omelette (3 eggs) + 1 toast", "1 slice toast", 390.0, 27.0, 20.0, 22.0, 3.0),
    option("b10", "Paneer + boiled potato", "120g each", 430.0, 26.0, 38.0, 16.0, 6.0),
];

const MID_SNACK: &[MealOption] = &[
    option("ms1", "Orange", "130g", 60.0, 1.0, 15.0, 0.0, 3.0),
    option("ms2", "Watermelon", "300g", 90.0, 2.0, 22.0, 0.0, 1.0),
    option("ms3", "Cucumber + carrot + beet salad", "250g", 120.0, 4.0, 18.0, 1.0, 6.0),
    option("ms4", "Buttermilk", "250ml", 120.0, 4.0, 10.0, 3.0, 1.0),
    option("ms5", "Sweet potato", "100g", 150.0, 2.0, 35.0, 1.0, 4.0),
    option("ms6", "Sprouts salad", "120g", 180.0, 10.0, 25.0, 5.0, 7.0),
    option("ms7", "Boiled corn", "120g", 230.0, 6.0, 40.0, 4.0, 6.0),
    option("ms8", "Coconut water", "250ml", 60.0, 1.0, 15.0, 0.0, 1.0),
    option("ms9", "Orange + peanuts", "130g + 10g", 120.0, 3.0, 15.0, 6.0, 3.0),
    option("ms10", "Watermelon + seeds", "300g + 1tsp", 130.0, 3.0, 22.0, 4.0, 3.0),
];

const LUNCH: &[MealOption] = &[
    option("l1", "Rice + dal + veg", "180g rice, 30g dal, 150g veg", 500.0, 22.0, 70.0, 10.0, 9.0),
    option("l2", "Chicken curry + rice", "150g chicken, 160g rice", 520.0, 35.0, 60.0, 14.0, 5.0),
    option("l3", "Fish curry + rice", "150g fish, 160g rice", 510.0, 32.0, 58.0, 15.0, 5.0),
    option("l4", "Rajma + rice", "150g rajma, 150g rice", 520.0, 22.0, 72.0, 10.0, 13.0),
    option("l5", "Paneer curry + 2 chapati", "120g paneer", 520.0, 30.0, 45.0, 18.0, 7.0),
    option("l6", "Lemon rice + curd", "200g rice, 100g curd", 510.0, 16.0, 70.0, 12.0, 6.0),
    option("l7", "Boiled chana + veg", "180g chana, 150g veg", 500.0, 24.0, 55.0, 10.0, 13.0),
    option("l8", "Egg curry + rice", "3 eggs, 150g rice", 520.0, 28.0, 58.0, 14.0, 5.0),
    option("l9", "Millet rice + sambar", "180g millet, 200ml sambar", 500.0, 18.0, 65.0, 10.0, 12.0),
    option("l10", "Goat meat curry + rice", "150g meat, 120g rice", 550.0, 34.0, 45.0, 22.0, 4.0),
];

const EVENING_SNACK: &[MealOption] = &[
    option("es1", "Sprouts salad", "150g", 230.0, 12.0, 30.0, 6.0, 8.0),
    option("es2", "Boiled chickpeas", "120g", 210.0, 10.0, 35.0, 4.0, 7.0),
    option("es3", "Roasted chana", "50g", 210.0, 10.0, 30.0, 4.0, 8.0),
    option("es4", "Sweet potato", "150g", 230.0, 4.0, 45.0, 2.0, 6.0),
    option("es5", "Whey protein (water)", "1 scoop", 200.0, 30.0, 6.0, 2.0, 1.0),
    option("es6", "Milk", "250ml", 150.0, 8.0, 12.0, 8.0, 0.0),
    option("es7", "Paneer cubes", "80g", 220.0, 14.0, 6.0, 14.0, 1.0),
    option("es8", "Egg whites", "4 whites", 210.0, 26.0, 4.0, 2.0, 0.0),
    option("es9", "Buttermilk + seeds", "250ml + 1tbsp", 200.0, 6.0, 10.0, 10.0, 3.0),
    option("es10", "Boiled corn", "120g", 230.0, 6.0, 40.0, 4.0, 6.0),
];

const DINNER: &[MealOption] = &[
    option("d1", "Grilled chicken + veg", "180g chicken, 200g veg", 450.0, 40.0, 15.0, 18.0, 6.0),
    option("d2", "Fish + veg", "180g fish, 200g veg", 460.0, 38.0, 12.0, 20.0, 5.0),
    option("d3", "Paneer + veg", "150g paneer, 200g veg", 480.0, 32.0, 18.0, 22.0, 6.0),
    option("d4", "Egg bhurji (3 eggs) + veg", "3 eggs, 200g veg", 470.0, 28.0, 10.0, 24.0, 4.0),
    option("d5", "Dal + veg", "40g raw dal, 200g veg", 450.0, 22.0, 35.0, 12.0, 10.0),
    option("d6", "Omelette (3 eggs)", "Plain", 430.0, 26.0, 6.0, 26.0, 2.0),
    option("d7", "Goat meat curry + veg", "150g meat, 200g veg", 490.0, 34.0, 10.0, 28.0, 4.0),
    option("d8", "Chicken soup + 1 toast", "250ml soup", 440.0, 35.0, 25.0, 10.0, 4.0),
    option("d9", "Tofu + veg", "180g tofu, 200g veg", 460.0, 30.0, 20.0, 20.0, 7.0),
    option("d10", "Curd bowl + seeds", "250g curd + 1tbsp", 460.0, 28.0, 20.0, 18.0, 6.0),
];

static MEAL_PLAN: [MealCategory; 5] = [
    MealCategory {
        slot: MealSlot::Breakfast,
        label: "Breakfast (7:30-8:30 AM)",
        options: BREAKFAST,
    },
    MealCategory {
        slot: MealSlot::MidSnack,
        label: "Mid-Morning Snack (10:30-11:30 AM)",
        options: MID_SNACK,
    },
    MealCategory {
        slot: MealSlot::Lunch,
        label: "Lunch (1:00-2:00 PM)",
        options: LUNCH,
    },
    MealCategory {
        slot: MealSlot::EveningSnack,
        label: "Evening Snack (5:00-6:00 PM)",
        options: EVENING_SNACK,
    },
    MealCategory {
        slot: MealSlot::Dinner,
        label: "Dinner (7:00-8:00 PM)",
        options: DINNER,
    },
];

const fn target(min: f64, midpoint: f64, max: f64) -> NutrientTarget {
    NutrientTarget { midpoint, min, max }
}

static DAILY_TARGETS: DailyTargets = DailyTargets {
    kcal: target(1850.0, 1900.0, 1950.0),
    protein: target(135.0, 142.5, 150.0),
    carbs: target(180.0, 195.0, 210.0),
    fat: target(55.0, 60.0, 65.0),
    fiber: target(30.0, 35.0, 40.0),
};

/// All meal categories in serving order.
pub fn meal_plan() -> &'static [MealCategory] {
    &MEAL_PLAN
}

pub fn meal_category(slot: MealSlot) -> &'static MealCategory {
    match slot {
        MealSlot::Breakfast => &MEAL_PLAN[0],
        MealSlot::MidSnack => &MEAL_PLAN[1],
        MealSlot::Lunch => &MEAL_PLAN[2],
        MealSlot::EveningSnack => &MEAL_PLAN[3],
        MealSlot::Dinner => &MEAL_PLAN[4],
    }
}

/// Looks up an option id within one slot. Ids are only unique per slot.
pub fn find_meal_option(slot: MealSlot, id: &str) -> Option<&'static MealOption> {
    meal_category(slot).option(id)
}

pub fn daily_targets() -> &'static DailyTargets {
    &DAILY_TARGETS
}
