//! Plain-text rendering of tracker projections.

use dietcoach_core::catalog::daily_targets;
use dietcoach_core::model::catalog::{MealCategory, Supplement, WorkoutDay};
use dietcoach_core::{DailyLog, DaySummary, WeightStats};

pub fn summary(day: &DaySummary) {
    let targets = daily_targets();
    println!("{} ({})", day.date, day.workout_kind);
    println!(
        "  intake   {:>6.0} kcal  (target {:.0}-{:.0})",
        day.macros.kcal, targets.kcal.min, targets.kcal.max
    );
    println!(
        "  protein {:>5.0} g  carbs {:>5.0} g  fat {:>5.0} g  fiber {:>4.0} g",
        day.macros.protein, day.macros.carbs, day.macros.fat, day.macros.fiber
    );
    println!("  burn     {:>6} kcal", day.burn);
    println!("  net      {:>6} kcal", day.net_kcal);
    println!(
        "  tdee     {:>6} kcal  remaining {} kcal",
        day.tdee, day.remaining_kcal
    );
    match day.weight {
        Some(weight) => println!("  weight   {weight:>6.1} kg  (bmr {:.0})", day.bmr),
        None => println!("  weight        -     (bmr {:.0})", day.bmr),
    }
    println!(
        "  walking  {:>3}/{} min  water {} ml  supplements {}/{}",
        day.walking_minutes,
        day.walking_target,
        day.water_intake_ml,
        day.supplements_taken,
        day.supplements_scheduled
    );
    if !day.eaten.is_empty() {
        println!("  eaten: {}", day.eaten.join(", "));
    }
    if !day.completed_exercises.is_empty() {
        println!("  done:  {}", day.completed_exercises.join(", "));
    }
    println!("  score    {:.1}/10", day.score);
}

pub fn history(days: &[DaySummary]) {
    for day in days {
        if day.has_data {
            println!(
                "{}  score {:>4.1}  intake {:>5.0}  burn {:>4}  {}",
                day.date, day.score, day.macros.kcal, day.burn, day.workout_kind
            );
        } else {
            println!("{}  no data", day.date);
        }
    }
}

pub fn meal_options(category: &MealCategory) {
    println!("{} ({})", category.slot, category.label);
    for option in category.options {
        println!(
            "  {:<5} {:<40} {:>4.0} kcal  P{:.0} C{:.0} F{:.0}  [{}]",
            option.id,
            option.name,
            option.macros.kcal,
            option.macros.protein,
            option.macros.carbs,
            option.macros.fat,
            option.quantity
        );
    }
}

pub fn workout(day: &WorkoutDay, log: &DailyLog) {
    println!("{}: {} (walk {} min)", day.day, day.kind, day.walking_target);
    if day.is_rest_day() {
        println!("  rest day");
    }
    for exercise in day.exercises() {
        let mark = if log.is_exercise_completed(exercise.id) {
            "x"
        } else {
            " "
        };
        println!(
            "  [{mark}] {:<5} {} {}x{} ({})",
            exercise.id, exercise.name, exercise.sets, exercise.reps, exercise.equipment
        );
    }
    for custom in &log.custom_exercises {
        println!(
            "  [x] {} {} {}x{} {:.0} kcal",
            custom.id, custom.name, custom.sets, custom.reps, custom.kcal_burn
        );
    }
}

pub fn supplements(scheduled: &[&Supplement], log: &DailyLog) {
    for supplement in scheduled {
        let mark = if log.is_supplement_taken(supplement.id) {
            "x"
        } else {
            " "
        };
        println!(
            "  [{mark}] {:<7} {} {} - {}",
            supplement.id, supplement.name, supplement.dose, supplement.instruction
        );
    }
}

pub fn weight_stats(stats: &WeightStats) {
    println!("check-ins  {}", stats.check_ins);
    println!("loss       {:.1} kg", stats.loss_kg);
    match stats.current_weight {
        Some(weight) => println!("current    {weight:.1} kg"),
        None => println!("current    -"),
    }
    println!("tdee       {} kcal", stats.tdee);
    for plan in &stats.plans {
        println!(
            "  {:<12} -{:>4} kcal/day -> {:>4} kcal  10d {:.2} kg  30d {:.2} kg",
            plan.name,
            plan.daily_deficit,
            plan.daily_target,
            plan.ten_day_loss_kg,
            plan.thirty_day_loss_kg
        );
    }
}
