//! Weekly workout plans (standard gym and home gym variants).
//!
//! # Invariants
//! - Plans are Monday-first: index 0 is Monday, index 6 is Sunday.
//! - Sunday is walking recovery with no planned exercises.

use crate::model::catalog::{Exercise, ExerciseUnit, WorkoutDay};
use crate::model::profile::WorkoutMode;
use chrono::{Datelike, NaiveDate};

const fn ex(
    id: &'static str,
    name: &'static str,
    equipment: &'static str,
    sets: u32,
    reps: &'static str,
    kcal_per_unit: f64,
    unit: ExerciseUnit,
) -> Exercise {
    Exercise {
        id,
        name,
        equipment,
        sets,
        reps,
        kcal_per_unit,
        unit,
    }
}

use ExerciseUnit::{Second, Set};

const WARM_UP: &[Exercise] = &[
    ex("wu0", "Arm circles", "Bodyweight", 1, "30 sec", 0.1, Second),
    ex("wu1", "Jumping jacks", "Bodyweight", 1, "30 sec", 0.25, Second),
    ex("wu2", "Bodyweight squats", "Bodyweight", 1, "15 reps", 4.0, Set),
    ex("wu3", "Shoulder rolls", "Bodyweight", 1, "30 sec", 0.1, Second),
    ex("wu4", "Hip circles", "Bodyweight", 1, "30 sec", 0.1, Second),
];

const UPPER_BODY: &[Exercise] = &[
    ex("up1", "Incline push-ups", "Bench", 3, "15", 5.0, Set),
    ex("up2", "Dumbbell bench press", "7-10 kg DBs", 3, "10", 4.0, Set),
    ex("up3", "One-arm DB row", "10-12 kg", 3, "12", 4.0, Set),
    ex("up4", "Shoulder press", "7-10 kg", 3, "10", 4.0, Set),
    ex("up5", "Bicep curls", "7-10 kg", 3, "12", 3.0, Set),
    ex("up6", "Tricep overhead extension", "7-10 kg", 3, "12", 3.0, Set),
];

const LOWER_BODY: &[Exercise] = &[
    ex("lo1", "Squats", "Barbell (20kg)", 3, "15", 8.0, Set),
    ex("lo2", "Goblet squats", "10-12 kg DB", 3, "12", 7.0, Set),
    ex("lo3", "Lunges", "Bodyweight / DBs", 3, "10 per leg", 6.0, Set),
    ex("lo4", "Romanian deadlift", "20 kg barbell", 3, "12", 8.0, Set),
    ex("lo5", "Calf raises", "Bodyweight", 3, "20", 3.0, Set),
];

const FULL_BODY: &[Exercise] = &[
    ex("fb1", "Incline push-ups", "Bench", 3, "15", 5.0, Set),
    ex("fb2", "Barbell row", "20 kg", 3, "10", 8.0, Set),
    ex("fb3", "DB shoulder press", "7-10 kg", 3, "10", 4.0, Set),
    ex("fb4", "DB squats", "10-12 kg", 3, "12", 7.0, Set),
    ex("fb5", "Plank", "Bodyweight", 3, "30-40 sec", 0.15, Second),
];

const SATURDAY: &[Exercise] = &[
    ex("sa1", "Incline push-ups", "Bench", 3, "15", 5.0, Set),
    ex("sa2", "Dumbbell chest fly", "7 kg DBs", 3, "12", 4.0, Set),
    ex("sa3", "DB Romanian deadlift", "10-12 kg DBs", 3, "12", 7.0, Set),
    ex("sa4", "Russian twists", "5 kg DB", 3, "20", 4.0, Set),
    ex("sa5", "Leg raises", "Bodyweight", 3, "12", 4.0, Set),
];

const HOME_UPPER: &[Exercise] = &[
    ex("hu1", "Push-ups", "Bodyweight", 3, "12", 5.0, Set),
    ex("hu2", "Floor press", "Adjustable DBs", 3, "10", 4.0, Set),
    ex("hu3", "Resistance band row", "Band", 3, "15", 3.0, Set),
    ex("hu4", "Pike push-ups", "Bodyweight", 3, "8", 4.0, Set),
    ex("hu5", "Hammer curls", "Adjustable DBs", 3, "12", 3.0, Set),
    ex("hu6", "Bench dips", "Chair", 3, "12", 3.0, Set),
];

const HOME_LOWER: &[Exercise] = &[
    ex("hl1", "DB goblet squats", "Adjustable DBs", 3, "15", 7.0, Set),
    ex("hl2", "Reverse lunges", "Bodyweight", 3, "10 per leg", 6.0, Set),
    ex("hl3", "Glute bridges", "Bodyweight", 3, "15", 4.0, Set),
    ex("hl4", "DB stiff-leg deadlift", "Adjustable DBs", 3, "12", 7.0, Set),
    ex("hl5", "Wall sit", "Wall", 3, "40 sec", 0.12, Second),
];

const HOME_FULL: &[Exercise] = &[
    ex("hf1", "Burpees", "Bodyweight", 3, "10", 8.0, Set),
    ex("hf2", "DB thrusters", "Adjustable DBs", 3, "10", 7.0, Set),
    ex("hf3", "Band pull-aparts", "Band", 3, "15", 2.0, Set),
    ex("hf4", "Mountain climbers", "Bodyweight", 3, "40 sec", 0.2, Second),
    ex("hf5", "Plank", "Bodyweight", 3, "30-40 sec", 0.15, Second),
];

const HOME_SATURDAY: &[Exercise] = &[
    ex("hs1", "Push-ups", "Bodyweight", 3, "12", 5.0, Set),
    ex("hs2", "Single-leg glute bridge", "Bodyweight", 3, "10 per leg", 4.0, Set),
    ex("hs3", "DB renegade row", "Adjustable DBs", 3, "8 per arm", 5.0, Set),
    ex("hs4", "Russian twists", "Adjustable DB", 3, "20", 4.0, Set),
    ex("hs5", "Leg raises", "Bodyweight", 3, "12", 4.0, Set),
];

const fn day(
    day: &'static str,
    kind: &'static str,
    walking_target: u32,
    main: &'static [Exercise],
) -> WorkoutDay {
    WorkoutDay {
        day,
        kind,
        walking_target,
        warm_up: WARM_UP,
        main,
    }
}

const SUNDAY_RECOVERY: WorkoutDay = WorkoutDay {
    day: "Sunday",
    kind: "Walking Recovery",
    walking_target: 40,
    warm_up: &[],
    main: &[],
};

static STANDARD_PLAN: [WorkoutDay; 7] = [
    day("Monday", "Upper Body", 30, UPPER_BODY),
    day("Tuesday", "Lower Body", 30, LOWER_BODY),
    day("Wednesday", "Full Body", 30, FULL_BODY),
    day("Thursday", "Upper Body", 30, UPPER_BODY),
    day("Friday", "Lower Body", 30, LOWER_BODY),
    day("Saturday", "Full Body + Core", 30, SATURDAY),
    SUNDAY_RECOVERY,
];

static HOME_GYM_PLAN: [WorkoutDay; 7] = [
    day("Monday", "Home Upper Body", 30, HOME_UPPER),
    day("Tuesday", "Home Lower Body", 30, HOME_LOWER),
    day("Wednesday", "Home Full Body", 30, HOME_FULL),
    day("Thursday", "Home Upper Body", 30, HOME_UPPER),
    day("Friday", "Home Lower Body", 30, HOME_LOWER),
    day("Saturday", "Home Full Body + Core", 30, HOME_SATURDAY),
    SUNDAY_RECOVERY,
];

/// Weekly plan for `mode`, Monday-first.
pub fn workout_plan(mode: WorkoutMode) -> &'static [WorkoutDay; 7] {
    match mode {
        WorkoutMode::Standard => &STANDARD_PLAN,
        WorkoutMode::HomeGym => &HOME_GYM_PLAN,
    }
}

/// Plan day that applies to `date`.
pub fn workout_for_date(date: NaiveDate, mode: WorkoutMode) -> &'static WorkoutDay {
    let index = date.weekday().num_days_from_monday() as usize;
    &workout_plan(mode)[index]
}

/// Looks up an exercise id within the plan for `date`.
pub fn find_exercise(date: NaiveDate, mode: WorkoutMode, id: &str) -> Option<&'static Exercise> {
    workout_for_date(date, mode).exercise(id)
}

/// Looks up an exercise by case-insensitive name across both plans.
pub fn find_exercise_by_name(name: &str) -> Option<&'static Exercise> {
    let needle = name.trim().to_ascii_lowercase();
    STANDARD_PLAN
        .iter()
        .chain(HOME_GYM_PLAN.iter())
        .flat_map(WorkoutDay::exercises)
        .find(|exercise| exercise.name.to_ascii_lowercase() == needle)
}
