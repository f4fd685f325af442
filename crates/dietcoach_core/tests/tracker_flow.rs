use chrono::{NaiveDate, TimeZone, Utc};
use dietcoach_core::catalog::{scheduled_supplements, workout_for_date};
use dietcoach_core::db::open_db_in_memory;
use dietcoach_core::repo::state_repo::{LOGS_KEY, WEIGHTS_KEY};
use dietcoach_core::{
    CatalogEstimator, CustomExerciseEntry, CustomMealEntry, DailyLogPatch, LogsByDate, Macros,
    MealEntry, MealSlot, RepoError, RepoResult, SqliteStateRepository, StateRepository, Tracker,
    TrackerConfig, TrackerError, UserProfile, Uuid, WeightHistory, WeightWindow, WorkoutMode,
    MAX_HISTORY_DAYS,
};
use std::collections::BTreeMap;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

/// 2025-03-03 is a Monday.
fn monday() -> NaiveDate {
    date(3)
}

fn tracker_on(conn: &rusqlite::Connection, today: NaiveDate) -> Tracker<SqliteStateRepository<'_>> {
    Tracker::load(
        SqliteStateRepository::new(conn),
        today,
        TrackerConfig::default(),
    )
}

#[test]
fn reading_a_date_never_materializes_a_log() {
    let conn = open_db_in_memory().unwrap();
    let tracker = tracker_on(&conn, monday());

    let log = tracker.log_for(date(1));
    assert_eq!(log.date, date(1));
    assert!(!log.has_activity());
    assert!(tracker.logs().is_empty());
}

#[test]
fn meal_selection_persists_and_reloads() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut tracker = tracker_on(&conn, monday());
        tracker.select_meal(MealSlot::Breakfast, "b1", 1.0).unwrap();
        tracker.select_meal(MealSlot::Lunch, "l1", 1.0).unwrap();
        assert!(tracker.clear_meal(MealSlot::Dinner).is_ok());
    }

    let tracker = tracker_on(&conn, monday());
    let summary = tracker.today_summary();
    assert_eq!(summary.macros.kcal, 880.0);
    assert_eq!(summary.eaten.len(), 2);
    assert!(summary.has_data);
}

#[test]
fn unknown_meal_option_is_rejected_without_side_effects() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    let err = tracker
        .select_meal(MealSlot::Lunch, "b1", 1.0)
        .unwrap_err();
    assert!(matches!(err, TrackerError::UnknownMealOption { .. }));
    assert!(tracker.logs().is_empty());
    assert!(SqliteStateRepository::new(&conn)
        .raw(LOGS_KEY)
        .unwrap()
        .is_none());
}

#[test]
fn exercise_toggle_flips_and_validates_against_day_plan() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    assert!(tracker.toggle_exercise("up1").unwrap());
    assert!(tracker.current_log().is_exercise_completed("up1"));
    assert!(!tracker.toggle_exercise("up1").unwrap());
    assert!(!tracker.current_log().is_exercise_completed("up1"));

    assert!(matches!(
        tracker.toggle_exercise("sa1"),
        Err(TrackerError::UnknownExercise { .. })
    ));
}

#[test]
fn supplements_follow_schedule_and_fat_rule() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    assert!(matches!(
        tracker.toggle_supplement("d3"),
        Err(TrackerError::SupplementNotScheduled { .. })
    ));
    assert!(matches!(
        tracker.toggle_supplement("omega3"),
        Err(TrackerError::SupplementRequiresMeal(_))
    ));
    assert!(matches!(
        tracker.toggle_supplement("nope"),
        Err(TrackerError::UnknownSupplement(_))
    ));

    tracker.select_meal(MealSlot::Breakfast, "b2", 1.0).unwrap();
    assert!(tracker.toggle_supplement("omega3").unwrap());
    assert!(tracker.toggle_supplement("zinc").unwrap());
    assert!(!tracker.toggle_supplement("zinc").unwrap());
    assert_eq!(tracker.today_summary().supplements_taken, 1);
}

#[test]
fn walking_and_water_deltas_floor_at_zero() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    assert_eq!(tracker.adjust_walking(15).unwrap(), 15);
    assert_eq!(tracker.adjust_walking(-40).unwrap(), 0);
    assert_eq!(tracker.add_water(250).unwrap(), 250);
    assert_eq!(tracker.add_water(250).unwrap(), 500);
    assert_eq!(tracker.add_water(-1000).unwrap(), 0);
}

#[test]
fn custom_entries_feed_macros_and_burn() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    tracker
        .add_custom_meal("Protein bar", Macros::new(200.0, 20.0, 20.0, 6.0, 3.0), 2.0)
        .unwrap();
    let id = tracker
        .add_custom_exercise("Rowing machine", 1, "10 min", 95.0)
        .unwrap();

    let summary = tracker.today_summary();
    assert_eq!(summary.macros.kcal, 400.0);
    assert_eq!(summary.burn, 95);
    assert_eq!(summary.net_kcal, 305);

    let removed = tracker.remove_custom_exercise(id).unwrap();
    assert_eq!(removed.name, "Rowing machine");
    assert!(matches!(
        tracker.remove_custom_exercise(id),
        Err(TrackerError::CustomEntryNotFound(_))
    ));
    tracker.remove_custom_meal(0).unwrap();
    assert_eq!(tracker.today_summary().macros.kcal, 0.0);
    assert!(tracker.add_custom_meal("  ", Macros::default(), 1.0).is_err());
}

#[test]
fn update_log_merges_and_validates_patch() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());
    tracker.add_water(300).unwrap();

    let mut meals = BTreeMap::new();
    meals.insert(MealSlot::Dinner, MealEntry::new("d1", 1.0));
    tracker
        .update_log(DailyLogPatch {
            meals: Some(meals),
            walking_minutes: Some(45),
            ..DailyLogPatch::default()
        })
        .unwrap();

    let log = tracker.current_log();
    assert_eq!(log.walking_minutes, 45);
    assert_eq!(log.water_intake_ml, 300);
    assert!(log.meals.contains_key(&MealSlot::Dinner));
    drop(log);

    let bad = DailyLogPatch {
        completed_exercises: Some(vec!["zz9".to_string()]),
        walking_minutes: Some(0),
        ..DailyLogPatch::default()
    };
    assert!(tracker.update_log(bad).is_err());
    assert_eq!(tracker.current_log().walking_minutes, 45);
}

#[test]
fn weights_update_history_log_and_bmr() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    assert!(matches!(
        tracker.record_weight(-3.0),
        Err(TrackerError::InvalidInput(_))
    ));

    tracker.record_weight(82.0).unwrap();
    assert_eq!(tracker.weights().get(monday()), Some(82.0));
    assert_eq!(tracker.current_log().weight, Some(82.0));

    // 10*82 + 6.25*188 - 5*30 + 5
    let summary = tracker.today_summary();
    assert_eq!(summary.bmr, 1850.0);
    assert_eq!(summary.tdee, 1850);

    // A later day with no weigh-in reuses the latest earlier weight.
    assert_eq!(tracker.summary_for(date(6)).weight, Some(82.0));
    assert_eq!(tracker.summary_for(date(1)).weight, None);
}

#[test]
fn weight_stats_report_window_loss_and_plans() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, date(1));
    for (day, kg) in [(1, 84.0), (3, 83.0), (5, 82.0)] {
        tracker.set_today(date(day));
        tracker.record_weight(kg).unwrap();
    }

    let stats = tracker.weight_stats(WeightWindow::TwoWeeks);
    assert_eq!(stats.check_ins, 3);
    assert_eq!(stats.loss_kg, 2.0);
    assert_eq!(stats.current_weight, Some(82.0));
    assert!(!stats.plans.is_empty());
    assert!(stats
        .plans
        .iter()
        .all(|plan| plan.daily_target == stats.tdee - plan.daily_deficit));
}

#[test]
fn profile_changes_are_validated_and_persisted() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut tracker = tracker_on(&conn, monday());
        assert!(tracker.set_height(0.0).is_err());
        tracker.set_height(176.0).unwrap();
        tracker.set_workout_mode(WorkoutMode::HomeGym).unwrap();
    }

    let tracker = tracker_on(&conn, monday());
    assert_eq!(tracker.profile().height, 176.0);
    assert_eq!(tracker.profile().workout_mode, WorkoutMode::HomeGym);
    assert_eq!(tracker.today_summary().workout_kind, "Home Upper Body");
}

#[test]
fn corrupt_blob_falls_back_without_losing_others() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut tracker = tracker_on(&conn, monday());
        tracker.record_weight(80.0).unwrap();
    }
    SqliteStateRepository::new(&conn)
        .put_raw(LOGS_KEY, "][")
        .unwrap();

    let tracker = tracker_on(&conn, monday());
    assert!(tracker.logs().is_empty());
    assert_eq!(tracker.weights().get(monday()), Some(80.0));
}

#[test]
fn refresh_today_detects_local_midnight() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    let before = Utc.with_ymd_and_hms(2025, 3, 3, 18, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2025, 3, 3, 18, 30, 0).unwrap();
    assert!(!tracker.refresh_today(before));
    assert!(tracker.refresh_today(after));
    assert_eq!(tracker.today(), date(4));
    assert!(!tracker.refresh_today(after));
}

#[test]
fn history_lists_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, date(4));
    tracker.adjust_walking(10).unwrap();

    let history = tracker.history(3);
    let dates: Vec<_> = history.iter().map(|day| day.date).collect();
    assert_eq!(dates, vec![date(4), date(3), date(2)]);
    assert!(history[0].has_data);
    assert!(!history[1].has_data);
}

#[test]
fn perfect_day_scores_ten() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    tracker.record_weight(82.0).unwrap();
    tracker.select_meal(MealSlot::Breakfast, "b1", 1.0).unwrap();
    tracker
        .add_custom_meal("Rest of day", Macros::kcal_only(1500.0), 1.0)
        .unwrap();
    for exercise in workout_for_date(monday(), WorkoutMode::Standard).exercises() {
        tracker.toggle_exercise(exercise.id).unwrap();
    }
    tracker.adjust_walking(30).unwrap();
    for supplement in scheduled_supplements(monday()) {
        tracker.toggle_supplement(supplement.id).unwrap();
    }

    let summary = tracker.today_summary();
    assert_eq!(summary.macros.kcal, 1880.0);
    assert_eq!(summary.score, 10.0);
}

#[test]
fn snapshot_and_purge() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());
    tracker.record_weight(81.0).unwrap();

    let exported = serde_json::to_value(tracker.snapshot()).unwrap();
    assert_eq!(exported["weights"][0]["weight"], 81.0);
    assert_eq!(exported["profile"]["height"], 188.0);

    tracker.purge().unwrap();
    assert!(tracker.logs().is_empty());
    assert!(tracker.weights().is_empty());
    let repo = SqliteStateRepository::new(&conn);
    assert!(repo.raw(WEIGHTS_KEY).unwrap().is_none());
}

#[test]
fn estimator_failure_falls_back_to_none() {
    let conn = open_db_in_memory().unwrap();
    let tracker = tracker_on(&conn, monday());
    let estimator = CatalogEstimator::new();

    let macros = tracker
        .estimate_custom_meal("grilled chicken with veg", &estimator)
        .unwrap();
    assert_eq!(macros.kcal, 450.0);
    assert!(tracker.estimate_custom_meal("zz", &estimator).is_none());
    assert!(tracker
        .estimate_custom_exercise("underwater basket weaving", 2, &estimator)
        .is_none());
}

struct ReadOnlyRepo;

impl StateRepository for ReadOnlyRepo {
    fn load_logs(&self) -> RepoResult<Option<LogsByDate>> {
        Ok(None)
    }
    fn save_logs(&self, _logs: &LogsByDate) -> RepoResult<()> {
        Err(RepoError::InvalidData("read-only".to_string()))
    }
    fn load_weights(&self) -> RepoResult<Option<WeightHistory>> {
        Ok(None)
    }
    fn save_weights(&self, _weights: &WeightHistory) -> RepoResult<()> {
        Ok(())
    }
    fn load_profile(&self) -> RepoResult<Option<UserProfile>> {
        Ok(None)
    }
    fn save_profile(&self, _profile: &UserProfile) -> RepoResult<()> {
        Ok(())
    }
    fn purge(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[test]
fn failed_write_rolls_back_in_memory_state() {
    let mut tracker = Tracker::load(ReadOnlyRepo, monday(), TrackerConfig::default());

    assert!(matches!(
        tracker.select_meal(MealSlot::Breakfast, "b1", 1.0),
        Err(TrackerError::Repo(_))
    ));
    assert!(tracker.logs().is_empty());

    assert!(tracker.record_weight(80.0).is_err());
    assert!(tracker.weights().is_empty());

    assert!(tracker.set_height(170.0).is_err());
    assert_eq!(tracker.profile().height, UserProfile::default().height);
}

#[test]
fn non_finite_custom_meal_quantity_keeps_stored_history() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, date(3));
    tracker.adjust_walking(30).unwrap();

    tracker.set_today(date(4));
    for qty in [f64::NAN, f64::INFINITY, 0.0, -1.0] {
        assert!(matches!(
            tracker.add_custom_meal("Tea", Macros::kcal_only(40.0), qty),
            Err(TrackerError::InvalidInput(_))
        ));
    }
    let weighed = Macros {
        grams: Some(f64::NAN),
        ..Macros::kcal_only(40.0)
    };
    assert!(tracker.add_custom_meal("Tea", weighed, 1.0).is_err());
    drop(tracker);

    let reloaded = tracker_on(&conn, date(4));
    assert_eq!(reloaded.logs().len(), 1);
    assert_eq!(reloaded.log_for(date(3)).walking_minutes, 30);
}

#[test]
fn non_finite_custom_exercise_burn_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    for burn in [f64::NAN, f64::INFINITY, -5.0] {
        assert!(matches!(
            tracker.add_custom_exercise("Rowing machine", 1, "10 min", burn),
            Err(TrackerError::InvalidInput(_))
        ));
    }
    assert!(tracker.logs().is_empty());
}

#[test]
fn update_log_rejects_invalid_custom_entries() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    let meal_patch = DailyLogPatch {
        custom_meals: Some(vec![CustomMealEntry {
            name: "Tea".to_string(),
            macros: Macros::kcal_only(40.0),
            qty: f64::NAN,
        }]),
        ..DailyLogPatch::default()
    };
    assert!(matches!(
        tracker.update_log(meal_patch),
        Err(TrackerError::InvalidInput(_))
    ));

    let exercise_patch = DailyLogPatch {
        custom_exercises: Some(vec![CustomExerciseEntry {
            id: Uuid::new_v4(),
            name: "Rowing machine".to_string(),
            sets: 1,
            reps: "10 min".to_string(),
            kcal_burn: f64::INFINITY,
            timestamp: 0,
        }]),
        ..DailyLogPatch::default()
    };
    assert!(matches!(
        tracker.update_log(exercise_patch),
        Err(TrackerError::InvalidInput(_))
    ));
    assert!(tracker.logs().is_empty());
    assert!(SqliteStateRepository::new(&conn).raw(LOGS_KEY).unwrap().is_none());
}

#[test]
fn update_log_weight_keeps_history_in_step() {
    let conn = open_db_in_memory().unwrap();
    let mut tracker = tracker_on(&conn, monday());

    tracker
        .update_log(DailyLogPatch {
            weight: Some(Some(81.5)),
            ..DailyLogPatch::default()
        })
        .unwrap();
    assert_eq!(tracker.weights().get(monday()), Some(81.5));
    assert_eq!(tracker.current_log().weight, Some(81.5));

    tracker
        .update_log(DailyLogPatch {
            weight: Some(None),
            ..DailyLogPatch::default()
        })
        .unwrap();
    assert_eq!(tracker.weights().get(monday()), None);
    assert_eq!(tracker.current_log().weight, None);
    drop(tracker);

    let reloaded = tracker_on(&conn, monday());
    assert!(reloaded.weights().is_empty());
}

#[test]
fn failed_second_blob_write_leaves_store_untouched() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TRIGGER block_weights BEFORE INSERT ON kv_store
         WHEN NEW.key = 'coach_weights'
         BEGIN SELECT RAISE(ABORT, 'weights locked'); END;",
    )
    .unwrap();
    let mut tracker = tracker_on(&conn, monday());

    assert!(matches!(
        tracker.adjust_walking(30),
        Err(TrackerError::Repo(_))
    ));
    assert!(tracker.logs().is_empty());

    let repo = SqliteStateRepository::new(&conn);
    assert!(repo.raw(LOGS_KEY).unwrap().is_none());
    assert!(repo.raw(WEIGHTS_KEY).unwrap().is_none());
}

#[test]
fn history_is_capped() {
    let conn = open_db_in_memory().unwrap();
    let tracker = tracker_on(&conn, monday());

    let history = tracker.history(u32::MAX);
    assert_eq!(history.len(), MAX_HISTORY_DAYS as usize);
    assert_eq!(history[0].date, monday());
}
