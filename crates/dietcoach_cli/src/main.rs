//! Command-line front end for the DietCoach tracker.
//!
//! ```bash
//! dietcoach summary
//! dietcoach meal set breakfast b2 --qty 1.5
//! dietcoach custom-meal add "2 servings coconut water"
//! dietcoach exercise toggle up1
//! dietcoach walk 20
//! dietcoach supplement toggle omega3
//! dietcoach weight 82.4
//! dietcoach weight-stats --year
//! ```

mod render;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use dietcoach_core::catalog::{meal_category, scheduled_supplements, workout_for_date};
use dietcoach_core::db::open_db;
use dietcoach_core::{
    default_log_level, init_logging, CatalogEstimator, Gender, Macros, MealSlot,
    SqliteStateRepository, Tracker, TrackerConfig, UserProfile, Uuid, WeightWindow, WorkoutMode,
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "dietcoach",
    version,
    about = "Personal diet and fitness tracker",
    long_about = "Log meals, workouts, walking, water, supplements and weight against a fixed plan, and review daily scores and weight trends."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// State database file
    #[arg(long, global = true, default_value = "dietcoach.db")]
    db: PathBuf,

    /// Log directory (defaults to `logs/` next to the database)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// JSON file with score and timezone overrides
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Act on this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the day's totals, burn, score and remaining budget
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Show scores for recent days, newest first
    History {
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Plan meal selection
    Meal {
        #[command(subcommand)]
        action: MealCommand,
    },
    /// Free-form food entries
    CustomMeal {
        #[command(subcommand)]
        action: CustomMealCommand,
    },
    /// Planned and custom exercises
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommand,
    },
    /// Add (or with a negative value, remove) walking minutes
    Walk {
        #[arg(allow_hyphen_values = true)]
        minutes: i64,
    },
    /// Add (or with a negative value, remove) water in ml
    Water {
        #[arg(allow_hyphen_values = true)]
        ml: i64,
    },
    /// Supplement schedule and check-off
    Supplement {
        #[command(subcommand)]
        action: SupplementCommand,
    },
    /// Record the day's weight in kg
    Weight { kg: f64 },
    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
    /// Weight trend and deficit plans
    WeightStats {
        /// Use the last 365 weigh-ins instead of the last 14
        #[arg(long)]
        year: bool,
    },
    /// Print all persisted state as JSON
    Export,
    /// Delete all persisted state
    Purge {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MealCommand {
    /// List the options for a slot
    Options { slot: MealSlot },
    /// Select an option for a slot
    Set {
        slot: MealSlot,
        id: String,
        #[arg(long, default_value_t = 1.0)]
        qty: f64,
    },
    /// Clear a slot
    Clear { slot: MealSlot },
}

#[derive(Subcommand)]
enum CustomMealCommand {
    /// Add a food; macros are estimated when `--kcal` is omitted
    Add {
        name: String,
        #[command(flatten)]
        macros: MacroArgs,
        #[arg(long, default_value_t = 1.0)]
        qty: f64,
    },
    /// Remove a food by its position in the day's list
    Remove { index: usize },
}

#[derive(Args)]
struct MacroArgs {
    #[arg(long)]
    kcal: Option<f64>,
    #[arg(long, default_value_t = 0.0)]
    protein: f64,
    #[arg(long, default_value_t = 0.0)]
    carbs: f64,
    #[arg(long, default_value_t = 0.0)]
    fat: f64,
    #[arg(long, default_value_t = 0.0)]
    fiber: f64,
}

#[derive(Subcommand)]
enum ExerciseCommand {
    /// List the day's planned exercises
    List,
    /// Mark a planned exercise done or not done
    Toggle { id: String },
    /// Add an exercise outside the plan; burn is estimated when `--kcal` is omitted
    AddCustom {
        name: String,
        #[arg(long, default_value_t = 1)]
        sets: u32,
        #[arg(long, default_value = "")]
        reps: String,
        #[arg(long)]
        kcal: Option<f64>,
    },
    /// Remove a custom exercise by id
    RemoveCustom { id: String },
}

#[derive(Subcommand)]
enum SupplementCommand {
    /// List the day's scheduled supplements
    List,
    /// Mark a scheduled supplement taken or not taken
    Toggle { id: String },
}

#[derive(Subcommand)]
enum ProfileCommand {
    Show,
    Set {
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        gender: Option<Gender>,
        #[arg(long)]
        activity: Option<f64>,
        #[arg(long)]
        mode: Option<WorkoutMode>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_dir = cli
        .log_dir
        .clone()
        .unwrap_or_else(|| default_log_dir(&cli.db));
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, &log_dir).context("failed to initialize logging")?;

    let config = match &cli.config {
        Some(path) => TrackerConfig::from_json_file(path)
            .with_context(|| format!("failed to load config `{}`", path.display()))?,
        None => TrackerConfig::default(),
    };

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let mut tracker = Tracker::load_at(SqliteStateRepository::new(&conn), Utc::now(), config);
    if let Some(date) = cli.date {
        tracker.set_today(date);
    }

    info!(
        "event=cli_command module=cli status=start date={}",
        tracker.today()
    );
    run(cli.command, &mut tracker)
}

fn default_log_dir(db: &Path) -> PathBuf {
    db.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(|parent| parent.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn run(command: Command, tracker: &mut Tracker<SqliteStateRepository<'_>>) -> Result<()> {
    match command {
        Command::Summary { json } => {
            let summary = tracker.today_summary();
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                render::summary(&summary);
            }
        }
        Command::History { days } => render::history(&tracker.history(days)),
        Command::Meal { action } => meal(action, tracker)?,
        Command::CustomMeal { action } => custom_meal(action, tracker)?,
        Command::Exercise { action } => exercise(action, tracker)?,
        Command::Walk { minutes } => {
            let total = tracker.adjust_walking(minutes)?;
            println!("walking: {total} min");
        }
        Command::Water { ml } => {
            let total = tracker.add_water(ml)?;
            println!("water: {total} ml");
        }
        Command::Supplement { action } => supplement(action, tracker)?,
        Command::Weight { kg } => {
            tracker.record_weight(kg)?;
            println!("weight for {}: {kg:.1} kg", tracker.today());
        }
        Command::Profile { action } => profile(action, tracker)?,
        Command::WeightStats { year } => {
            let window = if year {
                WeightWindow::Year
            } else {
                WeightWindow::TwoWeeks
            };
            render::weight_stats(&tracker.weight_stats(window));
        }
        Command::Export => println!("{}", serde_json::to_string_pretty(&tracker.snapshot())?),
        Command::Purge { yes } => {
            if !yes {
                bail!("purge deletes every log, weight and the profile; rerun with --yes");
            }
            tracker.purge()?;
            println!("all tracker data deleted");
        }
    }
    Ok(())
}

fn meal(action: MealCommand, tracker: &mut Tracker<SqliteStateRepository<'_>>) -> Result<()> {
    match action {
        MealCommand::Options { slot } => render::meal_options(meal_category(slot)),
        MealCommand::Set { slot, id, qty } => {
            tracker.select_meal(slot, &id, qty)?;
            println!("{slot}: {id} x{qty}");
        }
        MealCommand::Clear { slot } => {
            if tracker.clear_meal(slot)? {
                println!("{slot}: cleared");
            } else {
                println!("{slot}: nothing selected");
            }
        }
    }
    Ok(())
}

fn custom_meal(
    action: CustomMealCommand,
    tracker: &mut Tracker<SqliteStateRepository<'_>>,
) -> Result<()> {
    match action {
        CustomMealCommand::Add { name, macros, qty } => {
            let macros = match macros.kcal {
                Some(kcal) => Macros::new(kcal, macros.protein, macros.carbs, macros.fat, macros.fiber),
                None => tracker
                    .estimate_custom_meal(&name, &CatalogEstimator::new())
                    .with_context(|| format!("no estimate for `{name}`; pass --kcal to enter it manually"))?,
            };
            let index = tracker.add_custom_meal(&name, macros, qty)?;
            println!(
                "custom meal #{index}: {name} ({:.0} kcal x{qty})",
                macros.kcal
            );
        }
        CustomMealCommand::Remove { index } => {
            let removed = tracker.remove_custom_meal(index)?;
            println!("removed custom meal: {}", removed.name);
        }
    }
    Ok(())
}

fn exercise(
    action: ExerciseCommand,
    tracker: &mut Tracker<SqliteStateRepository<'_>>,
) -> Result<()> {
    match action {
        ExerciseCommand::List => {
            let day = workout_for_date(tracker.today(), tracker.profile().workout_mode);
            render::workout(day, &tracker.current_log());
        }
        ExerciseCommand::Toggle { id } => {
            let done = tracker.toggle_exercise(&id)?;
            println!("{id}: {}", if done { "done" } else { "not done" });
        }
        ExerciseCommand::AddCustom {
            name,
            sets,
            reps,
            kcal,
        } => {
            let kcal = match kcal {
                Some(kcal) => kcal,
                None => tracker
                    .estimate_custom_exercise(&name, sets, &CatalogEstimator::new())
                    .with_context(|| format!("no estimate for `{name}`; pass --kcal to enter it manually"))?,
            };
            let id = tracker.add_custom_exercise(&name, sets, &reps, kcal)?;
            println!("custom exercise {id}: {name} ({kcal:.0} kcal)");
        }
        ExerciseCommand::RemoveCustom { id } => {
            let id: Uuid = id
                .parse()
                .with_context(|| format!("`{id}` is not a custom exercise id"))?;
            let removed = tracker.remove_custom_exercise(id)?;
            println!("removed custom exercise: {}", removed.name);
        }
    }
    Ok(())
}

fn supplement(
    action: SupplementCommand,
    tracker: &mut Tracker<SqliteStateRepository<'_>>,
) -> Result<()> {
    match action {
        SupplementCommand::List => {
            render::supplements(&scheduled_supplements(tracker.today()), &tracker.current_log());
        }
        SupplementCommand::Toggle { id } => {
            let taken = tracker.toggle_supplement(&id)?;
            println!("{id}: {}", if taken { "taken" } else { "not taken" });
        }
    }
    Ok(())
}

fn profile(action: ProfileCommand, tracker: &mut Tracker<SqliteStateRepository<'_>>) -> Result<()> {
    match action {
        ProfileCommand::Show => println!("{}", serde_json::to_string_pretty(tracker.profile())?),
        ProfileCommand::Set {
            height,
            age,
            gender,
            activity,
            mode,
        } => {
            let current = tracker.profile().clone();
            let updated = UserProfile {
                height: height.unwrap_or(current.height),
                age: age.unwrap_or(current.age),
                gender: gender.unwrap_or(current.gender),
                activity_level: activity.unwrap_or(current.activity_level),
                workout_mode: mode.unwrap_or(current.workout_mode),
            };
            tracker.set_profile(updated)?;
            println!("{}", serde_json::to_string_pretty(tracker.profile())?);
        }
    }
    Ok(())
}
