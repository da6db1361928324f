// ABOUTME: LiftLog CLI - log workouts and nutrition, view progress, get weight suggestions
// ABOUTME: Parses commands with clap and maps failures to sysexits-style exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Load the built-in five-day plan
//! liftlog-cli plan seed
//!
//! # Show Monday's exercises
//! liftlog-cli plan show --day monday
//!
//! # Log a meal for today
//! liftlog-cli nutrition add --calories 650 --protein 45 --notes "chicken and rice"
//!
//! # Log sets for an exercise and save the working weight
//! liftlog-cli workout log push-1 --set 12@7 --set 12@8 --set 11@8 --save
//!
//! # Weekly progress
//! liftlog-cli progress --period week
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use liftlog::client::StoreClient;
use liftlog::config::LiftlogConfig;
use liftlog::errors::AppError;
use liftlog::logging::LoggingConfig;
use liftlog::models::DateKey;
use liftlog::store::SqliteStore;
use liftlog_intelligence::progress::Period;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::signal;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "liftlog-cli",
    version,
    about = "LiftLog workout and nutrition tracker",
    long_about = "Log sets against a five-day training plan, track daily calories and protein, and review streaks and averages."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (defaults to `LIFTLOG_DATABASE_URL`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Training plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Nutrition log commands
    Nutrition {
        #[command(subcommand)]
        action: NutritionCommand,
    },

    /// Workout logging commands
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Show streak, averages, calendar, and recent activity
    Progress {
        /// Reporting period
        #[arg(long, value_enum, default_value_t = PeriodArg::Week)]
        period: PeriodArg,

        /// Last day of the period (defaults to today)
        #[arg(long)]
        as_of: Option<DateKey>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Suggest a weight change for one set
    Suggest {
        /// Reps completed
        #[arg(long, allow_negative_numbers = true)]
        reps: i64,

        /// Perceived effort, 1-10
        #[arg(long, allow_negative_numbers = true)]
        rpe: Option<i64>,
    },
}

#[derive(Subcommand)]
enum PlanCommand {
    /// Add the built-in plan exercises missing from the database
    Seed,

    /// List plan exercises
    Show {
        /// Day id, weekday, or focus (e.g. `push`, `monday`)
        #[arg(long)]
        day: Option<String>,
    },

    /// Change an exercise's working weight or target reps
    Update {
        /// Exercise id
        exercise_id: String,

        /// New working weight (e.g. "140 lbs")
        #[arg(long)]
        weight: Option<String>,

        /// New target reps (e.g. "8-12")
        #[arg(long)]
        reps: Option<String>,
    },
}

#[derive(Subcommand)]
enum NutritionCommand {
    /// Log a meal or snack
    Add {
        /// Energy in kcal
        #[arg(long, allow_negative_numbers = true)]
        calories: i64,

        /// Protein in grams
        #[arg(long, allow_negative_numbers = true)]
        protein: i64,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Day to log under (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,
    },

    /// Delete an entry by id
    Delete {
        /// Entry id
        entry_id: String,
    },

    /// List a day's entries
    List {
        /// Day to list (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,
    },

    /// Show a day's calorie and protein totals
    Totals {
        /// Day to total (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,
    },
}

#[derive(Subcommand)]
enum WorkoutCommand {
    /// Log sets for one exercise and show the suggestion
    Log {
        /// Exercise id
        exercise_id: String,

        /// A set as REPS@RPE, in order (e.g. 12@7)
        #[arg(long = "set", required = true)]
        sets: Vec<String>,

        /// Weight used for every logged set (defaults to the current weight)
        #[arg(long)]
        weight: Option<String>,

        /// Save the working weight to the plan
        #[arg(long)]
        save: bool,
    },

    /// Record a completed workout
    Complete {
        /// Day of the workout (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,

        /// Exercises performed
        #[arg(long, default_value_t = 0)]
        exercises: u32,

        /// Total volume (weight x reps)
        #[arg(long, default_value_t = 0.0)]
        volume: f64,
    },

    /// Record a rest day
    Rest {
        /// Rest day (defaults to today)
        #[arg(long)]
        date: Option<DateKey>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PeriodArg {
    Week,
    Month,
    Quarter,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Week => Self::Week,
            PeriodArg::Month => Self::Month,
            PeriodArg::Quarter => Self::Quarter,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbosity(cli.verbose).init() {
        eprintln!("Warning: logging not initialized: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app| app.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = LiftlogConfig::from_env().map_err(AppError::from)?;
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }

    if let Command::Suggest { reps, rpe } = cli.command {
        return Ok(commands::workout::suggest(&config.progression, reps, rpe)?);
    }

    debug!(database.url = %config.database.url, "Connecting to database");
    let store = SqliteStore::connect(&config.database.url)
        .await
        .map_err(AppError::from)?;
    let client = StoreClient::new(Arc::new(store), config.store.clone());

    let token = client.cancellation_token().clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling pending store calls");
            token.cancel();
        }
    });

    match cli.command {
        Command::Plan { action } => match action {
            PlanCommand::Seed => commands::plan::seed(&client).await?,
            PlanCommand::Show { day } => commands::plan::show(&client, day.as_deref()).await?,
            PlanCommand::Update {
                exercise_id,
                weight,
                reps,
            } => {
                commands::plan::update(&client, &exercise_id, weight.as_deref(), reps.as_deref())
                    .await?;
            }
        },
        Command::Nutrition { action } => match action {
            NutritionCommand::Add {
                calories,
                protein,
                notes,
                date,
            } => {
                commands::nutrition::add(client, calories, protein, notes, resolve(date)).await?;
            }
            NutritionCommand::Delete { entry_id } => {
                commands::nutrition::delete(client, &entry_id).await?;
            }
            NutritionCommand::List { date } => {
                commands::nutrition::list(client, resolve(date)).await?;
            }
            NutritionCommand::Totals { date } => {
                commands::nutrition::totals(client, resolve(date)).await?;
            }
        },
        Command::Workout { action } => match action {
            WorkoutCommand::Log {
                exercise_id,
                sets,
                weight,
                save,
            } => {
                commands::workout::log(
                    client,
                    config.progression,
                    &exercise_id,
                    &sets,
                    weight.as_deref(),
                    save,
                )
                .await?;
            }
            WorkoutCommand::Complete {
                date,
                exercises,
                volume,
            } => {
                commands::workout::complete(client, resolve(date), exercises, volume).await?;
            }
            WorkoutCommand::Rest { date } => {
                commands::workout::rest(client, resolve(date)).await?;
            }
        },
        Command::Progress {
            period,
            as_of,
            json,
        } => {
            commands::progress::show(client, period.into(), resolve(as_of), json).await?;
        }
        Command::Suggest { .. } => {}
    }

    Ok(())
}

fn resolve(date: Option<DateKey>) -> DateKey {
    date.unwrap_or_else(DateKey::today)
}
