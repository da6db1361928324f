// ABOUTME: Workout commands for liftlog-cli
// ABOUTME: Log sets for an exercise, record completed or rest days, and one-off suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::client::StoreClient;
use liftlog::config::ProgressionThresholds;
use liftlog::errors::{AppError, AppResult};
use liftlog::models::{DateKey, SetInput, SetRecord, Weight};
use liftlog::services::{ExerciseLog, ProgressService, SaveState};
use liftlog_intelligence::progression::suggest_progression_with;

use crate::helpers::display::display_sets;

/// Parse `REPS@RPE` or `REPS`
fn parse_set(raw: &str, weight: Option<&str>) -> AppResult<SetInput> {
    let (reps, rpe) = match raw.split_once('@') {
        Some((reps, rpe)) => (reps, Some(rpe)),
        None => (raw, None),
    };
    let parse = |field: &str, value: &str| {
        value.trim().parse::<i64>().map_err(|_| {
            AppError::invalid_input(format!("invalid {field} '{value}' in set '{raw}'"))
        })
    };
    Ok(SetInput {
        weight: weight.map(str::to_owned),
        reps: Some(parse("reps", reps)?),
        rpe: rpe.map(|r| parse("rpe", r)).transpose()?,
    })
}

/// Log sets against an exercise, print the suggestion, optionally save
pub async fn log(
    client: StoreClient,
    thresholds: ProgressionThresholds,
    exercise_id: &str,
    sets: &[String],
    weight: Option<&str>,
    save: bool,
) -> AppResult<()> {
    let mut log = ExerciseLog::open(client, exercise_id, thresholds).await?;
    let available = log.sets().len();
    if sets.len() > available {
        return Err(AppError::invalid_input(format!(
            "{} sets given but {} is prescribed {available}",
            sets.len(),
            log.exercise().name
        )));
    }
    for (index, raw) in sets.iter().enumerate() {
        let input = parse_set(raw, weight)?;
        log.update_set(index, &input)?;
    }

    display_sets(log.exercise(), log.sets());
    let suggestion = log.suggestion();
    println!("Suggestion: {}", suggestion.message());

    if save {
        log.save_progress().await?;
        if log.save_state() == SaveState::Saved {
            println!("Saved working weight: {}", log.exercise().current_weight);
        }
    }
    Ok(())
}

/// Record a completed workout
pub async fn complete(
    client: StoreClient,
    date: DateKey,
    exercises: u32,
    volume: f64,
) -> AppResult<()> {
    let completion = ProgressService::new(client)
        .mark_completed(date, exercises, volume)
        .await?;
    println!(
        "Recorded workout on {}: {} exercises, {} total volume",
        completion.date, completion.exercise_count, completion.total_volume
    );
    Ok(())
}

/// Record a rest day
pub async fn rest(client: StoreClient, date: DateKey) -> AppResult<()> {
    let completion = ProgressService::new(client).mark_rest(date).await?;
    println!("Recorded rest day on {}", completion.date);
    Ok(())
}

/// Suggest a weight change for one set, validating the raw numbers first
pub fn suggest(thresholds: &ProgressionThresholds, reps: i64, rpe: Option<i64>) -> AppResult<()> {
    let set = SetInput {
        weight: None,
        reps: Some(reps),
        rpe,
    }
    .apply_to(&SetRecord::planned(Weight::default()))?;
    let suggestion = suggest_progression_with(thresholds, set.reps_completed, set.rpe);
    println!("{}: {}", suggestion, suggestion.message());
    Ok(())
}
