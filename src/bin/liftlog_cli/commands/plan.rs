// ABOUTME: Plan commands for liftlog-cli
// ABOUTME: Seed the built-in plan, list exercises, and update weight or target reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::client::StoreClient;
use liftlog::errors::{AppError, AppResult};
use liftlog::models::TrainingDay;
use liftlog::plan::seed_default_plan;
use tracing::info;

use crate::helpers::display::display_exercises;

/// Seed the built-in plan
pub async fn seed(client: &StoreClient) -> AppResult<()> {
    let added = seed_default_plan(client).await?;
    println!("Added {added} exercises to the plan");
    Ok(())
}

/// List exercises, optionally for one day
pub async fn show(client: &StoreClient, day: Option<&str>) -> AppResult<()> {
    let day = day.map(TrainingDay::parse).transpose()?;
    let exercises = client.list_exercises(day).await?;
    if exercises.is_empty() {
        println!("No exercises found. Run `liftlog-cli plan seed` to load the default plan.");
        return Ok(());
    }
    display_exercises(&exercises);
    Ok(())
}

/// Update an exercise's weight and/or target reps
pub async fn update(
    client: &StoreClient,
    exercise_id: &str,
    weight: Option<&str>,
    reps: Option<&str>,
) -> AppResult<()> {
    if weight.is_none() && reps.is_none() {
        return Err(AppError::invalid_input(
            "nothing to update: pass --weight and/or --reps",
        ));
    }
    if let Some(weight) = weight {
        client.update_exercise_weight(exercise_id, weight).await?;
        info!(exercise.id = exercise_id, weight, "Weight updated");
    }
    if let Some(reps) = reps {
        client.update_exercise_reps(exercise_id, reps).await?;
        info!(exercise.id = exercise_id, reps, "Target reps updated");
    }
    let exercise = client.fetch_exercise(exercise_id).await?;
    println!(
        "{}: {} x {} @ {}",
        exercise.name, exercise.target_sets, exercise.target_reps, exercise.current_weight
    );
    Ok(())
}
