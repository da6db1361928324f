// ABOUTME: Exercise logging session for one plan item: set entry, suggestion, saving progress
// ABOUTME: Also derives and records a day's workout completion from the sessions logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::save_state::{SaveState, WriteTracker};
use crate::client::StoreClient;
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{DateKey, ExercisePlanItem, SetInput, SetRecord, WorkoutDayCompletion};
use liftlog_intelligence::aggregation::derive_completion;
use liftlog_intelligence::config::ProgressionThresholds;
use liftlog_intelligence::progression::{suggest_for_sets_with, Suggestion};
use tracing::{info, warn};

/// Sets logged against one exercise of the plan
pub struct ExerciseLog {
    client: StoreClient,
    exercise: ExercisePlanItem,
    sets: Vec<SetRecord>,
    thresholds: ProgressionThresholds,
    saves: WriteTracker,
}

impl ExerciseLog {
    /// Start a log with one blank set per target set, pre-filled with the current weight
    #[must_use]
    pub fn new(
        client: StoreClient,
        exercise: ExercisePlanItem,
        thresholds: ProgressionThresholds,
    ) -> Self {
        let sets = (0..exercise.target_sets)
            .map(|_| SetRecord::planned(exercise.current_weight.clone()))
            .collect();
        Self {
            client,
            exercise,
            sets,
            thresholds,
            saves: WriteTracker::new(),
        }
    }

    /// Fetch the exercise and start a log for it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise or the store failure
    pub async fn open(
        client: StoreClient,
        exercise_id: &str,
        thresholds: ProgressionThresholds,
    ) -> AppResult<Self> {
        let exercise = client.fetch_exercise(exercise_id).await?;
        Ok(Self::new(client, exercise, thresholds))
    }

    /// Exercise being logged, as last saved
    #[must_use]
    pub const fn exercise(&self) -> &ExercisePlanItem {
        &self.exercise
    }

    /// Sets in order
    #[must_use]
    pub fn sets(&self) -> &[SetRecord] {
        &self.sets
    }

    /// Replace set `index` with the validated input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an index past the last set, or the
    /// validation error; the set is unchanged on error
    pub fn update_set(&mut self, index: usize, input: &SetInput) -> AppResult<&SetRecord> {
        let count = self.sets.len();
        let current = self.sets.get_mut(index).ok_or_else(|| {
            AppError::invalid_input(format!("set {index} does not exist ({count} sets)"))
        })?;
        let updated = input.apply_to(current)?;
        *current = updated;
        Ok(current)
    }

    /// Weight suggestion for the next session
    #[must_use]
    pub fn suggestion(&self) -> Suggestion {
        suggest_for_sets_with(&self.thresholds, &self.sets)
    }

    /// Save state of this exercise
    #[must_use]
    pub fn save_state(&self) -> SaveState {
        self.saves.state(&self.exercise.id)
    }

    /// Persist the working weight of the last set as the exercise's current weight
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the exercise has no sets, `ResourceLocked`
    /// while a save is pending, or the store failure; the exercise is
    /// unchanged on failure
    pub async fn save_progress(&mut self) -> AppResult<()> {
        let Some(weight) = self.sets.last().map(|s| s.weight.clone()) else {
            return Err(AppError::invalid_input(format!(
                "exercise '{}' has no sets to save",
                self.exercise.id
            )));
        };
        let id = self.exercise.id.clone();
        let write = self.saves.begin(&id)?;
        match self.client.update_exercise_weight(&id, weight.as_str()).await {
            Ok(()) => {
                info!(exercise.id = %id, weight = %weight, "Exercise progress saved");
                self.exercise.current_weight = weight;
                write.succeed();
                Ok(())
            }
            Err(error) => {
                warn!(exercise.id = %id, error = %error, "Exercise progress not saved");
                write.fail(error.to_string());
                Err(error.into())
            }
        }
    }
}

/// Derive a day's completion from its exercise logs and record it
///
/// # Errors
///
/// Returns the store failure
pub async fn record_day(
    client: &StoreClient,
    date: DateKey,
    logs: &[ExerciseLog],
) -> AppResult<WorkoutDayCompletion> {
    let completion = derive_completion(date, logs.iter().map(ExerciseLog::sets));
    client.record_workout_completion(&completion).await?;
    info!(
        date = %date,
        completed = completion.completed,
        exercises = completion.exercise_count,
        "Workout day recorded"
    );
    Ok(completion)
}
