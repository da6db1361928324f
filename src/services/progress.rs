// ABOUTME: Progress service fetching a period's records and summarizing them
// ABOUTME: Also records completed and rest days for the calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::StoreClient;
use liftlog_core::errors::AppResult;
use liftlog_core::models::{DateKey, WorkoutDayCompletion};
use liftlog_intelligence::progress::{summarize, Period, ProgressSummary};
use tracing::debug;

/// Reads progress data through the store client
pub struct ProgressService {
    client: StoreClient,
}

impl ProgressService {
    /// Create a service over `client`
    #[must_use]
    pub const fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Summary of `period` ending at `as_of`
    ///
    /// # Errors
    ///
    /// Returns the store failure if either list cannot be read
    pub async fn summary(&self, period: Period, as_of: DateKey) -> AppResult<ProgressSummary> {
        let range = period.range(as_of);
        let nutrition = self.client.list_nutrition_entries(range).await?;
        let completions = self.client.list_workout_completions(range).await?;
        debug!(
            period = %period,
            entries = nutrition.len(),
            completions = completions.len(),
            "Building progress summary"
        );
        Ok(summarize(period, as_of, &nutrition, &completions))
    }

    /// Record a completed workout
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative volume or the store failure
    pub async fn mark_completed(
        &self,
        date: DateKey,
        exercise_count: u32,
        total_volume: f64,
    ) -> AppResult<WorkoutDayCompletion> {
        let completion = WorkoutDayCompletion::completed(date, exercise_count, total_volume)?;
        self.client.record_workout_completion(&completion).await?;
        Ok(completion)
    }

    /// Record a rest day
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn mark_rest(&self, date: DateKey) -> AppResult<WorkoutDayCompletion> {
        let completion = WorkoutDayCompletion::rest_day(date);
        self.client.record_workout_completion(&completion).await?;
        Ok(completion)
    }
}
