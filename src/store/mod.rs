// ABOUTME: Persistent store contract for exercises, nutrition entries, and workout completions
// ABOUTME: Async request/response trait with SQLite and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fitness Store
//!
//! Every operation is a single request/response exchange. Callers that need
//! a deadline, cancellation, or retries go through
//! [`StoreClient`](crate::client::StoreClient) rather than calling a store
//! directly.
//!
//! ## Write semantics
//!
//! - `append_nutrition_entry` is keyed by the entry id: appending an
//!   identical entry twice succeeds once and acknowledges the repeat, while
//!   different content under an existing id is a `Conflict`.
//! - `update_exercise_weight` / `update_exercise_reps` set absolute values.
//! - `delete_nutrition_entry` of an unknown id is `NotFound`.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use liftlog_core::errors::StoreResult;
use liftlog_core::models::{
    DateRange, EntryId, ExercisePlanItem, NutritionEntry, TrainingDay, WorkoutDayCompletion,
};

/// Read/write contract of the external persistent store
#[async_trait]
pub trait FitnessStore: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Fetch one exercise of the plan
    async fn fetch_exercise(&self, id: &str) -> StoreResult<ExercisePlanItem>;

    /// List the plan, optionally for one day, ordered by day then position
    async fn list_exercises(&self, day: Option<TrainingDay>) -> StoreResult<Vec<ExercisePlanItem>>;

    /// Insert or replace a plan item
    async fn upsert_exercise(&self, item: &ExercisePlanItem) -> StoreResult<()>;

    /// Set an exercise's working weight
    async fn update_exercise_weight(&self, id: &str, weight: &str) -> StoreResult<()>;

    /// Set an exercise's target reps
    async fn update_exercise_reps(&self, id: &str, reps: &str) -> StoreResult<()>;

    /// Append a nutrition entry
    async fn append_nutrition_entry(&self, entry: &NutritionEntry) -> StoreResult<()>;

    /// Delete a nutrition entry by id
    async fn delete_nutrition_entry(&self, id: &EntryId) -> StoreResult<()>;

    /// Entries dated inside `range`, in insertion order
    async fn list_nutrition_entries(&self, range: DateRange) -> StoreResult<Vec<NutritionEntry>>;

    /// Completions dated inside `range`, oldest first
    async fn list_workout_completions(
        &self,
        range: DateRange,
    ) -> StoreResult<Vec<WorkoutDayCompletion>>;

    /// Insert or replace the completion for its date
    async fn record_workout_completion(&self, completion: &WorkoutDayCompletion)
        -> StoreResult<()>;
}
