// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Date and record builders plus a store wrapper that injects failures and latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `liftlog`

use async_trait::async_trait;
use liftlog::client::{RetryConfig, StoreClient, StoreClientConfig};
use liftlog::store::{FitnessStore, MemoryStore};
use liftlog_core::errors::{StoreError, StoreResult};
use liftlog_core::models::{
    DateKey, DateRange, EntryId, ExercisePlanItem, NutritionEntry, TrainingDay, Weight,
    WorkoutDayCompletion,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use tokio::time::sleep;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Parse a date key, panicking on malformed test input
pub fn day(raw: &str) -> DateKey {
    DateKey::parse(raw).unwrap()
}

/// Build a nutrition entry
pub fn entry(id: &str, date: &str, calories: u32, protein: u32) -> NutritionEntry {
    NutritionEntry {
        id: EntryId::new(id).unwrap(),
        date: day(date),
        calories,
        protein,
        notes: None,
    }
}

/// Build a completed workout day
pub fn completed(date: &str, exercise_count: u32, total_volume: f64) -> WorkoutDayCompletion {
    WorkoutDayCompletion::completed(day(date), exercise_count, total_volume).unwrap()
}

/// Build a rest day
pub fn rest(date: &str) -> WorkoutDayCompletion {
    WorkoutDayCompletion::rest_day(day(date))
}

/// Build a plan item
pub fn exercise(id: &str, day: TrainingDay, order: u32, weight: &str) -> ExercisePlanItem {
    ExercisePlanItem {
        id: id.to_owned(),
        day,
        order,
        name: format!("Exercise {id}"),
        target_sets: 3,
        target_reps: "8-12".to_owned(),
        current_weight: Weight::new(weight),
        rest_between_sets: "90 sec".to_owned(),
        rest_before_next: "2 min".to_owned(),
        tempo: "2-0-1".to_owned(),
        rpe_target: "7-8".to_owned(),
        progression_rule: "Add 5 lbs at 12 reps".to_owned(),
        notes: None,
        tutorial_url: None,
    }
}

/// Client settings with short deadlines and near-instant retries
pub fn fast_config() -> StoreClientConfig {
    StoreClientConfig {
        timeout: Duration::from_millis(200),
        retry: RetryConfig {
            max_attempts: 3,
            initial_backoff_ms: 1,
        },
    }
}

/// Client over a fresh in-memory store
pub fn memory_client() -> StoreClient {
    StoreClient::new(Arc::new(MemoryStore::new()), fast_config())
}

/// Store wrapper that fails or stalls calls on demand
///
/// Queued failures are consumed one per call, in order, before the call
/// reaches the inner store.
pub struct FaultyStore {
    inner: MemoryStore,
    failures: Mutex<VecDeque<StoreError>>,
    delay: Mutex<Option<Duration>>,
    calls: AtomicUsize,
}

impl Default for FaultyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FaultyStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            failures: Mutex::new(VecDeque::new()),
            delay: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the next `count` calls as unavailable
    pub fn fail_next(&self, count: usize) {
        let mut failures = self.failures.lock().unwrap();
        for _ in 0..count {
            failures.push_back(StoreError::unavailable("connection reset"));
        }
    }

    /// Fail the next call with `error`
    pub fn push_failure(&self, error: StoreError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// Stall every call for `delay`
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.lock().unwrap() = delay;
    }

    /// Calls received so far, including failed ones
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Store without fault injection, for arranging test data
    pub const fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    async fn before_call(&self) -> StoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            sleep(delay).await;
        }
        let failure = self.failures.lock().unwrap().pop_front();
        failure.map_or(Ok(()), Err)
    }
}

#[async_trait]
impl FitnessStore for FaultyStore {
    fn name(&self) -> &'static str {
        "faulty"
    }

    async fn fetch_exercise(&self, id: &str) -> StoreResult<ExercisePlanItem> {
        self.before_call().await?;
        self.inner.fetch_exercise(id).await
    }

    async fn list_exercises(&self, day: Option<TrainingDay>) -> StoreResult<Vec<ExercisePlanItem>> {
        self.before_call().await?;
        self.inner.list_exercises(day).await
    }

    async fn upsert_exercise(&self, item: &ExercisePlanItem) -> StoreResult<()> {
        self.before_call().await?;
        self.inner.upsert_exercise(item).await
    }

    async fn update_exercise_weight(&self, id: &str, weight: &str) -> StoreResult<()> {
        self.before_call().await?;
        self.inner.update_exercise_weight(id, weight).await
    }

    async fn update_exercise_reps(&self, id: &str, reps: &str) -> StoreResult<()> {
        self.before_call().await?;
        self.inner.update_exercise_reps(id, reps).await
    }

    async fn append_nutrition_entry(&self, entry: &NutritionEntry) -> StoreResult<()> {
        self.before_call().await?;
        self.inner.append_nutrition_entry(entry).await
    }

    async fn delete_nutrition_entry(&self, id: &EntryId) -> StoreResult<()> {
        self.before_call().await?;
        self.inner.delete_nutrition_entry(id).await
    }

    async fn list_nutrition_entries(&self, range: DateRange) -> StoreResult<Vec<NutritionEntry>> {
        self.before_call().await?;
        self.inner.list_nutrition_entries(range).await
    }

    async fn list_workout_completions(
        &self,
        range: DateRange,
    ) -> StoreResult<Vec<WorkoutDayCompletion>> {
        self.before_call().await?;
        self.inner.list_workout_completions(range).await
    }

    async fn record_workout_completion(
        &self,
        completion: &WorkoutDayCompletion,
    ) -> StoreResult<()> {
        self.before_call().await?;
        self.inner.record_workout_completion(completion).await
    }
}

/// Faulty store and a fast client over it
pub fn faulty_client() -> (Arc<FaultyStore>, StoreClient) {
    let store = Arc::new(FaultyStore::new());
    let client = StoreClient::new(store.clone(), fast_config());
    (store, client)
}
