// ABOUTME: Store client adding deadlines, cancellation, and retry with exponential backoff
// ABOUTME: Reads and keyed writes are retried on transient failures; deletes never are
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Store Client
//!
//! Wraps a [`FitnessStore`] so that every call is bounded by a timeout and
//! can be abandoned through a [`CancellationToken`]. Transient failures
//! (`Unavailable`, `Timeout`) are retried only for operations that are safe
//! to repeat:
//!
//! | operation                         | retried | why it is safe                 |
//! |-----------------------------------|---------|--------------------------------|
//! | fetch / list                      | yes     | read-only                      |
//! | `append_nutrition_entry`          | yes     | keyed by entry id              |
//! | weight / reps updates, upserts    | yes     | absolute values                |
//! | `delete_nutrition_entry`          | no      | a repeat reports `NotFound`    |

use crate::store::FitnessStore;
use liftlog_core::errors::{StoreError, StoreResult};
use liftlog_core::models::{
    DateRange, EntryId, ExercisePlanItem, NutritionEntry, TrainingDay, WorkoutDayCompletion,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

/// Default per-attempt deadline
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Configuration for retry behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total attempts including the first one
    pub max_attempts: u32,
    /// Delay before the first retry in milliseconds, doubled on each further retry
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 200,
        }
    }
}

impl RetryConfig {
    /// Delay to wait after failed attempt number `attempt` (1-based)
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2_u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(self.initial_backoff_ms.saturating_mul(factor))
    }

    /// No retries at all
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff_ms: 0,
        }
    }
}

/// Deadline and retry settings of a [`StoreClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreClientConfig {
    /// Deadline for each attempt
    pub timeout: Duration,
    /// Retry policy for retryable operations
    pub retry: RetryConfig,
}

impl Default for StoreClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retry: RetryConfig::default(),
        }
    }
}

/// Shared flag that abandons in-flight and future store calls once set
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    /// Create a token that is not cancelled
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Cancel every operation observing this token
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether `cancel` has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolve once the token is cancelled
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this only returns on cancel
        let _ = receiver.wait_for(|cancelled| *cancelled).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Retry {
    OnTransient,
    Never,
}

/// Store access with timeout, cancellation, and retry
#[derive(Clone)]
pub struct StoreClient {
    store: Arc<dyn FitnessStore>,
    config: StoreClientConfig,
    cancel: CancellationToken,
}

impl StoreClient {
    /// Create a client over `store`
    #[must_use]
    pub fn new(store: Arc<dyn FitnessStore>, config: StoreClientConfig) -> Self {
        Self {
            store,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Same store and settings, observing `token` instead
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
            cancel: token,
        }
    }

    /// Token cancelling this client's calls
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Client settings
    #[must_use]
    pub const fn config(&self) -> &StoreClientConfig {
        &self.config
    }

    /// Underlying store
    #[must_use]
    pub fn store(&self) -> &Arc<dyn FitnessStore> {
        &self.store
    }

    /// Fetch one exercise (retried)
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or the last transient failure
    pub async fn fetch_exercise(&self, id: &str) -> StoreResult<ExercisePlanItem> {
        self.call("fetch_exercise", Retry::OnTransient, || {
            self.store.fetch_exercise(id)
        })
        .await
    }

    /// List plan items (retried)
    ///
    /// # Errors
    ///
    /// Returns the store failure after retries are exhausted
    pub async fn list_exercises(
        &self,
        day: Option<TrainingDay>,
    ) -> StoreResult<Vec<ExercisePlanItem>> {
        self.call("list_exercises", Retry::OnTransient, || {
            self.store.list_exercises(day)
        })
        .await
    }

    /// Insert or replace a plan item (retried, full replacement)
    ///
    /// # Errors
    ///
    /// Returns the store failure after retries are exhausted
    pub async fn upsert_exercise(&self, item: &ExercisePlanItem) -> StoreResult<()> {
        self.call("upsert_exercise", Retry::OnTransient, || {
            self.store.upsert_exercise(item)
        })
        .await
    }

    /// Set an exercise's working weight (retried, absolute value)
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or the last transient failure
    pub async fn update_exercise_weight(&self, id: &str, weight: &str) -> StoreResult<()> {
        self.call("update_exercise_weight", Retry::OnTransient, || {
            self.store.update_exercise_weight(id, weight)
        })
        .await
    }

    /// Set an exercise's target reps (retried, absolute value)
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or the last transient failure
    pub async fn update_exercise_reps(&self, id: &str, reps: &str) -> StoreResult<()> {
        self.call("update_exercise_reps", Retry::OnTransient, || {
            self.store.update_exercise_reps(id, reps)
        })
        .await
    }

    /// Append a nutrition entry (retried, deduplicated by entry id)
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the id is taken by different content, or the
    /// last transient failure
    pub async fn append_nutrition_entry(&self, entry: &NutritionEntry) -> StoreResult<()> {
        self.call("append_nutrition_entry", Retry::OnTransient, || {
            self.store.append_nutrition_entry(entry)
        })
        .await
    }

    /// Delete a nutrition entry (never retried)
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or the first failure
    pub async fn delete_nutrition_entry(&self, id: &EntryId) -> StoreResult<()> {
        self.call("delete_nutrition_entry", Retry::Never, || {
            self.store.delete_nutrition_entry(id)
        })
        .await
    }

    /// Entries inside `range`, in insertion order (retried)
    ///
    /// # Errors
    ///
    /// Returns the store failure after retries are exhausted
    pub async fn list_nutrition_entries(
        &self,
        range: DateRange,
    ) -> StoreResult<Vec<NutritionEntry>> {
        self.call("list_nutrition_entries", Retry::OnTransient, || {
            self.store.list_nutrition_entries(range)
        })
        .await
    }

    /// Completions inside `range`, oldest first (retried)
    ///
    /// # Errors
    ///
    /// Returns the store failure after retries are exhausted
    pub async fn list_workout_completions(
        &self,
        range: DateRange,
    ) -> StoreResult<Vec<WorkoutDayCompletion>> {
        self.call("list_workout_completions", Retry::OnTransient, || {
            self.store.list_workout_completions(range)
        })
        .await
    }

    /// Insert or replace a day's completion (retried, keyed by date)
    ///
    /// # Errors
    ///
    /// Returns the store failure after retries are exhausted
    pub async fn record_workout_completion(
        &self,
        completion: &WorkoutDayCompletion,
    ) -> StoreResult<()> {
        self.call("record_workout_completion", Retry::OnTransient, || {
            self.store.record_workout_completion(completion)
        })
        .await
    }

    async fn call<T, F, Fut>(&self, operation: &'static str, retry: Retry, mut op: F) -> StoreResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = StoreResult<T>>,
    {
        let max_attempts = match retry {
            Retry::OnTransient => self.config.retry.max_attempts.max(1),
            Retry::Never => 1,
        };
        let timeout_ms = self.config.timeout.as_millis() as u64;

        let mut attempt = 0;
        loop {
            attempt += 1;
            if self.cancel.is_cancelled() {
                return Err(StoreError::Cancelled { operation });
            }
            debug!(store.op = operation, store.backend = self.store.name(), attempt, "Store call");

            let result = tokio::select! {
                biased;
                () = self.cancel.cancelled() => Err(StoreError::Cancelled { operation }),
                outcome = timeout(self.config.timeout, op()) => outcome
                    .unwrap_or(Err(StoreError::Timeout { operation, timeout_ms })),
            };

            match result {
                Err(error) if error.is_retryable() && attempt < max_attempts => {
                    let backoff = self.config.retry.backoff(attempt);
                    warn!(
                        store.op = operation,
                        attempt,
                        max_attempts,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %error,
                        "Transient store failure, retrying"
                    );
                    tokio::select! {
                        biased;
                        () = self.cancel.cancelled() => {
                            return Err(StoreError::Cancelled { operation });
                        }
                        () = sleep(backoff) => {}
                    }
                }
                Err(error) => {
                    if error.is_retryable() {
                        warn!(store.op = operation, attempt, error = %error, "Store call failed");
                    }
                    return Err(error);
                }
                Ok(value) => return Ok(value),
            }
        }
    }
}
