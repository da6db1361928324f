// ABOUTME: Per-record save state machine for writes going through the store client
// ABOUTME: Idle, Pending, Saved, Failed; a pending write is a guard that never outlives its caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Message recorded when a pending write is dropped before the store answered
pub const CANCELLED_MESSAGE: &str = "save cancelled before the store answered";

/// Persistence state of one record as shown to the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SaveState {
    /// Nothing written yet
    #[default]
    Idle,
    /// A write is in flight
    Pending,
    /// The last write was acknowledged
    Saved,
    /// The last write failed; the user may retry
    Failed {
        /// What went wrong
        message: String,
    },
}

impl SaveState {
    /// Whether a write is in flight
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

type States = Arc<Mutex<HashMap<String, SaveState>>>;

fn lock(states: &States) -> MutexGuard<'_, HashMap<String, SaveState>> {
    states.lock().unwrap_or_else(|poisoned| {
        warn!("Save state lock poisoned, recovering");
        poisoned.into_inner()
    })
}

/// Tracks the save state of every record a session writes
#[derive(Debug, Default)]
pub struct WriteTracker {
    states: States,
}

impl WriteTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `record_id`, `Idle` if never written
    #[must_use]
    pub fn state(&self, record_id: &str) -> SaveState {
        lock(&self.states)
            .get(record_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Mark a write as started
    ///
    /// The returned guard settles the outcome. Dropping it unsettled, as
    /// happens when the awaiting future is cancelled, records the write as
    /// failed so the record can be saved again.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` if a write for the record is already pending
    pub fn begin(&self, record_id: &str) -> AppResult<PendingWrite> {
        let mut states = lock(&self.states);
        if states.get(record_id).is_some_and(SaveState::is_pending) {
            return Err(AppError::write_in_flight(record_id));
        }
        states.insert(record_id.to_owned(), SaveState::Pending);
        debug!(record.id = record_id, "Write started");
        Ok(PendingWrite {
            states: Arc::clone(&self.states),
            record_id: record_id.to_owned(),
            settled: false,
        })
    }

    /// Drop all state for a record
    pub fn forget(&self, record_id: &str) {
        lock(&self.states).remove(record_id);
    }
}

/// An in-flight write for one record
#[must_use = "an unsettled write is recorded as cancelled when dropped"]
#[derive(Debug)]
pub struct PendingWrite {
    states: States,
    record_id: String,
    settled: bool,
}

impl PendingWrite {
    /// Record the write has been acknowledged
    pub fn succeed(mut self) {
        self.settle(Some(SaveState::Saved));
    }

    /// Record the write has failed
    pub fn fail(mut self, message: impl Into<String>) {
        self.settle(Some(SaveState::Failed {
            message: message.into(),
        }));
    }

    /// Record the write removed the record; its state returns to `Idle`
    pub fn forget(mut self) {
        self.settle(None);
    }

    fn settle(&mut self, outcome: Option<SaveState>) {
        let mut states = lock(&self.states);
        match outcome {
            Some(state) => {
                states.insert(self.record_id.clone(), state);
            }
            None => {
                states.remove(&self.record_id);
            }
        }
        self.settled = true;
    }
}

impl Drop for PendingWrite {
    fn drop(&mut self) {
        if !self.settled {
            warn!(record.id = %self.record_id, "Write dropped before the store answered");
            self.settle(Some(SaveState::Failed {
                message: CANCELLED_MESSAGE.to_owned(),
            }));
        }
    }
}
