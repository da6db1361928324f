// ABOUTME: Session and service layer on top of the store client
// ABOUTME: Nutrition and exercise logging sessions, save states, and progress summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sessions own their state and are passed explicitly; nothing here is
//! global. Every write goes through [`StoreClient`](crate::client::StoreClient)
//! and is reflected in a [`SaveState`].

/// Exercise logging for one plan item
pub mod exercise_log;

/// Nutrition logging with date navigation
pub mod nutrition_log;

/// Progress summaries and day completion records
pub mod progress;

/// Per-record save state machine
pub mod save_state;

pub use exercise_log::{record_day, ExerciseLog};
pub use nutrition_log::{EntryIdGenerator, NutritionLog};
pub use progress::ProgressService;
pub use save_state::{PendingWrite, SaveState, WriteTracker, CANCELLED_MESSAGE};
