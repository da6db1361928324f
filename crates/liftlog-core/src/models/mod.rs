// ABOUTME: Core data models for workouts, nutrition, and the exercise plan
// ABOUTME: Re-exports the date key, set, nutrition, completion, and plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the engine, the stores, and the application layer.
//!
//! Raw input types (`NewNutritionEntry`, `SetInput`) are the only way to
//! build validated records from user-supplied numbers.

mod date_key;
mod nutrition;
mod plan;
mod workout;

pub use date_key::{DateKey, DateRange};
pub use nutrition::{EntryId, NewNutritionEntry, NutritionEntry};
pub use plan::{ExercisePlanItem, TrainingDay};
pub use workout::{Rpe, SetInput, SetRecord, Weight, WorkoutDayCompletion};
