// ABOUTME: Progress aggregation and coaching recommendation engine
// ABOUTME: Pure functions turning raw workout and nutrition records into derived metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Intelligence
//!
//! Everything in this crate is a pure function over already-materialized
//! records: same input, same output, no I/O, inputs never mutated. Callers
//! are expected to have validated records at the boundary (see
//! `liftlog_core::models`), so nothing here returns an error.

pub use liftlog_core::constants;
pub use liftlog_core::models;

/// Daily totals, period averages, streaks, and workout volume
pub mod aggregation;

/// Engine configuration (progression thresholds)
pub mod config;

/// Progress summary: calendar heat-map and recent activity
pub mod progress;

/// Weight-progression decision table
pub mod progression;

pub use aggregation::{
    completion_streak, daily_totals, daily_totals_by_date, derive_completion, period_average,
    rounded_average, set_volume, DailyTotals, ExerciseSets, MetricSource, NutritionMetric,
};
pub use config::{ConfigError, ProgressionThresholds};
pub use progress::{summarize, CalendarCell, CalendarMark, Period, ProgressSummary};
pub use progression::{
    suggest_for_sets, suggest_for_sets_with, suggest_progression, suggest_progression_with,
    Suggestion,
};
