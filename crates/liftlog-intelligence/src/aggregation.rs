// ABOUTME: Single-pass aggregations over nutrition entries and workout completions
// ABOUTME: Daily totals, period averages, trailing completion streak, and set volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Aggregation
//!
//! Totals accumulate in `u64` so that no realistic number of entries can
//! overflow. Entries are never deduplicated by content: two meals with the
//! same numbers are two meals.

use crate::models::{DateKey, NutritionEntry, SetRecord, WorkoutDayCompletion};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Calories and protein summed over one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Total kcal
    pub calories: u64,
    /// Total protein in grams
    pub protein: u64,
}

impl DailyTotals {
    fn add(&mut self, entry: &NutritionEntry) {
        self.calories += u64::from(entry.calories);
        self.protein += u64::from(entry.protein);
    }
}

/// Nutrition field to average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionMetric {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
}

/// Anything carrying the nutrition metrics
pub trait MetricSource {
    /// Value of `metric` for this record
    fn metric(&self, metric: NutritionMetric) -> u64;
}

impl MetricSource for NutritionEntry {
    fn metric(&self, metric: NutritionMetric) -> u64 {
        match metric {
            NutritionMetric::Calories => u64::from(self.calories),
            NutritionMetric::Protein => u64::from(self.protein),
        }
    }
}

impl MetricSource for DailyTotals {
    fn metric(&self, metric: NutritionMetric) -> u64 {
        match metric {
            NutritionMetric::Calories => self.calories,
            NutritionMetric::Protein => self.protein,
        }
    }
}

/// Sum calories and protein of the entries logged on `date`
///
/// An empty match yields zero totals.
#[must_use]
pub fn daily_totals(entries: &[NutritionEntry], date: DateKey) -> DailyTotals {
    entries
        .iter()
        .filter(|e| e.date == date)
        .fold(DailyTotals::default(), |mut totals, entry| {
            totals.add(entry);
            totals
        })
}

/// Bucket entries by date key and total each bucket
#[must_use]
pub fn daily_totals_by_date(entries: &[NutritionEntry]) -> BTreeMap<DateKey, DailyTotals> {
    let mut buckets: BTreeMap<DateKey, DailyTotals> = BTreeMap::new();
    for entry in entries {
        buckets.entry(entry.date).or_default().add(entry);
    }
    buckets
}

/// Arithmetic mean of `metric` over the window
///
/// Returns `None` for an empty window rather than dividing by zero.
#[must_use]
pub fn period_average<T: MetricSource>(window: &[T], metric: NutritionMetric) -> Option<f64> {
    if window.is_empty() {
        return None;
    }
    let total: u64 = window.iter().map(|item| item.metric(metric)).sum();
    Some(total as f64 / window.len() as f64)
}

/// Round an average for display, halves away from zero
#[must_use]
pub fn rounded_average(average: f64) -> i64 {
    average.round() as i64
}

/// Consecutive completed days counted back from the most recent one
///
/// `days` must be oldest first. The most recent day is always part of the
/// scan, so a day not yet logged breaks the streak.
#[must_use]
pub fn completion_streak(days: &[WorkoutDayCompletion]) -> u32 {
    let streak = days.iter().rev().take_while(|day| day.completed).count();
    u32::try_from(streak).unwrap_or(u32::MAX)
}

/// Volume of one set: weight magnitude times reps, zero without a numeric weight
#[must_use]
pub fn set_volume(set: &SetRecord) -> f64 {
    set.weight
        .magnitude()
        .map_or(0.0, |magnitude| magnitude * f64::from(set.reps_completed))
}

/// Logged sets of one exercise
pub type ExerciseSets<'a> = &'a [SetRecord];

/// Derive a day's completion from the sets logged for each exercise
///
/// An exercise counts once it has at least one set with reps entered. A
/// day with no such exercise is a rest day.
#[must_use]
pub fn derive_completion<'a, I>(date: DateKey, exercises: I) -> WorkoutDayCompletion
where
    I: IntoIterator<Item = ExerciseSets<'a>>,
{
    let mut exercise_count = 0_u32;
    let mut total_volume = 0.0;
    for sets in exercises {
        if sets.iter().any(|s| s.reps_completed > 0) {
            exercise_count += 1;
            total_volume += sets.iter().map(set_volume).sum::<f64>();
        }
    }

    if exercise_count == 0 {
        return WorkoutDayCompletion::rest_day(date);
    }
    WorkoutDayCompletion {
        date,
        completed: true,
        exercise_count,
        total_volume,
    }
}
