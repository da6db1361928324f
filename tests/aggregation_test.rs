// ABOUTME: Tests for the aggregation engine: daily totals, averages, streaks, completion derivation
// ABOUTME: Covers empty windows, order independence, and trailing-streak edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{completed, day, entry, rest};
use liftlog_core::models::{Rpe, SetRecord, Weight};
use liftlog_intelligence::aggregation::{
    completion_streak, daily_totals, daily_totals_by_date, derive_completion, period_average,
    rounded_average, set_volume, DailyTotals, NutritionMetric,
};

fn logged_set(weight: &str, reps: u32, rpe: i64) -> SetRecord {
    SetRecord {
        weight: Weight::new(weight),
        reps_completed: reps,
        rpe: Some(Rpe::new(rpe).unwrap()),
    }
}

// ============================================================================
// Daily totals
// ============================================================================

#[test]
fn test_daily_totals_sums_only_matching_date() {
    let entries = vec![
        entry("1", "2024-01-15", 650, 45),
        entry("2", "2024-01-15", 820, 62),
        entry("3", "2024-01-16", 500, 30),
        entry("4", "2024-01-15", 310, 25),
    ];

    let totals = daily_totals(&entries, day("2024-01-15"));

    assert_eq!(
        totals,
        DailyTotals {
            calories: 1780,
            protein: 132
        }
    );
}

#[test]
fn test_daily_totals_is_order_independent() {
    let mut entries = vec![
        entry("1", "2024-01-15", 650, 45),
        entry("2", "2024-01-15", 820, 62),
        entry("3", "2024-01-15", 310, 25),
    ];
    let forward = daily_totals(&entries, day("2024-01-15"));
    entries.reverse();
    let reversed = daily_totals(&entries, day("2024-01-15"));
    entries.swap(0, 1);
    let shuffled = daily_totals(&entries, day("2024-01-15"));

    assert_eq!(forward, reversed);
    assert_eq!(forward, shuffled);
}

#[test]
fn test_daily_totals_for_empty_day_is_zero() {
    let entries = vec![entry("1", "2024-01-15", 650, 45)];

    assert_eq!(daily_totals(&entries, day("2024-01-20")), DailyTotals::default());
    assert_eq!(daily_totals(&[], day("2024-01-20")), DailyTotals::default());
}

#[test]
fn test_daily_totals_counts_duplicate_valued_entries() {
    let entries = vec![
        entry("1", "2024-01-15", 400, 30),
        entry("2", "2024-01-15", 400, 30),
    ];

    let totals = daily_totals(&entries, day("2024-01-15"));

    assert_eq!(totals.calories, 800);
    assert_eq!(totals.protein, 60);
}

#[test]
fn test_daily_totals_is_repeatable() {
    let entries = vec![
        entry("1", "2024-01-15", 650, 45),
        entry("2", "2024-01-15", 820, 62),
    ];
    let snapshot = entries.clone();

    let first = daily_totals(&entries, day("2024-01-15"));
    let second = daily_totals(&entries, day("2024-01-15"));

    assert_eq!(first, second);
    assert_eq!(entries, snapshot);
}

#[test]
fn test_daily_totals_by_date_buckets_in_date_order() {
    let entries = vec![
        entry("1", "2024-01-16", 500, 30),
        entry("2", "2024-01-15", 650, 45),
        entry("3", "2024-01-16", 700, 50),
    ];

    let buckets = daily_totals_by_date(&entries);
    let keys: Vec<String> = buckets.keys().map(ToString::to_string).collect();

    assert_eq!(keys, vec!["2024-01-15", "2024-01-16"]);
    assert_eq!(buckets[&day("2024-01-16")].calories, 1200);
    assert_eq!(buckets[&day("2024-01-16")].protein, 80);
}

// ============================================================================
// Averages
// ============================================================================

#[test]
fn test_period_average_of_week_sample() {
    let week: Vec<DailyTotals> = [
        (2150, 175),
        (2080, 182),
        (2200, 190),
        (1950, 168),
        (2100, 185),
        (2250, 195),
        (2020, 170),
    ]
    .into_iter()
    .map(|(calories, protein)| DailyTotals { calories, protein })
    .collect();

    let calories = period_average(&week, NutritionMetric::Calories).unwrap();
    let protein = period_average(&week, NutritionMetric::Protein).unwrap();

    assert!((calories - 14_750.0 / 7.0).abs() < 1e-9);
    assert_eq!(rounded_average(calories), 2107);
    assert_eq!(rounded_average(protein), 181);
}

#[test]
fn test_period_average_over_entries() {
    let entries = vec![
        entry("1", "2024-01-15", 300, 20),
        entry("2", "2024-01-15", 500, 41),
    ];

    let calories = period_average(&entries, NutritionMetric::Calories).unwrap();
    let protein = period_average(&entries, NutritionMetric::Protein).unwrap();

    assert!((calories - 400.0).abs() < f64::EPSILON);
    assert!((protein - 30.5).abs() < f64::EPSILON);
    assert_eq!(rounded_average(protein), 31);
}

#[test]
fn test_period_average_of_empty_window_is_none() {
    let empty: Vec<DailyTotals> = Vec::new();

    assert!(period_average(&empty, NutritionMetric::Calories).is_none());
    assert!(period_average(&empty, NutritionMetric::Protein).is_none());
}

// ============================================================================
// Streaks
// ============================================================================

#[test]
fn test_streak_of_empty_sequence_is_zero() {
    assert_eq!(completion_streak(&[]), 0);
}

#[test]
fn test_streak_is_zero_when_most_recent_day_is_incomplete() {
    let days = vec![
        completed("2024-01-13", 4, 8000.0),
        completed("2024-01-14", 4, 8200.0),
        rest("2024-01-15"),
    ];

    assert_eq!(completion_streak(&days), 0);
}

#[test]
fn test_streak_counts_trailing_completed_days_only() {
    let days = vec![
        completed("2024-01-10", 4, 8000.0),
        completed("2024-01-11", 4, 8000.0),
        rest("2024-01-12"),
        completed("2024-01-13", 5, 9100.0),
        completed("2024-01-14", 4, 7600.0),
        completed("2024-01-15", 4, 7900.0),
    ];

    assert_eq!(completion_streak(&days), 3);
}

#[test]
fn test_streak_spans_whole_sequence_when_all_completed() {
    let days = vec![
        completed("2024-01-14", 4, 7600.0),
        completed("2024-01-15", 4, 7900.0),
    ];

    assert_eq!(completion_streak(&days), 2);
}

// ============================================================================
// Completion derivation
// ============================================================================

#[test]
fn test_set_volume_uses_weight_magnitude() {
    assert!((set_volume(&logged_set("135 lbs", 10, 7)) - 1350.0).abs() < f64::EPSILON);
    assert!((set_volume(&logged_set("25kg DBs", 12, 7)) - 300.0).abs() < f64::EPSILON);
    assert!(set_volume(&logged_set("BW", 10, 7)).abs() < f64::EPSILON);
}

#[test]
fn test_derive_completion_counts_exercises_with_reps() {
    let bench = vec![logged_set("135 lbs", 10, 7), logged_set("135 lbs", 8, 8)];
    let pullups = vec![logged_set("BW", 8, 8)];
    let untouched = vec![SetRecord::planned(Weight::new("40 lbs"))];

    let completion = derive_completion(
        day("2024-01-15"),
        [bench.as_slice(), pullups.as_slice(), untouched.as_slice()],
    );

    assert!(completion.completed);
    assert_eq!(completion.exercise_count, 2);
    assert!((completion.total_volume - 2430.0).abs() < f64::EPSILON);
}

#[test]
fn test_derive_completion_without_reps_is_rest_day() {
    let untouched = vec![SetRecord::planned(Weight::new("135 lbs"))];

    let completion = derive_completion(day("2024-01-15"), [untouched.as_slice()]);

    assert!(!completion.completed);
    assert_eq!(completion.exercise_count, 0);
    assert!(completion.total_volume.abs() < f64::EPSILON);
}
