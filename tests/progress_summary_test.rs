// ABOUTME: Tests for progress summaries: periods, streak, averages, calendar layout, recent activity
// ABOUTME: Exercises the pure summary builder and the store-backed progress service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Weekday;
use common::{completed, day, entry, memory_client, rest};
use liftlog::services::ProgressService;
use liftlog_core::models::WorkoutDayCompletion;
use liftlog_intelligence::aggregation::rounded_average;
use liftlog_intelligence::progress::{summarize, CalendarCell, CalendarMark, Period};

fn sample_week() -> Vec<WorkoutDayCompletion> {
    vec![
        completed("2024-01-15", 4, 8200.0),
        completed("2024-01-16", 4, 7600.0),
        rest("2024-01-17"),
        completed("2024-01-18", 5, 9100.0),
        completed("2024-01-19", 4, 6400.0),
        completed("2024-01-20", 4, 5200.0),
    ]
}

#[test]
fn test_period_lengths_and_parsing() {
    assert_eq!(Period::Week.days(), 7);
    assert_eq!(Period::Month.days(), 30);
    assert_eq!(Period::Quarter.days(), 90);
    assert_eq!(Period::parse("Month"), Some(Period::Month));
    assert_eq!(Period::parse("year"), None);
    assert_eq!(Period::default(), Period::Week);

    let range = Period::Month.range(day("2024-01-30"));
    assert_eq!(range.start(), day("2024-01-01"));
    assert_eq!(range.end(), day("2024-01-30"));
}

#[test]
fn test_unlogged_today_breaks_streak() {
    let summary = summarize(Period::Week, day("2024-01-21"), &[], &sample_week());

    assert_eq!(summary.streak, 0);
    assert_eq!(summary.workouts_completed, 5);
}

#[test]
fn test_streak_counts_back_from_as_of() {
    let summary = summarize(Period::Week, day("2024-01-20"), &[], &sample_week());

    assert_eq!(summary.streak, 3);
}

#[test]
fn test_calendar_starts_on_sunday_grid() {
    let summary = summarize(Period::Week, day("2024-01-21"), &[], &sample_week());

    // 2024-01-15 is a Monday: one blank for Sunday
    assert_eq!(summary.calendar.len(), 8);
    assert_eq!(summary.calendar[0], CalendarCell::Blank);
    assert_eq!(
        summary.calendar[1],
        CalendarCell::Day {
            date: day("2024-01-15"),
            weekday: Weekday::Mon,
            mark: CalendarMark::Completed,
        }
    );
    assert!(matches!(
        summary.calendar[3],
        CalendarCell::Day {
            mark: CalendarMark::Rest,
            ..
        }
    ));
    assert!(matches!(
        summary.calendar[7],
        CalendarCell::Day {
            weekday: Weekday::Sun,
            mark: CalendarMark::Rest,
            ..
        }
    ));
}

#[test]
fn test_recent_activity_is_most_recent_first() {
    let summary = summarize(Period::Week, day("2024-01-21"), &[], &sample_week());

    let dates: Vec<String> = summary
        .recent_activity
        .iter()
        .map(|d| d.date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["2024-01-21", "2024-01-20", "2024-01-19", "2024-01-18", "2024-01-17"]
    );
    assert!(!summary.recent_activity[0].completed);
    assert_eq!(summary.recent_activity[2].exercise_count, 4);
}

#[test]
fn test_averages_are_per_logged_day_inside_period() {
    let nutrition = vec![
        entry("1", "2024-01-15", 1200, 90),
        entry("2", "2024-01-15", 900, 80),
        entry("3", "2024-01-17", 2300, 190),
        entry("4", "2024-01-22", 5000, 400),
        entry("5", "2024-01-14", 5000, 400),
    ];

    let summary = summarize(Period::Week, day("2024-01-21"), &nutrition, &[]);

    assert_eq!(summary.logged_days, 2);
    assert_eq!(rounded_average(summary.average_calories.unwrap()), 2200);
    assert_eq!(rounded_average(summary.average_protein.unwrap()), 180);
}

#[test]
fn test_empty_period_has_no_averages() {
    let summary = summarize(Period::Week, day("2024-01-21"), &[], &[]);

    assert!(summary.average_calories.is_none());
    assert!(summary.average_protein.is_none());
    assert_eq!(summary.streak, 0);
    assert_eq!(summary.workouts_completed, 0);
    assert_eq!(summary.recent_activity.len(), 5);
}

#[test]
fn test_summary_serializes_calendar_cells() {
    let summary = summarize(Period::Week, day("2024-01-21"), &[], &sample_week());

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["period"], "week");
    assert_eq!(json["calendar"][0]["kind"], "blank");
    assert_eq!(json["calendar"][1]["kind"], "day");
    assert_eq!(json["calendar"][1]["date"], "2024-01-15");
    assert_eq!(json["calendar"][1]["mark"], "completed");
}

#[tokio::test]
async fn test_service_summarizes_stored_records() {
    let client = memory_client();
    let service = ProgressService::new(client.clone());
    for completion in sample_week() {
        client.record_workout_completion(&completion).await.unwrap();
    }
    service.mark_completed(day("2024-01-21"), 4, 7000.0).await.unwrap();
    client
        .append_nutrition_entry(&entry("1", "2024-01-21", 2100, 175))
        .await
        .unwrap();

    let summary = service.summary(Period::Week, day("2024-01-21")).await.unwrap();

    assert_eq!(summary.streak, 4);
    assert_eq!(summary.workouts_completed, 6);
    assert_eq!(summary.logged_days, 1);
    assert_eq!(rounded_average(summary.average_calories.unwrap()), 2100);
}

#[tokio::test]
async fn test_service_rest_day_overrides_completion() {
    let client = memory_client();
    let service = ProgressService::new(client);
    service.mark_completed(day("2024-01-21"), 4, 7000.0).await.unwrap();

    service.mark_rest(day("2024-01-21")).await.unwrap();
    let summary = service.summary(Period::Week, day("2024-01-21")).await.unwrap();

    assert_eq!(summary.streak, 0);
    assert_eq!(summary.workouts_completed, 0);
}

#[tokio::test]
async fn test_service_rejects_negative_volume() {
    let service = ProgressService::new(memory_client());

    let error = service
        .mark_completed(day("2024-01-21"), 4, -1.0)
        .await
        .unwrap_err();

    assert!(error.message.contains("total_volume"));
}
