// ABOUTME: Output formatting helpers for liftlog-cli
// ABOUTME: Plain-text rendering of exercises, sets, nutrition entries, and progress summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::models::{DateKey, ExercisePlanItem, NutritionEntry, SetRecord, TrainingDay};
use liftlog_intelligence::aggregation::{rounded_average, DailyTotals};
use liftlog_intelligence::progress::{CalendarCell, CalendarMark, ProgressSummary};

/// Print exercises grouped by day
pub fn display_exercises(exercises: &[ExercisePlanItem]) {
    let mut current_day: Option<TrainingDay> = None;
    for exercise in exercises {
        if current_day != Some(exercise.day) {
            println!("\n{}", exercise.day);
            println!("{}", "=".repeat(60));
            current_day = Some(exercise.day);
        }
        println!(
            "  [{}] {}: {} x {} @ {} (RPE {}, rest {}, tempo {})",
            exercise.id,
            exercise.name,
            exercise.target_sets,
            exercise.target_reps,
            exercise.current_weight,
            exercise.rpe_target,
            exercise.rest_between_sets,
            exercise.tempo
        );
        if let Some(notes) = &exercise.notes {
            println!("      {notes}");
        }
    }
}

/// Print the logged sets of an exercise
pub fn display_sets(exercise: &ExercisePlanItem, sets: &[SetRecord]) {
    println!("{} ({} x {})", exercise.name, exercise.target_sets, exercise.target_reps);
    for (index, set) in sets.iter().enumerate() {
        let rpe = set.rpe.map_or_else(|| "-".to_owned(), |r| r.to_string());
        println!(
            "  Set {}: {} x {} reps, RPE {rpe}",
            index + 1,
            set.weight,
            set.reps_completed
        );
    }
}

/// Print entries, one per line
pub fn display_entries(entries: &[&NutritionEntry]) {
    for entry in entries {
        let notes = entry.notes.as_deref().unwrap_or("");
        println!(
            "  [{}] {} kcal, {} g protein  {notes}",
            entry.id, entry.calories, entry.protein
        );
    }
}

/// Print a day's totals
pub fn display_totals(date: DateKey, totals: &DailyTotals) {
    println!(
        "Totals for {date}: {} kcal, {} g protein",
        totals.calories, totals.protein
    );
}

/// Print a progress summary
pub fn display_summary(summary: &ProgressSummary) {
    println!(
        "Progress for the last {} ({} to {})",
        summary.period,
        summary.range.start(),
        summary.range.end()
    );
    println!("{}", "=".repeat(60));

    println!("Workout streak: {} days", summary.streak);
    if summary.streak > 0 {
        println!("  Keep up the great work!");
    } else {
        println!("  Time to start your streak!");
    }
    println!(
        "Avg. calories: {} kcal per day",
        format_average(summary.average_calories)
    );
    println!(
        "Avg. protein: {} g per day",
        format_average(summary.average_protein)
    );
    println!(
        "Workouts completed: {}, days with nutrition logged: {}",
        summary.workouts_completed, summary.logged_days
    );

    println!("\nWorkout calendar");
    println!(" Sun Mon Tue Wed Thu Fri Sat");
    for week in summary.calendar.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::Blank => "    ",
                CalendarCell::Day {
                    mark: CalendarMark::Completed,
                    ..
                } => "   x",
                CalendarCell::Day {
                    mark: CalendarMark::Rest,
                    ..
                } => "   -",
            })
            .collect();
        println!("{row}");
    }

    println!("\nRecent activity");
    for day in &summary.recent_activity {
        let label = day.date.date().format("%a, %b %-d");
        if day.completed {
            println!(
                "  {label}: {} exercises, {} total volume",
                day.exercise_count, day.total_volume
            );
        } else {
            println!("  {label}: Rest day");
        }
    }
}

fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "n/a".to_owned(), |avg| rounded_average(avg).to_string())
}
