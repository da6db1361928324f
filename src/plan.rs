// ABOUTME: Built-in five-day training plan used to seed an empty store
// ABOUTME: Push, Pull, Legs, Upper + Core, and a full-body conditioning day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::client::StoreClient;
use liftlog_core::errors::AppResult;
use liftlog_core::models::{ExercisePlanItem, TrainingDay, Weight};
use std::collections::HashSet;
use tracing::info;

struct PlanRow {
    day: TrainingDay,
    name: &'static str,
    sets: u32,
    reps: &'static str,
    weight: &'static str,
    rest: &'static str,
    tempo: &'static str,
    rpe: &'static str,
    notes: Option<&'static str>,
}

const STANDARD_PROGRESSION: &str = "Add weight when all sets reach the top of the rep range at RPE 8 or below";
const REST_BEFORE_NEXT: &str = "2 min";

#[rustfmt::skip]
const DEFAULT_PLAN: &[PlanRow] = &[
    PlanRow { day: TrainingDay::Push, name: "Barbell Bench Press", sets: 4, reps: "8-12", weight: "135 lbs", rest: "2-3 min", tempo: "2-1-1", rpe: "7-8", notes: Some("Retract shoulder blades, feet planted") },
    PlanRow { day: TrainingDay::Push, name: "Seated Dumbbell Shoulder Press", sets: 3, reps: "8-12", weight: "40 lbs DBs", rest: "90 sec", tempo: "2-0-1", rpe: "7-8", notes: None },
    PlanRow { day: TrainingDay::Push, name: "Incline Dumbbell Press", sets: 3, reps: "10-12", weight: "45 lbs DBs", rest: "90 sec", tempo: "2-1-1", rpe: "7-8", notes: None },
    PlanRow { day: TrainingDay::Push, name: "Cable Triceps Pushdown", sets: 3, reps: "12-15", weight: "50 lbs", rest: "60 sec", tempo: "2-0-1", rpe: "8", notes: Some("Elbows pinned to sides") },
    PlanRow { day: TrainingDay::Pull, name: "Deadlift", sets: 3, reps: "5-8", weight: "225 lbs", rest: "3 min", tempo: "1-0-1", rpe: "7-8", notes: Some("Brace before every rep") },
    PlanRow { day: TrainingDay::Pull, name: "Pull-Up", sets: 4, reps: "8-12", weight: "BW", rest: "2 min", tempo: "2-1-1", rpe: "8", notes: None },
    PlanRow { day: TrainingDay::Pull, name: "Barbell Row", sets: 3, reps: "8-12", weight: "115 lbs", rest: "90 sec", tempo: "2-1-1", rpe: "7-8", notes: None },
    PlanRow { day: TrainingDay::Pull, name: "Dumbbell Hammer Curl", sets: 3, reps: "10-12", weight: "30 lbs DBs", rest: "60 sec", tempo: "2-0-1", rpe: "8", notes: None },
    PlanRow { day: TrainingDay::Legs, name: "Back Squat", sets: 4, reps: "8-12", weight: "185 lbs", rest: "2-3 min", tempo: "3-1-1", rpe: "7-8", notes: Some("Hit depth, knees track toes") },
    PlanRow { day: TrainingDay::Legs, name: "Romanian Deadlift", sets: 3, reps: "8-12", weight: "155 lbs", rest: "2 min", tempo: "3-0-1", rpe: "7-8", notes: None },
    PlanRow { day: TrainingDay::Legs, name: "Walking Lunge", sets: 3, reps: "10-12", weight: "25kg DBs", rest: "90 sec", tempo: "2-0-1", rpe: "8", notes: Some("Reps per leg") },
    PlanRow { day: TrainingDay::Legs, name: "Standing Calf Raise", sets: 4, reps: "12-15", weight: "90 lbs", rest: "60 sec", tempo: "2-2-1", rpe: "8", notes: None },
    PlanRow { day: TrainingDay::UpperCore, name: "Overhead Press", sets: 4, reps: "8-12", weight: "85 lbs", rest: "2 min", tempo: "2-0-1", rpe: "7-8", notes: None },
    PlanRow { day: TrainingDay::UpperCore, name: "Chest-Supported Row", sets: 3, reps: "10-12", weight: "35 lbs DBs", rest: "90 sec", tempo: "2-1-1", rpe: "7-8", notes: None },
    PlanRow { day: TrainingDay::UpperCore, name: "Hanging Leg Raise", sets: 3, reps: "10-15", weight: "BW", rest: "60 sec", tempo: "2-1-2", rpe: "8", notes: Some("No swinging") },
    PlanRow { day: TrainingDay::UpperCore, name: "Pallof Press", sets: 3, reps: "12", weight: "30 lbs", rest: "60 sec", tempo: "2-2-2", rpe: "7", notes: Some("Reps per side") },
    PlanRow { day: TrainingDay::FullBody, name: "Kettlebell Swing", sets: 4, reps: "15", weight: "24kg KB", rest: "60 sec", tempo: "explosive", rpe: "8", notes: None },
    PlanRow { day: TrainingDay::FullBody, name: "Dumbbell Thruster", sets: 3, reps: "12", weight: "25 lbs DBs", rest: "60 sec", tempo: "controlled", rpe: "8", notes: None },
    PlanRow { day: TrainingDay::FullBody, name: "Farmer's Carry", sets: 3, reps: "40 m", weight: "50 lbs DBs", rest: "90 sec", tempo: "steady", rpe: "8", notes: None },
    PlanRow { day: TrainingDay::FullBody, name: "Burpee", sets: 3, reps: "10", weight: "BW", rest: "60 sec", tempo: "explosive", rpe: "8-9", notes: Some("Scale to step-backs if form breaks") },
];

/// The built-in plan, ordered by day then position
#[must_use]
pub fn default_plan() -> Vec<ExercisePlanItem> {
    let mut position_in_day = [0_u32; TrainingDay::ALL.len()];
    DEFAULT_PLAN
        .iter()
        .map(|row| {
            let day_index = TrainingDay::ALL
                .iter()
                .position(|d| *d == row.day)
                .unwrap_or_default();
            let order = position_in_day[day_index];
            position_in_day[day_index] += 1;
            ExercisePlanItem {
                id: format!("{}-{}", row.day.id(), order + 1),
                day: row.day,
                order,
                name: row.name.to_owned(),
                target_sets: row.sets,
                target_reps: row.reps.to_owned(),
                current_weight: Weight::new(row.weight),
                rest_between_sets: row.rest.to_owned(),
                rest_before_next: REST_BEFORE_NEXT.to_owned(),
                tempo: row.tempo.to_owned(),
                rpe_target: row.rpe.to_owned(),
                progression_rule: STANDARD_PROGRESSION.to_owned(),
                notes: row.notes.map(str::to_owned),
                tutorial_url: None,
            }
        })
        .collect()
}

/// Add the built-in plan items missing from the store
///
/// Items already stored keep their saved weights. Returns how many were added.
///
/// # Errors
///
/// Returns the first store failure
pub async fn seed_default_plan(client: &StoreClient) -> AppResult<usize> {
    let existing: HashSet<String> = client
        .list_exercises(None)
        .await?
        .into_iter()
        .map(|item| item.id)
        .collect();

    let mut added = 0;
    for item in default_plan().iter().filter(|i| !existing.contains(&i.id)) {
        client.upsert_exercise(item).await?;
        added += 1;
    }
    info!(added, existing = existing.len(), "Default plan seeded");
    Ok(added)
}
