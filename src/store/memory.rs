// ABOUTME: In-memory FitnessStore backed by tokio RwLock-guarded collections
// ABOUTME: Used for tests and for running without a database file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::FitnessStore;
use async_trait::async_trait;
use liftlog_core::errors::{StoreError, StoreResult};
use liftlog_core::models::{
    DateKey, DateRange, EntryId, ExercisePlanItem, NutritionEntry, TrainingDay,
    WorkoutDayCompletion, Weight,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    exercises: BTreeMap<String, ExercisePlanItem>,
    nutrition: Vec<NutritionEntry>,
    completions: BTreeMap<DateKey, WorkoutDayCompletion>,
}

/// Store keeping everything in process memory
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FitnessStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch_exercise(&self, id: &str) -> StoreResult<ExercisePlanItem> {
        self.state
            .read()
            .await
            .exercises
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("exercise", id))
    }

    async fn list_exercises(&self, day: Option<TrainingDay>) -> StoreResult<Vec<ExercisePlanItem>> {
        let state = self.state.read().await;
        let mut items: Vec<ExercisePlanItem> = state
            .exercises
            .values()
            .filter(|item| match day {
                Some(d) => item.day == d,
                None => true,
            })
            .cloned()
            .collect();
        items.sort_by_key(|item| (item.day, item.order));
        Ok(items)
    }

    async fn upsert_exercise(&self, item: &ExercisePlanItem) -> StoreResult<()> {
        self.state
            .write()
            .await
            .exercises
            .insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn update_exercise_weight(&self, id: &str, weight: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let item = state
            .exercises
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("exercise", id))?;
        item.current_weight = Weight::new(weight);
        Ok(())
    }

    async fn update_exercise_reps(&self, id: &str, reps: &str) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let item = state
            .exercises
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found("exercise", id))?;
        reps.clone_into(&mut item.target_reps);
        Ok(())
    }

    async fn append_nutrition_entry(&self, entry: &NutritionEntry) -> StoreResult<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.nutrition.iter().find(|e| e.id == entry.id) {
            if existing == entry {
                return Ok(());
            }
            return Err(StoreError::Conflict {
                resource: "nutrition entry",
                id: entry.id.to_string(),
            });
        }
        state.nutrition.push(entry.clone());
        Ok(())
    }

    async fn delete_nutrition_entry(&self, id: &EntryId) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let position = state
            .nutrition
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| StoreError::not_found("nutrition entry", id.as_str()))?;
        state.nutrition.remove(position);
        Ok(())
    }

    async fn list_nutrition_entries(&self, range: DateRange) -> StoreResult<Vec<NutritionEntry>> {
        Ok(self
            .state
            .read()
            .await
            .nutrition
            .iter()
            .filter(|e| range.contains(e.date))
            .cloned()
            .collect())
    }

    async fn list_workout_completions(
        &self,
        range: DateRange,
    ) -> StoreResult<Vec<WorkoutDayCompletion>> {
        Ok(self
            .state
            .read()
            .await
            .completions
            .range(range.start()..=range.end())
            .map(|(_, c)| c.clone())
            .collect())
    }

    async fn record_workout_completion(
        &self,
        completion: &WorkoutDayCompletion,
    ) -> StoreResult<()> {
        self.state
            .write()
            .await
            .completions
            .insert(completion.date, completion.clone());
        Ok(())
    }
}
