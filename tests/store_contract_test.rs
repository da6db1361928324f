// ABOUTME: Contract tests run against both the in-memory and the SQLite store
// ABOUTME: Append dedup and conflicts, exact deletes, ordering, range filters, plan updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{completed, day, entry, exercise, rest};
use liftlog::store::{FitnessStore, MemoryStore, SqliteStore};
use liftlog_core::errors::StoreError;
use liftlog_core::models::{DateRange, EntryId, TrainingDay};
use std::sync::Arc;
use tempfile::TempDir;

async fn sqlite_store() -> SqliteStore {
    SqliteStore::connect("sqlite::memory:").await.unwrap()
}

fn week() -> DateRange {
    DateRange::new(day("2024-01-15"), day("2024-01-21")).unwrap()
}

// ============================================================================
// Shared contract checks
// ============================================================================

async fn check_append_is_keyed_by_id(store: &dyn FitnessStore) {
    let first = entry("1", "2024-01-15", 650, 45);
    store.append_nutrition_entry(&first).await.unwrap();
    store.append_nutrition_entry(&first).await.unwrap();

    let listed = store.list_nutrition_entries(week()).await.unwrap();
    assert_eq!(listed, vec![first]);

    let changed = entry("1", "2024-01-15", 700, 45);
    let error = store.append_nutrition_entry(&changed).await.unwrap_err();
    assert!(matches!(error, StoreError::Conflict { .. }), "{error:?}");
    assert!(!error.is_retryable());
}

async fn check_delete_removes_exactly_one_entry(store: &dyn FitnessStore) {
    let keep_a = entry("1", "2024-01-15", 400, 30);
    let remove = entry("2", "2024-01-15", 400, 30);
    let keep_b = entry("3", "2024-01-15", 400, 30);
    for e in [&keep_a, &remove, &keep_b] {
        store.append_nutrition_entry(e).await.unwrap();
    }

    store
        .delete_nutrition_entry(&EntryId::new("2").unwrap())
        .await
        .unwrap();

    let listed = store.list_nutrition_entries(week()).await.unwrap();
    assert_eq!(listed, vec![keep_a, keep_b]);

    let error = store
        .delete_nutrition_entry(&EntryId::new("2").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(error, StoreError::NotFound { .. }), "{error:?}");
}

async fn check_entries_keep_insertion_order_within_range(store: &dyn FitnessStore) {
    let entries = [
        entry("30", "2024-01-16", 500, 30),
        entry("10", "2024-01-15", 650, 45),
        entry("20", "2024-01-22", 820, 62),
        entry("40", "2024-01-14", 300, 20),
        entry("50", "2024-01-15", 310, 25),
    ];
    for e in &entries {
        store.append_nutrition_entry(e).await.unwrap();
    }

    let ids: Vec<String> = store
        .list_nutrition_entries(week())
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id.to_string())
        .collect();

    assert_eq!(ids, vec!["30", "10", "50"]);
}

async fn check_completions_are_oldest_first_and_upserted(store: &dyn FitnessStore) {
    store
        .record_workout_completion(&completed("2024-01-17", 4, 8000.0))
        .await
        .unwrap();
    store
        .record_workout_completion(&completed("2024-01-15", 5, 9100.0))
        .await
        .unwrap();
    store
        .record_workout_completion(&completed("2024-01-25", 4, 7000.0))
        .await
        .unwrap();
    store.record_workout_completion(&rest("2024-01-17")).await.unwrap();

    let listed = store.list_workout_completions(week()).await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].date, day("2024-01-15"));
    assert!(listed[0].completed);
    assert_eq!(listed[0].exercise_count, 5);
    assert!((listed[0].total_volume - 9100.0).abs() < f64::EPSILON);
    assert_eq!(listed[1].date, day("2024-01-17"));
    assert!(!listed[1].completed);
}

async fn check_exercise_updates(store: &dyn FitnessStore) {
    store
        .upsert_exercise(&exercise("pull-1", TrainingDay::Pull, 0, "115 lbs"))
        .await
        .unwrap();
    store
        .upsert_exercise(&exercise("push-2", TrainingDay::Push, 1, "40 lbs"))
        .await
        .unwrap();
    store
        .upsert_exercise(&exercise("push-1", TrainingDay::Push, 0, "135 lbs"))
        .await
        .unwrap();

    store.update_exercise_weight("push-1", "140 lbs").await.unwrap();
    store.update_exercise_reps("push-1", "10-12").await.unwrap();

    let fetched = store.fetch_exercise("push-1").await.unwrap();
    assert_eq!(fetched.current_weight.as_str(), "140 lbs");
    assert_eq!(fetched.target_reps, "10-12");

    let all: Vec<String> = store
        .list_exercises(None)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(all, vec!["push-1", "push-2", "pull-1"]);

    let pull = store.list_exercises(Some(TrainingDay::Pull)).await.unwrap();
    assert_eq!(pull.len(), 1);

    let missing = store.fetch_exercise("legs-9").await.unwrap_err();
    assert!(matches!(missing, StoreError::NotFound { .. }));
    let missing = store.update_exercise_weight("legs-9", "10 lbs").await.unwrap_err();
    assert!(matches!(missing, StoreError::NotFound { .. }));
}

// ============================================================================
// In-memory store
// ============================================================================

#[tokio::test]
async fn test_memory_append_is_keyed_by_id() {
    check_append_is_keyed_by_id(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_delete_removes_exactly_one_entry() {
    check_delete_removes_exactly_one_entry(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_entries_keep_insertion_order() {
    check_entries_keep_insertion_order_within_range(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_completions_ordering() {
    check_completions_are_oldest_first_and_upserted(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_memory_exercise_updates() {
    check_exercise_updates(&MemoryStore::new()).await;
}

// ============================================================================
// SQLite store
// ============================================================================

#[tokio::test]
async fn test_sqlite_append_is_keyed_by_id() {
    check_append_is_keyed_by_id(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_delete_removes_exactly_one_entry() {
    check_delete_removes_exactly_one_entry(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_entries_keep_insertion_order() {
    check_entries_keep_insertion_order_within_range(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_completions_ordering() {
    check_completions_are_oldest_first_and_upserted(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_exercise_updates() {
    check_exercise_updates(&sqlite_store().await).await;
}

#[tokio::test]
async fn test_sqlite_file_database_survives_reconnect() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("liftlog.db").display());

    {
        let store = SqliteStore::connect(&url).await.unwrap();
        store
            .append_nutrition_entry(&entry("1", "2024-01-15", 650, 45))
            .await
            .unwrap();
        store.pool().close().await;
    }

    let reopened = SqliteStore::connect(&url).await.unwrap();
    let listed = reopened.list_nutrition_entries(week()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].calories, 650);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sqlite_concurrent_identical_appends_are_acknowledged() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("liftlog.db").display());
    let store = Arc::new(SqliteStore::connect(&url).await.unwrap());
    let meal = entry("1", "2024-01-15", 650, 45);

    let writers: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let meal = meal.clone();
            tokio::spawn(async move { store.append_nutrition_entry(&meal).await })
        })
        .collect();
    for writer in writers {
        writer.await.unwrap().unwrap();
    }

    let listed = store.list_nutrition_entries(week()).await.unwrap();
    assert_eq!(listed, vec![meal]);
}
