// ABOUTME: Nutrition commands for liftlog-cli
// ABOUTME: Add, delete, list, and total a day's nutrition entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog::client::StoreClient;
use liftlog::errors::AppResult;
use liftlog::models::{DateKey, DateRange, EntryId, NewNutritionEntry};
use liftlog::services::NutritionLog;

use crate::helpers::display::{display_entries, display_totals};

/// Log an entry under `date`
pub async fn add(
    client: StoreClient,
    calories: i64,
    protein: i64,
    notes: Option<String>,
    date: DateKey,
) -> AppResult<()> {
    let mut log = NutritionLog::new(client, date);
    let entry = log
        .add_entry(NewNutritionEntry {
            calories: Some(calories),
            protein: Some(protein),
            notes,
        })
        .await?;
    println!(
        "Saved entry {} on {}: {} kcal, {} g protein",
        entry.id, entry.date, entry.calories, entry.protein
    );
    Ok(())
}

/// Delete an entry by id
pub async fn delete(client: StoreClient, entry_id: &str) -> AppResult<()> {
    let id = EntryId::new(entry_id)?;
    let mut log = NutritionLog::new(client, DateKey::today());
    log.delete_entry(&id).await?;
    println!("Deleted entry {id}");
    Ok(())
}

/// List the entries logged on `date`
pub async fn list(client: StoreClient, date: DateKey) -> AppResult<()> {
    let log = NutritionLog::open(client, date, DateRange::single(date)).await?;
    let entries = log.entries_for(date);
    if entries.is_empty() {
        println!("No entries on {date}");
        return Ok(());
    }
    display_entries(&entries);
    display_totals(date, &log.totals_for(date));
    Ok(())
}

/// Show the totals for `date`
pub async fn totals(client: StoreClient, date: DateKey) -> AppResult<()> {
    let log = NutritionLog::open(client, date, DateRange::single(date)).await?;
    display_totals(date, &log.totals_for(date));
    Ok(())
}
