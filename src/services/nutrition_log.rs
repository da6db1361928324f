// ABOUTME: Nutrition logging session: date navigation, add/delete entries, daily totals
// ABOUTME: Entries change only after the store acknowledges the write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::save_state::{SaveState, WriteTracker};
use crate::client::StoreClient;
use chrono::Utc;
use liftlog_core::errors::{AppError, AppResult};
use liftlog_core::models::{DateKey, DateRange, EntryId, NewNutritionEntry, NutritionEntry};
use liftlog_intelligence::aggregation::{daily_totals, DailyTotals};
use tracing::{info, warn};

/// Issues strictly increasing, millisecond-timestamp-based entry ids
#[derive(Debug, Default)]
pub struct EntryIdGenerator {
    last: i64,
}

impl EntryIdGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Next id: the current time in milliseconds, bumped past the previous id if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the id cannot be represented
    pub fn next_id(&mut self) -> AppResult<EntryId> {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        Ok(EntryId::new(self.last.to_string())?)
    }
}

/// One user's nutrition log for a window of days
pub struct NutritionLog {
    client: StoreClient,
    current_date: DateKey,
    entries: Vec<NutritionEntry>,
    unsaved: Vec<NutritionEntry>,
    ids: EntryIdGenerator,
    saves: WriteTracker,
}

impl NutritionLog {
    /// Empty log positioned at `date`
    #[must_use]
    pub fn new(client: StoreClient, date: DateKey) -> Self {
        Self {
            client,
            current_date: date,
            entries: Vec::new(),
            unsaved: Vec::new(),
            ids: EntryIdGenerator::new(),
            saves: WriteTracker::new(),
        }
    }

    /// Log positioned at `date` with the entries of `range` loaded
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be read
    pub async fn open(client: StoreClient, date: DateKey, range: DateRange) -> AppResult<Self> {
        let mut log = Self::new(client, date);
        log.load(range).await?;
        Ok(log)
    }

    /// Replace the loaded entries with those stored for `range`
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be read; loaded entries are kept
    pub async fn load(&mut self, range: DateRange) -> AppResult<()> {
        self.entries = self.client.list_nutrition_entries(range).await?;
        Ok(())
    }

    /// Date new entries are logged under
    #[must_use]
    pub const fn current_date(&self) -> DateKey {
        self.current_date
    }

    /// Move to the previous day
    pub fn previous_day(&mut self) -> DateKey {
        self.current_date = self.current_date.pred();
        self.current_date
    }

    /// Move to the next day
    pub fn next_day(&mut self) -> DateKey {
        self.current_date = self.current_date.succ();
        self.current_date
    }

    /// Jump to today's local date
    pub fn go_to_today(&mut self) -> DateKey {
        self.current_date = DateKey::today();
        self.current_date
    }

    /// Jump to `date`
    pub fn set_date(&mut self, date: DateKey) {
        self.current_date = date;
    }

    /// All loaded entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[NutritionEntry] {
        &self.entries
    }

    /// Entries logged on `date`, in insertion order
    #[must_use]
    pub fn entries_for(&self, date: DateKey) -> Vec<&NutritionEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Calorie and protein totals for `date`
    #[must_use]
    pub fn totals_for(&self, date: DateKey) -> DailyTotals {
        daily_totals(&self.entries, date)
    }

    /// Save state of an entry
    #[must_use]
    pub fn save_state(&self, id: &EntryId) -> SaveState {
        self.saves.state(id.as_str())
    }

    /// Entries whose save failed or was cancelled, oldest first
    #[must_use]
    pub fn pending_retries(&self) -> &[NutritionEntry] {
        &self.unsaved
    }

    /// Validate, persist, and append an entry under the current date
    ///
    /// An entry the store did not acknowledge is kept in
    /// [`pending_retries`](Self::pending_retries) under its generated id.
    ///
    /// # Errors
    ///
    /// Returns a validation error without touching the store, or the store
    /// failure; in both cases the loaded entries are unchanged
    pub async fn add_entry(&mut self, input: NewNutritionEntry) -> AppResult<NutritionEntry> {
        let id = self.ids.next_id()?;
        let entry = input.into_entry(id, self.current_date)?;
        self.unsaved.push(entry.clone());
        self.persist_new(entry).await
    }

    /// Retry persisting an entry whose earlier save failed
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the entry is already saved, `ResourceNotFound`
    /// if no unsaved entry has that id, or the store failure
    pub async fn retry_entry(&mut self, id: &EntryId) -> AppResult<NutritionEntry> {
        if self.entries.iter().any(|e| &e.id == id) {
            return Err(AppError::invalid_input(format!(
                "entry '{id}' is already saved"
            )));
        }
        let entry = self
            .unsaved
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| {
                AppError::not_found(format!("unsaved nutrition entry '{id}'"))
                    .with_resource_id(id.as_str())
            })?;
        self.persist_new(entry).await
    }

    async fn persist_new(&mut self, entry: NutritionEntry) -> AppResult<NutritionEntry> {
        let write = self.saves.begin(entry.id.as_str())?;
        match self.client.append_nutrition_entry(&entry).await {
            Ok(()) => {
                write.succeed();
                info!(entry.id = %entry.id, entry.date = %entry.date, "Nutrition entry saved");
                self.unsaved.retain(|e| e.id != entry.id);
                self.entries.push(entry.clone());
                Ok(entry)
            }
            Err(error) => {
                warn!(entry.id = %entry.id, error = %error, "Nutrition entry not saved");
                write.fail(error.to_string());
                Err(error.into())
            }
        }
    }

    /// Delete an entry from the store, then remove exactly that entry
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` while a write for the entry is pending, or
    /// the store failure; the loaded entries are unchanged on failure
    pub async fn delete_entry(&mut self, id: &EntryId) -> AppResult<()> {
        let write = self.saves.begin(id.as_str())?;
        match self.client.delete_nutrition_entry(id).await {
            Ok(()) => {
                self.entries.retain(|e| &e.id != id);
                write.forget();
                info!(entry.id = %id, "Nutrition entry deleted");
                Ok(())
            }
            Err(error) => {
                warn!(entry.id = %id, error = %error, "Nutrition entry not deleted");
                write.fail(error.to_string());
                Err(error.into())
            }
        }
    }
}
