// ABOUTME: Nutrition tracking models for logged meals and snacks
// ABOUTME: EntryId, NutritionEntry, and the unvalidated NewNutritionEntry input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DateKey;
use crate::constants::limits::{MAX_ENTRY_CALORIES, MAX_ENTRY_PROTEIN_G};
use crate::errors::validation::non_negative;
use crate::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a nutrition entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an identifier
    ///
    /// # Errors
    ///
    /// Returns `EmptyText` for an empty or whitespace identifier
    pub fn new(raw: impl Into<String>) -> ValidationResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyText { field: "id" });
        }
        Ok(Self(raw))
    }

    /// Identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One logged meal or snack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionEntry {
    /// Unique identifier assigned at creation
    pub id: EntryId,
    /// Day the entry is bucketed under
    pub date: DateKey,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Nutrition entry as submitted, before validation and id assignment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewNutritionEntry {
    /// Energy in kcal
    pub calories: Option<i64>,
    /// Protein in grams
    pub protein: Option<i64>,
    /// Optional notes; blank notes are dropped
    pub notes: Option<String>,
}

impl NewNutritionEntry {
    /// Validate and build an entry with the given id and date
    ///
    /// Calories and protein are both required, matching the add form which
    /// refuses to save while either is blank.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when a required value is missing,
    /// negative, or implausibly large
    pub fn into_entry(self, id: EntryId, date: DateKey) -> ValidationResult<NutritionEntry> {
        let calories = self
            .calories
            .ok_or(ValidationError::MissingField { field: "calories" })?;
        let protein = self
            .protein
            .ok_or(ValidationError::MissingField { field: "protein" })?;
        let notes = self
            .notes
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());

        Ok(NutritionEntry {
            id,
            date,
            calories: non_negative("calories", calories, MAX_ENTRY_CALORIES)?,
            protein: non_negative("protein", protein, MAX_ENTRY_PROTEIN_G)?,
            notes,
        })
    }
}
