// ABOUTME: SQLite-backed FitnessStore using sqlx with schema creation on connect
// ABOUTME: Tables exercises, nutrition_logs, and workout_completions
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
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Error as SqlxError, Row, SqlitePool};
use std::fmt::Display;
use tracing::{debug, info};

/// Store persisting to a SQLite database
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` and create the schema if needed
    ///
    /// File databases are created when missing. In-memory databases use a
    /// single connection so every query sees the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or schema creation fails
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let is_memory = database_url.contains(":memory:");
        let connection_options = if database_url.starts_with("sqlite:") && !is_memory {
            if database_url.contains('?') {
                database_url.to_owned()
            } else {
                format!("{database_url}?mode=rwc")
            }
        } else {
            database_url.to_owned()
        };

        let max_connections = if is_memory { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await
            .map_err(|e| map_sqlx_error("connect", &e))?;

        let store = Self { pool };
        store.migrate().await?;
        info!(database_url = %database_url, "SQLite store ready");
        Ok(store)
    }

    /// Wrap an existing pool, creating the schema if needed
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if any statement fails
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                day TEXT NOT NULL,
                position INTEGER NOT NULL,
                name TEXT NOT NULL,
                target_sets INTEGER NOT NULL,
                target_reps TEXT NOT NULL,
                current_weight TEXT NOT NULL,
                rest_between_sets TEXT NOT NULL,
                rest_before_next TEXT NOT NULL,
                tempo TEXT NOT NULL,
                rpe_target TEXT NOT NULL,
                progression_rule TEXT NOT NULL,
                notes TEXT,
                tutorial_url TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("migrate exercises", &e))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_logs (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                date TEXT NOT NULL,
                calories INTEGER NOT NULL CHECK (calories >= 0),
                protein INTEGER NOT NULL CHECK (protein >= 0),
                notes TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("migrate nutrition_logs", &e))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_nutrition_logs_date ON nutrition_logs(date)")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("migrate nutrition_logs", &e))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_completions (
                date TEXT PRIMARY KEY,
                completed INTEGER NOT NULL,
                exercise_count INTEGER NOT NULL,
                total_volume REAL NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("migrate workout_completions", &e))?;

        debug!("SQLite schema up to date");
        Ok(())
    }

    async fn update_exercise_column(
        &self,
        operation: &'static str,
        sql: &'static str,
        id: &str,
        value: &str,
    ) -> StoreResult<()> {
        let result = sqlx::query(sql)
            .bind(value)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(operation, &e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("exercise", id));
        }
        Ok(())
    }
}

#[async_trait]
impl FitnessStore for SqliteStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn fetch_exercise(&self, id: &str) -> StoreResult<ExercisePlanItem> {
        let row = sqlx::query(
            r"
            SELECT id, day, position, name, target_sets, target_reps, current_weight,
                   rest_between_sets, rest_before_next, tempo, rpe_target,
                   progression_rule, notes, tutorial_url
            FROM exercises
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("fetch exercise", &e))?;

        row.map(|r| row_to_exercise(&r))
            .transpose()?
            .ok_or_else(|| StoreError::not_found("exercise", id))
    }

    async fn list_exercises(&self, day: Option<TrainingDay>) -> StoreResult<Vec<ExercisePlanItem>> {
        let rows = match day {
            Some(day) => {
                sqlx::query(
                    r"
                    SELECT id, day, position, name, target_sets, target_reps, current_weight,
                           rest_between_sets, rest_before_next, tempo, rpe_target,
                           progression_rule, notes, tutorial_url
                    FROM exercises
                    WHERE day = $1
                    ORDER BY position
                    ",
                )
                .bind(day.id())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r"
                    SELECT id, day, position, name, target_sets, target_reps, current_weight,
                           rest_between_sets, rest_before_next, tempo, rpe_target,
                           progression_rule, notes, tutorial_url
                    FROM exercises
                    ORDER BY position
                    ",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| map_sqlx_error("list exercises", &e))?;

        let mut items = rows
            .iter()
            .map(row_to_exercise)
            .collect::<StoreResult<Vec<_>>>()?;
        items.sort_by_key(|item| (item.day, item.order));
        Ok(items)
    }

    async fn upsert_exercise(&self, item: &ExercisePlanItem) -> StoreResult<()> {
        sqlx::query(
            r"
            INSERT INTO exercises (
                id, day, position, name, target_sets, target_reps, current_weight,
                rest_between_sets, rest_before_next, tempo, rpe_target,
                progression_rule, notes, tutorial_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT(id) DO UPDATE SET
                day = excluded.day,
                position = excluded.position,
                name = excluded.name,
                target_sets = excluded.target_sets,
                target_reps = excluded.target_reps,
                current_weight = excluded.current_weight,
                rest_between_sets = excluded.rest_between_sets,
                rest_before_next = excluded.rest_before_next,
                tempo = excluded.tempo,
                rpe_target = excluded.rpe_target,
                progression_rule = excluded.progression_rule,
                notes = excluded.notes,
                tutorial_url = excluded.tutorial_url
            ",
        )
        .bind(&item.id)
        .bind(item.day.id())
        .bind(i64::from(item.order))
        .bind(&item.name)
        .bind(i64::from(item.target_sets))
        .bind(&item.target_reps)
        .bind(item.current_weight.as_str())
        .bind(&item.rest_between_sets)
        .bind(&item.rest_before_next)
        .bind(&item.tempo)
        .bind(&item.rpe_target)
        .bind(&item.progression_rule)
        .bind(&item.notes)
        .bind(&item.tutorial_url)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("upsert exercise", &e))?;
        Ok(())
    }

    async fn update_exercise_weight(&self, id: &str, weight: &str) -> StoreResult<()> {
        self.update_exercise_column(
            "update exercise weight",
            "UPDATE exercises SET current_weight = $1 WHERE id = $2",
            id,
            weight,
        )
        .await
    }

    async fn update_exercise_reps(&self, id: &str, reps: &str) -> StoreResult<()> {
        self.update_exercise_column(
            "update exercise reps",
            "UPDATE exercises SET target_reps = $1 WHERE id = $2",
            id,
            reps,
        )
        .await
    }

    async fn append_nutrition_entry(&self, entry: &NutritionEntry) -> StoreResult<()> {
        let inserted = sqlx::query(
            r"
            INSERT INTO nutrition_logs (id, date, calories, protein, notes)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT(id) DO NOTHING
            ",
        )
        .bind(entry.id.as_str())
        .bind(entry.date.to_string())
        .bind(i64::from(entry.calories))
        .bind(i64::from(entry.protein))
        .bind(&entry.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("append nutrition entry", &e))?;

        if inserted.rows_affected() > 0 {
            return Ok(());
        }

        let row = sqlx::query(
            "SELECT id, date, calories, protein, notes FROM nutrition_logs WHERE id = $1",
        )
        .bind(entry.id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("append nutrition entry", &e))?;

        if &row_to_nutrition_entry(&row)? == entry {
            debug!(entry.id = %entry.id, "Duplicate append acknowledged");
            return Ok(());
        }
        Err(StoreError::Conflict {
            resource: "nutrition entry",
            id: entry.id.to_string(),
        })
    }

    async fn delete_nutrition_entry(&self, id: &EntryId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM nutrition_logs WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete nutrition entry", &e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("nutrition entry", id.as_str()));
        }
        Ok(())
    }

    async fn list_nutrition_entries(&self, range: DateRange) -> StoreResult<Vec<NutritionEntry>> {
        let rows = sqlx::query(
            r"
            SELECT id, date, calories, protein, notes
            FROM nutrition_logs
            WHERE date >= $1 AND date <= $2
            ORDER BY seq
            ",
        )
        .bind(range.start().to_string())
        .bind(range.end().to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list nutrition entries", &e))?;

        rows.iter().map(row_to_nutrition_entry).collect()
    }

    async fn list_workout_completions(
        &self,
        range: DateRange,
    ) -> StoreResult<Vec<WorkoutDayCompletion>> {
        let rows = sqlx::query(
            r"
            SELECT date, completed, exercise_count, total_volume
            FROM workout_completions
            WHERE date >= $1 AND date <= $2
            ORDER BY date
            ",
        )
        .bind(range.start().to_string())
        .bind(range.end().to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list workout completions", &e))?;

        rows.iter().map(row_to_completion).collect()
    }

    async fn record_workout_completion(
        &self,
        completion: &WorkoutDayCompletion,
    ) -> StoreResult<()> {
        sqlx::query(
            r"
            INSERT INTO workout_completions (date, completed, exercise_count, total_volume)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(date) DO UPDATE SET
                completed = excluded.completed,
                exercise_count = excluded.exercise_count,
                total_volume = excluded.total_volume
            ",
        )
        .bind(completion.date.to_string())
        .bind(completion.completed)
        .bind(i64::from(completion.exercise_count))
        .bind(completion.total_volume)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("record workout completion", &e))?;
        Ok(())
    }
}

/// Classify a sqlx failure; connection-level problems are retryable
fn map_sqlx_error(operation: &'static str, error: &SqlxError) -> StoreError {
    match error {
        SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
            StoreError::unavailable(format!("{operation}: {error}"))
        }
        _ => StoreError::backend(operation, error.to_string()),
    }
}

fn corrupt(resource: &'static str, details: &impl Display) -> StoreError {
    StoreError::Corrupt {
        resource,
        details: details.to_string(),
    }
}

fn get_u32(row: &SqliteRow, resource: &'static str, column: &str) -> StoreResult<u32> {
    let raw: i64 = row.try_get(column).map_err(|e| corrupt(resource, &e))?;
    u32::try_from(raw).map_err(|_| corrupt(resource, &format!("{column} out of range: {raw}")))
}

fn get_text(row: &SqliteRow, resource: &'static str, column: &str) -> StoreResult<String> {
    row.try_get(column).map_err(|e| corrupt(resource, &e))
}

fn get_date(row: &SqliteRow, resource: &'static str) -> StoreResult<DateKey> {
    let raw = get_text(row, resource, "date")?;
    DateKey::parse(&raw).map_err(|e| corrupt(resource, &e))
}

/// Convert a database row to an `ExercisePlanItem`
fn row_to_exercise(row: &SqliteRow) -> StoreResult<ExercisePlanItem> {
    const RESOURCE: &str = "exercise";
    let day_str = get_text(row, RESOURCE, "day")?;

    Ok(ExercisePlanItem {
        id: get_text(row, RESOURCE, "id")?,
        day: TrainingDay::parse(&day_str).map_err(|e| corrupt(RESOURCE, &e))?,
        order: get_u32(row, RESOURCE, "position")?,
        name: get_text(row, RESOURCE, "name")?,
        target_sets: get_u32(row, RESOURCE, "target_sets")?,
        target_reps: get_text(row, RESOURCE, "target_reps")?,
        current_weight: Weight::new(get_text(row, RESOURCE, "current_weight")?),
        rest_between_sets: get_text(row, RESOURCE, "rest_between_sets")?,
        rest_before_next: get_text(row, RESOURCE, "rest_before_next")?,
        tempo: get_text(row, RESOURCE, "tempo")?,
        rpe_target: get_text(row, RESOURCE, "rpe_target")?,
        progression_rule: get_text(row, RESOURCE, "progression_rule")?,
        notes: row.try_get("notes").map_err(|e| corrupt(RESOURCE, &e))?,
        tutorial_url: row.try_get("tutorial_url").map_err(|e| corrupt(RESOURCE, &e))?,
    })
}

/// Convert a database row to a `NutritionEntry`
fn row_to_nutrition_entry(row: &SqliteRow) -> StoreResult<NutritionEntry> {
    const RESOURCE: &str = "nutrition entry";
    let id = get_text(row, RESOURCE, "id")?;

    Ok(NutritionEntry {
        id: EntryId::new(id).map_err(|e| corrupt(RESOURCE, &e))?,
        date: get_date(row, RESOURCE)?,
        calories: get_u32(row, RESOURCE, "calories")?,
        protein: get_u32(row, RESOURCE, "protein")?,
        notes: row.try_get("notes").map_err(|e| corrupt(RESOURCE, &e))?,
    })
}

/// Convert a database row to a `WorkoutDayCompletion`
fn row_to_completion(row: &SqliteRow) -> StoreResult<WorkoutDayCompletion> {
    const RESOURCE: &str = "workout completion";
    let date = get_date(row, RESOURCE)?;
    let completed: bool = row.try_get("completed").map_err(|e| corrupt(RESOURCE, &e))?;
    if !completed {
        return Ok(WorkoutDayCompletion::rest_day(date));
    }
    let total_volume: f64 = row
        .try_get("total_volume")
        .map_err(|e| corrupt(RESOURCE, &e))?;
    WorkoutDayCompletion::completed(date, get_u32(row, RESOURCE, "exercise_count")?, total_volume)
        .map_err(|e| corrupt(RESOURCE, &e))
}
