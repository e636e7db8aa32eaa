// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Postgres client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (find/create keyed by Auth0 subject, session lookup, profile edits)
//! - Goals (full CRUD)
//! - Workouts (create and list)

use crate::error::AppError;
use crate::models::{Goal, User, Workout};
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 5;

const USER_COLUMNS: &str = "id, display_name, picture_url, auth_id, age, height_cm, weight_kg";

/// Postgres database client.
#[derive(Clone)]
pub struct Db {
    pool: Option<PgPool>,
}

impl Db {
    /// Connect to Postgres and apply pending migrations.
    pub async fn new(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Postgres: {}", e)))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;

        tracing::info!("Connected to Postgres");

        Ok(Self { pool: Some(pool) })
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { pool: None }
    }

    /// Helper to get the pool or return an error if offline.
    fn get_pool(&self) -> Result<&PgPool, AppError> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Look up a user by their Auth0 subject id.
    pub async fn find_user(&self, auth_id: &str) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE auth_id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(auth_id)
            .fetch_optional(self.get_pool()?)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a user for a first login.
    ///
    /// `auth_id` carries a UNIQUE constraint. If a concurrent login already
    /// inserted the row, the conflict is treated as "already exists" and the
    /// existing row is fetched instead.
    pub async fn create_user(
        &self,
        display_name: &str,
        picture_url: Option<&str>,
        auth_id: &str,
    ) -> Result<User, AppError> {
        let query = format!(
            "INSERT INTO users (display_name, picture_url, auth_id) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (auth_id) DO NOTHING \
             RETURNING {}",
            USER_COLUMNS
        );
        let inserted = sqlx::query_as::<_, User>(&query)
            .bind(display_name)
            .bind(picture_url)
            .bind(auth_id)
            .fetch_optional(self.get_pool()?)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        match inserted {
            Some(user) => Ok(user),
            // Lost the insert race; the winner's row is the user.
            None => self.find_user(auth_id).await?.ok_or_else(|| {
                AppError::Database(format!("User {} missing after insert conflict", auth_id))
            }),
        }
    }

    /// Look up a user by the local id stored in the session.
    pub async fn find_session_user(&self, id: i32) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(self.get_pool()?)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Set a user's age, returning the updated row if it exists.
    pub async fn update_user_age(&self, id: i32, age: i32) -> Result<Option<User>, AppError> {
        self.update_user_field("age", id, age).await
    }

    /// Set a user's height, returning the updated row if it exists.
    pub async fn update_user_height(
        &self,
        id: i32,
        height_cm: i32,
    ) -> Result<Option<User>, AppError> {
        self.update_user_field("height_cm", id, height_cm).await
    }

    /// Set a user's weight, returning the updated row if it exists.
    pub async fn update_user_weight(
        &self,
        id: i32,
        weight_kg: i32,
    ) -> Result<Option<User>, AppError> {
        self.update_user_field("weight_kg", id, weight_kg).await
    }

    /// Internal implementation for single-field profile updates.
    async fn update_user_field(
        &self,
        field: &str,
        id: i32,
        value: i32,
    ) -> Result<Option<User>, AppError> {
        let query = format!(
            "UPDATE users SET {} = $2 WHERE id = $1 RETURNING {}",
            field, USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(self.get_pool()?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to update {}: {}", field, e)))
    }

    // ─── Goal Operations ─────────────────────────────────────────

    /// List a user's goals, newest first.
    pub async fn goals_for_user(&self, user_id: i32) -> Result<Vec<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(
            "SELECT id, user_id, title, target_date, notes \
             FROM goals WHERE user_id = $1 ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a goal.
    pub async fn create_goal(
        &self,
        user_id: i32,
        title: &str,
        target_date: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<Goal, AppError> {
        sqlx::query_as::<_, Goal>(
            "INSERT INTO goals (user_id, title, target_date, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, title, target_date, notes",
        )
        .bind(user_id)
        .bind(title)
        .bind(target_date)
        .bind(notes)
        .fetch_one(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create goal: {}", e)))
    }

    /// Update a goal by id, returning the updated row if it exists.
    pub async fn update_goal(
        &self,
        id: i32,
        title: &str,
        target_date: Option<NaiveDate>,
        notes: Option<&str>,
    ) -> Result<Option<Goal>, AppError> {
        sqlx::query_as::<_, Goal>(
            "UPDATE goals SET title = $2, target_date = $3, notes = $4 \
             WHERE id = $1 \
             RETURNING id, user_id, title, target_date, notes",
        )
        .bind(id)
        .bind(title)
        .bind(target_date)
        .bind(notes)
        .fetch_optional(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update goal: {}", e)))
    }

    /// Delete a goal by id, returning the number of rows removed.
    ///
    /// Deleting an id that does not exist is not an error; the caller sees
    /// zero affected rows.
    pub async fn delete_goal(&self, id: i32) -> Result<u64, AppError> {
        sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(self.get_pool()?)
            .await
            .map(|result| result.rows_affected())
            .map_err(|e| AppError::Database(format!("Failed to delete goal: {}", e)))
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// List a user's workouts, newest first.
    pub async fn workouts_for_user(&self, user_id: i32) -> Result<Vec<Workout>, AppError> {
        sqlx::query_as::<_, Workout>(
            "SELECT id, user_id, name, duration_minutes, performed_on \
             FROM workouts WHERE user_id = $1 ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a workout.
    pub async fn create_workout(
        &self,
        user_id: i32,
        name: &str,
        duration_minutes: Option<i32>,
        performed_on: Option<NaiveDate>,
    ) -> Result<Workout, AppError> {
        sqlx::query_as::<_, Workout>(
            "INSERT INTO workouts (user_id, name, duration_minutes, performed_on) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, name, duration_minutes, performed_on",
        )
        .bind(user_id)
        .bind(name)
        .bind(duration_minutes)
        .bind(performed_on)
        .fetch_one(self.get_pool()?)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create workout: {}", e)))
    }
}
