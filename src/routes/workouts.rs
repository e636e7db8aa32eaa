// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout routes: create and list only.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::SessionUser;
use crate::models::Workout;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/workout/new", post(create_workout))
}

/// Routes that require a live session (layered in routes/mod.rs).
pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new().route("/workout", get(list_workouts))
}

/// List the session user's workouts.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(SessionUser(user)): Extension<SessionUser>,
) -> Result<Json<Vec<Workout>>> {
    let workouts = state.db.workouts_for_user(user.id).await?;
    Ok(Json(workouts))
}

#[derive(Deserialize)]
pub struct NewWorkout {
    pub user_id: i32,
    pub name: String,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub performed_on: Option<NaiveDate>,
}

/// Log a workout.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewWorkout>,
) -> Result<(StatusCode, Json<Workout>)> {
    let workout = state
        .db
        .create_workout(
            body.user_id,
            &body.name,
            body.duration_minutes,
            body.performed_on,
        )
        .await?;

    tracing::debug!(
        workout_id = workout.id,
        user_id = workout.user_id,
        "Workout logged"
    );

    Ok((StatusCode::CREATED, Json(workout)))
}
