// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::SessionUser;
use crate::models::Goal;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals/new", post(create_goal))
        .route("/goals/delete/{id}", delete(delete_goal))
        .route("/goals/update/{goal_id}", put(update_goal))
}

/// Routes that require a live session (layered in routes/mod.rs).
pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new().route("/goals", get(list_goals))
}

/// List the session user's goals.
async fn list_goals(
    State(state): State<Arc<AppState>>,
    Extension(SessionUser(user)): Extension<SessionUser>,
) -> Result<Json<Vec<Goal>>> {
    let goals = state.db.goals_for_user(user.id).await?;
    Ok(Json(goals))
}

#[derive(Deserialize)]
pub struct NewGoal {
    pub user_id: i32,
    pub title: String,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create a goal.
async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewGoal>,
) -> Result<(StatusCode, Json<Goal>)> {
    let goal = state
        .db
        .create_goal(
            body.user_id,
            &body.title,
            body.target_date,
            body.notes.as_deref(),
        )
        .await?;

    tracing::debug!(goal_id = goal.id, user_id = goal.user_id, "Goal created");

    Ok((StatusCode::CREATED, Json(goal)))
}

#[derive(Deserialize)]
pub struct UpdateGoal {
    pub title: String,
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Update a goal by id.
///
/// An id with no matching row responds 200 with a null body; only a
/// rejected datastore operation is an error.
async fn update_goal(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<i32>,
    Json(body): Json<UpdateGoal>,
) -> Result<Json<Option<Goal>>> {
    let updated = state
        .db
        .update_goal(goal_id, &body.title, body.target_date, body.notes.as_deref())
        .await?;
    Ok(Json(updated))
}

#[derive(Serialize)]
pub struct DeleteGoalResponse {
    pub deleted: u64,
}

/// Delete a goal by id.
///
/// No existence check: deleting an unknown id still succeeds with zero
/// affected rows.
async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteGoalResponse>> {
    let deleted = state.db.delete_goal(id).await?;
    Ok(Json(DeleteGoalResponse { deleted }))
}
