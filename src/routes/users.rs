// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes.

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::SessionUser;
use crate::models::User;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/update_age/{id}", put(update_age))
        .route("/user/update_height/{id}", put(update_height))
        .route("/user/update_weight/{id}", put(update_weight))
}

/// Routes that require a live session (layered in routes/mod.rs).
pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new().route("/user", get(get_profile))
}

/// Current user's profile, straight from the session resolution.
async fn get_profile(Extension(SessionUser(user)): Extension<SessionUser>) -> Json<User> {
    Json(user)
}

#[derive(Deserialize)]
pub struct AgeUpdate {
    pub age: i32,
}

/// Set a user's age.
async fn update_age(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<AgeUpdate>,
) -> Result<Json<Option<User>>> {
    let user = state.db.update_user_age(id, body.age).await?;
    Ok(Json(user))
}

#[derive(Deserialize)]
pub struct HeightUpdate {
    pub height_cm: i32,
}

/// Set a user's height.
async fn update_height(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<HeightUpdate>,
) -> Result<Json<Option<User>>> {
    let user = state.db.update_user_height(id, body.height_cm).await?;
    Ok(Json(user))
}

#[derive(Deserialize)]
pub struct WeightUpdate {
    pub weight_kg: i32,
}

/// Set a user's weight.
async fn update_weight(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(body): Json<WeightUpdate>,
) -> Result<Json<Option<User>>> {
    let user = state.db.update_user_weight(id, body.weight_kg).await?;
    Ok(Json(user))
}
