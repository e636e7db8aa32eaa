// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contact email route.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/email", post(send_email))
}

/// Contact form payload. Field names are pinned by the frontend.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message: String,
}

/// Queue a contact notification and respond immediately.
///
/// Fire-and-forget: the send runs on a background task and the caller
/// always gets 201. Delivery failures are logged, never surfaced.
async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EmailRequest>,
) -> StatusCode {
    let mailer = state.mailer.clone();

    tokio::spawn(async move {
        match mailer
            .send(&req.sender_name, &req.sender_email, &req.subject, &req.message)
            .await
        {
            Ok(()) => tracing::info!("Email sent"),
            Err(e) => tracing::error!(error = %e, "Error sending email"),
        }
    });

    StatusCode::CREATED
}
