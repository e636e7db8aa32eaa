// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Payment submission route.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::services::stripe::amount_to_minor_units;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/payment", post(submit_payment))
}

#[derive(Deserialize)]
pub struct PaymentRequest {
    /// Decimal amount string, e.g. "12.50"
    pub amount: String,
    pub token: PaymentToken,
}

/// Tokenized payment method from the checkout widget.
#[derive(Deserialize)]
pub struct PaymentToken {
    pub id: String,
}

#[derive(Serialize)]
pub struct PaymentResponse {
    pub charge_id: String,
}

/// Submit a one-time charge.
async fn submit_payment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>> {
    let amount = amount_to_minor_units(&req.amount)?;

    tracing::debug!(amount, "Submitting charge");

    let charge = state.stripe.create_charge(amount, &req.token.id).await?;

    tracing::info!(charge_id = %charge.id, "Charge submitted");

    Ok(Json(PaymentResponse {
        charge_id: charge.id,
    }))
}
