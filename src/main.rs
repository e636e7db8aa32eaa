// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fitlog API Server
//!
//! Backend for the fitness tracking frontend: Auth0 session login,
//! goal and workout storage, contact email, and Stripe payments.

use fitlog::{
    config::Config,
    db::Db,
    services::{Auth0Client, IdentityService, Mailer, StripeClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Fitlog API");

    // Connect to Postgres and apply migrations
    let db = Db::new(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let auth0 = Auth0Client::new(
        config.auth0_domain.clone(),
        config.auth0_client_id.clone(),
        config.auth0_client_secret.clone(),
        config.auth0_callback_url.clone(),
    );
    let identity = IdentityService::new(db.clone());

    let mailer = Mailer::new(&config.smtp_host, &config.email, &config.mail_password)
        .expect("Failed to build mail transport");
    tracing::info!(host = %config.smtp_host, "Mail transport initialized");

    let stripe = StripeClient::new(config.stripe_key.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        auth0,
        identity,
        mailer,
        stripe,
    });

    // Build router
    let app = fitlog::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitlog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
