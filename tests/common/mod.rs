// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use fitlog::config::Config;
use fitlog::db::Db;
use fitlog::routes::create_router;
use fitlog::services::{Auth0Client, IdentityService, Mailer, StripeClient};
use fitlog::AppState;
use std::sync::Arc;

/// Check if a test database is available via environment variable.
#[allow(dead_code)]
pub fn database_available() -> bool {
    std::env::var("TEST_DATABASE_URL").is_ok()
}

/// Skip test with message if no test database is available.
#[macro_export]
macro_rules! require_database {
    () => {
        if !crate::common::database_available() {
            eprintln!("⚠️  Skipping: TEST_DATABASE_URL not set");
            return;
        }
    };
}

/// Connect to the test database (applies migrations).
#[allow(dead_code)]
pub async fn test_db() -> Db {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL not set");
    Db::new(&url).await.expect("Failed to connect to test database")
}

/// Create a mock database connection (offline).
#[allow(dead_code)]
pub fn test_db_offline() -> Db {
    Db::new_mock()
}

/// Create a test app around the given database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn app_with_db(db: Db) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();

    let auth0 = Auth0Client::new(
        config.auth0_domain.clone(),
        config.auth0_client_id.clone(),
        config.auth0_client_secret.clone(),
        config.auth0_callback_url.clone(),
    );
    let identity = IdentityService::new(db.clone());
    let mailer = Mailer::new_mock();
    let stripe = StripeClient::new(config.stripe_key.clone());

    let state = Arc::new(AppState {
        config,
        db,
        auth0,
        identity,
        mailer,
        stripe,
    });

    (create_router(state.clone()), state)
}

/// Create a test app with offline mock dependencies.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    app_with_db(test_db_offline())
}
