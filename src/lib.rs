// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Fitlog: backend API for a fitness tracking app
//!
//! This crate provides the backend API gluing together Auth0 login,
//! goal/workout storage, transactional email, and Stripe charges.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::Db;
use services::{Auth0Client, IdentityService, Mailer, StripeClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
    pub auth0: Auth0Client,
    pub identity: IdentityService,
    pub mailer: Mailer,
    pub stripe: StripeClient,
}
