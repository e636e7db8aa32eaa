// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod auth0;
pub mod identity;
pub mod mailer;
pub mod stripe;

pub use auth0::{Auth0Client, Auth0Profile, TokenResponse};
pub use identity::IdentityService;
pub use mailer::Mailer;
pub use stripe::StripeClient;
