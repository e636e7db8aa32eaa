// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity resolution: map an Auth0 profile to a local user.

use crate::db::Db;
use crate::error::AppError;
use crate::models::User;
use crate::services::auth0::Auth0Profile;

/// Resolves external identities to local user rows.
#[derive(Clone)]
pub struct IdentityService {
    db: Db,
}

impl IdentityService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Resolve a verified profile to a local user, creating one on first login.
    ///
    /// The subject id uniquely determines the user; a lookup or creation
    /// failure aborts authentication with no session created.
    pub async fn resolve_user(&self, profile: &Auth0Profile) -> Result<User, AppError> {
        if let Some(user) = self.db.find_user(&profile.sub).await? {
            tracing::debug!(user_id = user.id, "Known identity");
            return Ok(user);
        }

        let display_name = profile.name.clone().unwrap_or_else(|| profile.sub.clone());
        let user = self
            .db
            .create_user(&display_name, profile.picture.as_deref(), &profile.sub)
            .await?;

        tracing::info!(user_id = user.id, "Created user on first login");
        Ok(user)
    }
}
