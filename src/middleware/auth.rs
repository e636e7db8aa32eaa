// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session authentication middleware.
//!
//! The session cookie carries a signed JWT whose subject is the local user
//! id. On each request the id is resolved back to a full user row; an id
//! that no longer resolves leaves the request unauthenticated rather than
//! failing the pipeline.

use crate::error::AppError;
use crate::models::User;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name of the session cookie set at login.
pub const SESSION_COOKIE: &str = "fitlog_session";

/// Session token claims.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (local user id)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
    /// Issued at (Unix timestamp)
    pub iat: usize,
}

/// The session user resolved from the cookie, inserted as a request extension.
#[derive(Debug, Clone)]
pub struct SessionUser(pub User);

/// Middleware that requires a valid session.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let token = if let Some(cookie) = jar.get(SESSION_COOKIE) {
        cookie.value().to_string()
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header {
            Some(h) if h.starts_with("Bearer ") => h[7..].to_string(),
            _ => return Err(AppError::Unauthorized),
        }
    };

    let key = DecodingKey::from_secret(&state.config.session_secret);
    let validation = Validation::new(Algorithm::HS256);

    let token_data =
        decode::<Claims>(&token, &key, &validation).map_err(|_| AppError::Unauthorized)?;

    let user_id: i32 = token_data
        .claims
        .sub
        .parse()
        .map_err(|_| AppError::Unauthorized)?;

    let found = state.db.find_session_user(user_id).await?;
    let user = session_user(found)?;

    request.extensions_mut().insert(SessionUser(user));

    Ok(next.run(request).await)
}

/// A session id with no matching row is unauthenticated, not a server error.
fn session_user(found: Option<User>) -> Result<User, AppError> {
    found.ok_or(AppError::Unauthorized)
}

/// Create a session token for a user.
pub fn create_session_token(user_id: i32, signing_key: &[u8]) -> anyhow::Result<String> {
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + 30 * 24 * 60 * 60, // 30 days
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_round_trip() {
        let key = b"test_session_key";
        let token = create_session_token(42, key).unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(key),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, "42");
        assert!(decoded.claims.exp > decoded.claims.iat);
    }

    #[test]
    fn test_stale_session_id_is_unauthenticated() {
        let result = session_user(None);
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_resolved_session_user_passes_through() {
        let user = User {
            id: 7,
            display_name: "Test User".to_string(),
            picture_url: None,
            auth_id: "auth0|7".to_string(),
            age: None,
            height_cm: None,
            weight_kg: None,
        };
        let resolved = session_user(Some(user)).unwrap();
        assert_eq!(resolved.id, 7);
    }
}
