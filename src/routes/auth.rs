// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth0 login routes and session bootstrap.

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Extension, Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_session_token, SessionUser, SESSION_COOKIE};
use crate::models::User;
use crate::AppState;

// Type alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login))
        .route("/auth/callback", get(auth_callback))
}

/// Routes that require a live session (layered in routes/mod.rs).
pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}

/// Start the login flow - redirect to Auth0 authorization.
async fn login(State(state): State<Arc<AppState>>) -> Result<Redirect> {
    let oauth_state = sign_state(&state.config.session_secret)?;
    let auth_url = state.auth0.authorize_url(&oauth_state);

    tracing::info!(
        client_id = %state.config.auth0_client_id,
        "Starting login, redirecting to Auth0"
    );

    Ok(Redirect::temporary(&auth_url))
}

#[derive(Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Auth0 callback - exchange code, resolve the local user, set the session
/// cookie, and bounce the browser to the configured frontend URL.
///
/// Every failure in the chain ends at the failure redirect with no cookie
/// set; no partial session is ever created.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> (CookieJar, Redirect) {
    match handle_callback(&state, params).await {
        Ok(token) => {
            let cookie = Cookie::build((SESSION_COOKIE, token))
                .path("/")
                .http_only(true)
                .build();
            (
                jar.add(cookie),
                Redirect::temporary(&state.config.success_redirect),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
            (jar, Redirect::temporary(&state.config.failure_redirect))
        }
    }
}

/// The code-for-session exchange behind the callback.
async fn handle_callback(state: &Arc<AppState>, params: CallbackParams) -> Result<String> {
    if let Some(error) = params.error {
        return Err(AppError::Auth(format!("Auth0 returned error: {}", error)));
    }

    let oauth_state = params
        .state
        .ok_or_else(|| AppError::BadRequest("Missing state parameter".to_string()))?;
    if !verify_state(&oauth_state, &state.config.session_secret) {
        return Err(AppError::Auth("State signature mismatch".to_string()));
    }

    let code = params
        .code
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".to_string()))?;

    let tokens = state.auth0.exchange_code(&code).await?;
    let profile = state.auth0.userinfo(&tokens.access_token).await?;

    tracing::info!(sub = %profile.sub, "Auth0 login verified");

    let user = state.identity.resolve_user(&profile).await?;

    create_session_token(user.id, &state.config.session_secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Session token creation failed: {}", e)))
}

/// Current session user.
async fn me(Extension(SessionUser(user)): Extension<SessionUser>) -> Json<User> {
    Json(user)
}

/// Build an HMAC-signed OAuth state parameter: "timestamp_hex|signature_hex",
/// base64 encoded for the URL.
fn sign_state(secret: &[u8]) -> Result<String> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("System time error: {}", e)))?
        .as_millis();

    let payload = format!("{:x}", timestamp);

    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("HMAC init failed: {}", e)))?;
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();

    let signed_state = format!("{}|{}", payload, hex::encode(signature));

    Ok(URL_SAFE_NO_PAD.encode(signed_state.as_bytes()))
}

/// Verify the HMAC signature on the OAuth state parameter.
fn verify_state(state: &str, secret: &[u8]) -> bool {
    let Ok(bytes) = URL_SAFE_NO_PAD.decode(state) else {
        return false;
    };
    let Ok(state_str) = String::from_utf8(bytes) else {
        return false;
    };

    // Format is "timestamp_hex|signature_hex"
    let parts: Vec<&str> = state_str.splitn(2, '|').collect();
    if parts.len() != 2 {
        return false;
    }

    let payload = parts[0];
    let signature_hex = parts[1];

    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        return false;
    };
    mac.update(payload.as_bytes());

    let expected_signature = hex::encode(mac.finalize().into_bytes());

    if signature_hex != expected_signature {
        tracing::error!("OAuth state signature mismatch! Potential tampering.");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_round_trip() {
        let secret = b"secret_key";
        let state = sign_state(secret).unwrap();
        assert!(verify_state(&state, secret));
    }

    #[test]
    fn test_state_rejects_wrong_secret() {
        let secret = b"secret_key";
        let state = sign_state(secret).unwrap();
        assert!(!verify_state(&state, b"wrong_key"));
    }

    #[test]
    fn test_state_rejects_tampered_payload() {
        let secret = b"secret_key";
        let signature = {
            let mut mac = HmacSha256::new_from_slice(secret).unwrap();
            mac.update(b"deadbeef");
            hex::encode(mac.finalize().into_bytes())
        };

        // Signature was computed over a different payload
        let state_data = format!("{}|{}", "cafebabe", signature);
        let encoded_state = URL_SAFE_NO_PAD.encode(state_data.as_bytes());

        assert!(!verify_state(&encoded_state, secret));
    }

    #[test]
    fn test_state_rejects_malformed_input() {
        let secret = b"secret_key";
        assert!(!verify_state("not-base64!!!", secret));

        let encoded_state = URL_SAFE_NO_PAD.encode("no-separator");
        assert!(!verify_state(&encoded_state, secret));
    }
}
