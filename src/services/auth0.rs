// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth0 API client for the authorization-code login flow.
//!
//! Handles:
//! - Building the /authorize redirect URL
//! - Exchanging the callback code for tokens
//! - Fetching the user profile from /userinfo

use crate::error::AppError;
use serde::Deserialize;

const OIDC_SCOPE: &str = "openid profile";

/// Auth0 API client.
#[derive(Clone)]
pub struct Auth0Client {
    http: reqwest::Client,
    domain: String,
    client_id: String,
    client_secret: String,
    callback_url: String,
}

impl Auth0Client {
    /// Create a new Auth0 client with application credentials.
    pub fn new(
        domain: String,
        client_id: String,
        client_secret: String,
        callback_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            domain,
            client_id,
            client_secret,
            callback_url,
        }
    }

    /// Build the /authorize URL the browser is redirected to at login.
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "https://{}/authorize?\
             response_type=code&\
             client_id={}&\
             redirect_uri={}&\
             scope={}&\
             state={}",
            self.domain,
            self.client_id,
            urlencoding::encode(&self.callback_url),
            urlencoding::encode(OIDC_SCOPE),
            state
        )
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        let url = format!("https://{}/oauth/token", self.domain);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", self.callback_url.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Token exchange request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Fetch the verified profile for an access token.
    pub async fn userinfo(&self, access_token: &str) -> Result<Auth0Profile, AppError> {
        let url = format!("https://{}/userinfo", self.domain);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("Userinfo request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Auth(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("JSON parse error: {}", e)))
    }
}

/// Token response from /oauth/token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub id_token: Option<String>,
    pub token_type: Option<String>,
}

/// Verified profile from /userinfo.
#[derive(Debug, Clone, Deserialize)]
pub struct Auth0Profile {
    /// Stable subject id, e.g. "auth0|abc123"
    pub sub: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_carries_oauth_params() {
        let client = Auth0Client::new(
            "test.auth0.com".to_string(),
            "client123".to_string(),
            "secret".to_string(),
            "http://localhost:8080/auth/callback".to_string(),
        );

        let url = client.authorize_url("signed_state");

        assert!(url.starts_with("https://test.auth0.com/authorize?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=client123"));
        assert!(url.contains("scope=openid%20profile"));
        assert!(url.contains("state=signed_state"));
        assert!(url.contains(&urlencoding::encode("http://localhost:8080/auth/callback").into_owned()));
    }
}
