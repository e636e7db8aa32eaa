//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup into an immutable struct that is
//! passed into the shared state; nothing reads the environment afterwards.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Where the browser lands after a successful login
    pub success_redirect: String,
    /// Where the browser lands after a failed login
    pub failure_redirect: String,
    /// Postgres connection string
    pub database_url: String,
    /// HMAC key for session tokens and OAuth state (raw bytes)
    pub session_secret: Vec<u8>,

    // --- Auth0 ---
    /// Auth0 tenant domain, e.g. "example.auth0.com"
    pub auth0_domain: String,
    /// Auth0 application client ID (public)
    pub auth0_client_id: String,
    /// Auth0 application client secret
    pub auth0_client_secret: String,
    /// Callback URL registered with Auth0
    pub auth0_callback_url: String,

    // --- Mail ---
    /// SMTP relay host
    pub smtp_host: String,
    /// Service mailbox; contact mail is sent from and to this address
    pub email: String,
    /// SMTP password for the service mailbox
    pub mail_password: String,

    // --- Payments ---
    /// Stripe secret key
    pub stripe_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// For local development, values can be set via a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            success_redirect: env::var("SUCCESS_REDIRECT")
                .unwrap_or_else(|_| format!("{}/dashboard", frontend_url)),
            failure_redirect: env::var("FAILURE_REDIRECT")
                .unwrap_or_else(|_| format!("{}/login", frontend_url)),
            frontend_url,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
            session_secret: env::var("SESSION_SECRET")
                .map_err(|_| ConfigError::Missing("SESSION_SECRET"))?
                .into_bytes(),

            auth0_domain: env::var("AUTH0_DOMAIN")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("AUTH0_DOMAIN"))?,
            auth0_client_id: env::var("AUTH0_CLIENT_ID")
                .map_err(|_| ConfigError::Missing("AUTH0_CLIENT_ID"))?,
            auth0_client_secret: env::var("AUTH0_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("AUTH0_CLIENT_SECRET"))?,
            auth0_callback_url: env::var("AUTH0_CALLBACK_URL")
                .map_err(|_| ConfigError::Missing("AUTH0_CALLBACK_URL"))?,

            smtp_host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
            email: env::var("EMAIL").map_err(|_| ConfigError::Missing("EMAIL"))?,
            mail_password: env::var("MAIL_PASSWORD")
                .map_err(|_| ConfigError::Missing("MAIL_PASSWORD"))?,

            stripe_key: env::var("STRIPE_KEY").map_err(|_| ConfigError::Missing("STRIPE_KEY"))?,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:3000".to_string(),
            success_redirect: "http://localhost:3000/dashboard".to_string(),
            failure_redirect: "http://localhost:3000/login".to_string(),
            database_url: "postgres://localhost/fitlog_test".to_string(),
            session_secret: b"test_session_key_32_bytes_min!!".to_vec(),
            auth0_domain: "test.auth0.com".to_string(),
            auth0_client_id: "test_client_id".to_string(),
            auth0_client_secret: "test_secret".to_string(),
            auth0_callback_url: "http://localhost:8080/auth/callback".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            email: "fitlog@example.com".to_string(),
            mail_password: "test_password".to_string(),
            stripe_key: "sk_test_fitlog".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("DATABASE_URL", "postgres://localhost/fitlog");
        env::set_var("SESSION_SECRET", "test_session_key_32_bytes_min!!");
        env::set_var("AUTH0_DOMAIN", "test.auth0.com");
        env::set_var("AUTH0_CLIENT_ID", "test_id");
        env::set_var("AUTH0_CLIENT_SECRET", "test_secret");
        env::set_var("AUTH0_CALLBACK_URL", "http://localhost:8080/auth/callback");
        env::set_var("EMAIL", "fitlog@example.com");
        env::set_var("MAIL_PASSWORD", "test_password");
        env::set_var("STRIPE_KEY", "sk_test_123");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.auth0_domain, "test.auth0.com");
        assert_eq!(config.auth0_client_id, "test_id");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.success_redirect,
            "http://localhost:3000/dashboard"
        );
    }
}
