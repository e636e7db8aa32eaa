//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Local primary key (also the session subject)
    pub id: i32,
    /// Display name from the identity provider
    pub display_name: String,
    /// Profile picture URL (may be None if not shared)
    pub picture_url: Option<String>,
    /// Stable subject id issued by Auth0, unique per user
    pub auth_id: String,
    /// Age in years
    pub age: Option<i32>,
    /// Height in centimeters
    pub height_cm: Option<i32>,
    /// Weight in kilograms
    pub weight_kg: Option<i32>,
}
