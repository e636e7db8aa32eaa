//! Goal model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fitness goal owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Goal {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub target_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
