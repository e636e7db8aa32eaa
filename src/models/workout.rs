//! Workout model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A logged workout. Workouts are created and listed, never edited.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub duration_minutes: Option<i32>,
    pub performed_on: Option<NaiveDate>,
}
