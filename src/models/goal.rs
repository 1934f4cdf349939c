use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Measurable client target. Achievement is caller-asserted: marking a goal
/// achieved does not verify current_value against target_value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: Uuid,
    pub client_id: Uuid,
    pub trainer_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub achieved_date: Option<DateTime<Utc>>,
    pub is_achieved: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct GoalCreate {
    pub client_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_value: Option<f64>,
    pub current_value: Option<f64>,
    pub unit: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}
