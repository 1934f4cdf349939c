use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Professional profile extending a user account 1:1.
/// `hourly_rate` is in minor currency units (cents), never a float.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trainer {
    pub id: Uuid,
    pub user_id: Uuid,
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub bio: Option<String>,
    pub certification: Option<String>,
    pub hourly_rate: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct TrainerCreate {
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub bio: Option<String>,
    pub certification: Option<String>,
    pub hourly_rate: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct TrainerUpdate {
    pub specialization: Option<String>,
    pub experience_years: Option<i32>,
    pub bio: Option<String>,
    pub certification: Option<String>,
    pub hourly_rate: Option<i32>,
}
