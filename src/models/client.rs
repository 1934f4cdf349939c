use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "fitness_level", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

/// Client profile owned by a trainer. `user_id` is optional: a client may
/// exist without a login of their own.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub trainer_id: Uuid,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fitness_level: Option<FitnessLevel>,
    pub goals: Option<String>,
    pub medical_conditions: Option<String>,
    pub preferences: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ClientCreate {
    pub user_id: Option<Uuid>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fitness_level: Option<FitnessLevel>,
    pub goals: Option<String>,
    pub medical_conditions: Option<String>,
    pub preferences: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClientUpdate {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fitness_level: Option<FitnessLevel>,
    pub goals: Option<String>,
    pub medical_conditions: Option<String>,
    pub preferences: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub is_active: Option<bool>,
}

/// Optional filters for the client search endpoint, ANDed together.
#[derive(Debug, Deserialize)]
pub struct ClientFilter {
    pub fitness_level: Option<FitnessLevel>,
    pub is_active: Option<bool>,
}
