use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::client::FitnessLevel;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Program {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub trainer_id: Uuid,
    pub client_id: Uuid,
    pub duration_weeks: Option<i32>,
    pub sessions_per_week: Option<i32>,
    pub difficulty_level: Option<FitnessLevel>,
    pub goals: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One exercise's parameters within a program. `reps` is textual on purpose:
/// "8-12", "10", "30 seconds" are all valid prescriptions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramExercise {
    pub id: Uuid,
    pub program_id: Uuid,
    pub exercise_id: Uuid,
    pub sets: Option<i32>,
    pub reps: Option<String>,
    pub weight: Option<f64>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    pub order_in_program: Option<i32>,
    pub week_number: Option<i32>,
    pub day_number: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ProgramCreate {
    pub name: String,
    pub description: Option<String>,
    pub client_id: Uuid,
    pub duration_weeks: Option<i32>,
    pub sessions_per_week: Option<i32>,
    pub difficulty_level: Option<FitnessLevel>,
    pub goals: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ProgramExerciseCreate>,
}

#[derive(Debug, Deserialize)]
pub struct ProgramExerciseCreate {
    pub exercise_id: Uuid,
    pub sets: Option<i32>,
    pub reps: Option<String>,
    pub weight: Option<f64>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    pub order_in_program: Option<i32>,
    pub week_number: Option<i32>,
    pub day_number: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ProgramUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_weeks: Option<i32>,
    pub sessions_per_week: Option<i32>,
    pub difficulty_level: Option<FitnessLevel>,
    pub goals: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ProgramExerciseUpdate {
    pub sets: Option<i32>,
    pub reps: Option<String>,
    pub weight: Option<f64>,
    pub rest_seconds: Option<i32>,
    pub notes: Option<String>,
    pub order_in_program: Option<i32>,
    pub week_number: Option<i32>,
    pub day_number: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct ProgramWithExercises {
    #[serde(flatten)]
    pub program: Program,
    pub exercises: Vec<ProgramExercise>,
}
