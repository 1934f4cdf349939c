use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One training session, completed or attempted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkoutLog {
    pub id: Uuid,
    pub client_id: Uuid,
    pub program_id: Option<Uuid>,
    pub trainer_id: Uuid,
    pub date: DateTime<Utc>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub notes: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-exercise performance line inside a workout log.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub workout_log_id: Uuid,
    pub exercise_id: Uuid,
    pub sets_completed: Option<i32>,
    pub reps_completed: Option<String>,
    pub weight_used: Option<f64>,
    pub duration_seconds: Option<i32>,
    pub distance_meters: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutLogCreate {
    pub client_id: Uuid,
    pub program_id: Option<Uuid>,
    pub date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub exercises: Vec<ExerciseLogCreate>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseLogCreate {
    pub exercise_id: Uuid,
    pub sets_completed: Option<i32>,
    pub reps_completed: Option<String>,
    pub weight_used: Option<f64>,
    pub duration_seconds: Option<i32>,
    pub distance_meters: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutLogUpdate {
    pub date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutLogWithExercises {
    #[serde(flatten)]
    pub workout: WorkoutLog,
    pub exercises: Vec<ExerciseLog>,
}

/// Aggregate over the trailing window of completed sessions.
#[derive(Debug, PartialEq, Serialize)]
pub struct WorkoutStats {
    pub total_workouts: i64,
    pub total_duration_minutes: i64,
    pub total_calories_burned: i64,
    pub average_duration: f64,
    pub workouts_per_week: f64,
}
