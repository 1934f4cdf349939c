use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Dated body-measurement snapshot. Append-only in practice, though
/// updates are supported.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Progress {
    pub id: Uuid,
    pub client_id: Uuid,
    pub trainer_id: Uuid,
    pub date: DateTime<Utc>,
    pub weight: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub biceps_left: Option<f64>,
    pub biceps_right: Option<f64>,
    pub thigh_left: Option<f64>,
    pub thigh_right: Option<f64>,
    pub front_photo_url: Option<String>,
    pub side_photo_url: Option<String>,
    pub back_photo_url: Option<String>,
    pub notes: Option<String>,
    pub trainer_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressCreate {
    pub client_id: Uuid,
    pub date: Option<DateTime<Utc>>,
    pub weight: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub biceps_left: Option<f64>,
    pub biceps_right: Option<f64>,
    pub thigh_left: Option<f64>,
    pub thigh_right: Option<f64>,
    pub front_photo_url: Option<String>,
    pub side_photo_url: Option<String>,
    pub back_photo_url: Option<String>,
    pub notes: Option<String>,
    pub trainer_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressUpdate {
    pub date: Option<DateTime<Utc>>,
    pub weight: Option<f64>,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub biceps_left: Option<f64>,
    pub biceps_right: Option<f64>,
    pub thigh_left: Option<f64>,
    pub thigh_right: Option<f64>,
    pub front_photo_url: Option<String>,
    pub side_photo_url: Option<String>,
    pub back_photo_url: Option<String>,
    pub notes: Option<String>,
    pub trainer_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateRange {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
