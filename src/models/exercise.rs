use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::client::FitnessLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "exercise_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
    Balance,
    Sports,
    Functional,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::Flexibility => "flexibility",
            ExerciseCategory::Balance => "balance",
            ExerciseCategory::Sports => "sports",
            ExerciseCategory::Functional => "functional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "equipment_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    None,
    Dumbbells,
    Barbell,
    ResistanceBands,
    Machines,
    CardioEquipment,
    Bodyweight,
    Kettlebell,
    Other,
}

/// Library exercise. `muscle_groups` is a comma-joined set, parsed
/// application-side for the distinct-values listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<ExerciseCategory>,
    pub muscle_groups: Option<String>,
    pub difficulty_level: FitnessLevel,
    pub equipment_needed: EquipmentType,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_per_minute: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseCreate {
    pub name: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<ExerciseCategory>,
    pub muscle_groups: Option<String>,
    pub difficulty_level: Option<FitnessLevel>,
    pub equipment_needed: Option<EquipmentType>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_per_minute: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<ExerciseCategory>,
    pub muscle_groups: Option<String>,
    pub difficulty_level: Option<FitnessLevel>,
    pub equipment_needed: Option<EquipmentType>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_per_minute: Option<i32>,
    pub is_active: Option<bool>,
}

/// Independent optional predicates, ANDed; always restricted to active rows.
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseFilter {
    pub name: Option<String>,
    pub category: Option<ExerciseCategory>,
    pub muscle_group: Option<String>,
    pub difficulty_level: Option<FitnessLevel>,
    pub equipment_needed: Option<EquipmentType>,
}
