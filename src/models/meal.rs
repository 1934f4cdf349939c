use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "meal_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    PreWorkout,
    PostWorkout,
}

/// Trainer-owned nutrition content. A null `client_id` marks a reusable
/// template; otherwise the meal is assigned to that client.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meal {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub trainer_id: Uuid,
    pub client_id: Option<Uuid>,
    pub meal_type: Option<MealType>,
    pub preparation_time: Option<i32>,
    pub cooking_time: Option<i32>,
    pub servings: i32,
    pub calories_per_serving: Option<f64>,
    pub protein_grams: Option<f64>,
    pub carbs_grams: Option<f64>,
    pub fat_grams: Option<f64>,
    pub fiber_grams: Option<f64>,
    pub sugar_grams: Option<f64>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub is_template: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MealCreate {
    pub name: String,
    pub description: Option<String>,
    pub client_id: Option<Uuid>,
    pub meal_type: Option<MealType>,
    pub preparation_time: Option<i32>,
    pub cooking_time: Option<i32>,
    pub servings: Option<i32>,
    pub calories_per_serving: Option<f64>,
    pub protein_grams: Option<f64>,
    pub carbs_grams: Option<f64>,
    pub fat_grams: Option<f64>,
    pub fiber_grams: Option<f64>,
    pub sugar_grams: Option<f64>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_dairy_free: bool,
    #[serde(default)]
    pub is_template: bool,
}

#[derive(Debug, Deserialize)]
pub struct MealUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub meal_type: Option<MealType>,
    pub preparation_time: Option<i32>,
    pub cooking_time: Option<i32>,
    pub servings: Option<i32>,
    pub calories_per_serving: Option<f64>,
    pub protein_grams: Option<f64>,
    pub carbs_grams: Option<f64>,
    pub fat_grams: Option<f64>,
    pub fiber_grams: Option<f64>,
    pub sugar_grams: Option<f64>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub is_gluten_free: Option<bool>,
    pub is_dairy_free: Option<bool>,
    pub is_active: Option<bool>,
}

/// Dietary-restriction filters, ANDed when present.
#[derive(Debug, Default, Deserialize)]
pub struct DietaryFilter {
    pub is_vegetarian: Option<bool>,
    pub is_vegan: Option<bool>,
    pub is_gluten_free: Option<bool>,
    pub is_dairy_free: Option<bool>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MealPlan {
    pub id: Uuid,
    pub name: String,
    pub trainer_id: Uuid,
    pub client_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub target_calories: Option<f64>,
    pub target_protein: Option<f64>,
    pub target_carbs: Option<f64>,
    pub target_fat: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Junction row scheduling one meal into a plan's week.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MealPlanMeal {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub meal_id: Uuid,
    pub day_of_week: i32,
    pub meal_time: MealType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MealPlanCreate {
    pub name: String,
    pub client_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub target_calories: Option<f64>,
    pub target_protein: Option<f64>,
    pub target_carbs: Option<f64>,
    pub target_fat: Option<f64>,
    #[serde(default)]
    pub meals: Vec<MealPlanMealCreate>,
}

#[derive(Debug, Deserialize)]
pub struct MealPlanMealCreate {
    pub meal_id: Uuid,
    pub day_of_week: i32,
    pub meal_time: MealType,
}

#[derive(Debug, Deserialize)]
pub struct MealPlanUpdate {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub target_calories: Option<f64>,
    pub target_protein: Option<f64>,
    pub target_carbs: Option<f64>,
    pub target_fat: Option<f64>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct MealPlanWithMeals {
    #[serde(flatten)]
    pub plan: MealPlan,
    pub meals: Vec<MealPlanMeal>,
}
