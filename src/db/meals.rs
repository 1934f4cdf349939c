use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::meal::{DietaryFilter, Meal, MealCreate, MealUpdate};

#[tracing::instrument(name = "Insert meal", skip(pool, meal), fields(name = %meal.name))]
pub async fn insert_meal(
    pool: &PgPool,
    trainer_id: Uuid,
    meal: &MealCreate,
) -> Result<Meal, sqlx::Error> {
    let now = Utc::now();
    // A meal without a client is a template by definition
    let is_template = meal.is_template || meal.client_id.is_none();
    sqlx::query_as::<_, Meal>(
        r#"
        INSERT INTO meals (
            id, name, description, trainer_id, client_id, meal_type,
            preparation_time, cooking_time, servings, calories_per_serving,
            protein_grams, carbs_grams, fat_grams, fiber_grams, sugar_grams,
            ingredients, instructions, image_url, is_vegetarian, is_vegan,
            is_gluten_free, is_dairy_free, is_template, is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                $16, $17, $18, $19, $20, $21, $22, $23, TRUE, $24, $24)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&meal.name)
    .bind(&meal.description)
    .bind(trainer_id)
    .bind(meal.client_id)
    .bind(meal.meal_type)
    .bind(meal.preparation_time)
    .bind(meal.cooking_time)
    .bind(meal.servings.unwrap_or(1))
    .bind(meal.calories_per_serving)
    .bind(meal.protein_grams)
    .bind(meal.carbs_grams)
    .bind(meal.fat_grams)
    .bind(meal.fiber_grams)
    .bind(meal.sugar_grams)
    .bind(&meal.ingredients)
    .bind(&meal.instructions)
    .bind(&meal.image_url)
    .bind(meal.is_vegetarian)
    .bind(meal.is_vegan)
    .bind(meal.is_gluten_free)
    .bind(meal.is_dairy_free)
    .bind(is_template)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_meal(pool: &PgPool, id: Uuid) -> Result<Option<Meal>, sqlx::Error> {
    sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
    is_template: Option<bool>,
    skip: i64,
    limit: i64,
) -> Result<Vec<Meal>, sqlx::Error> {
    sqlx::query_as::<_, Meal>(
        r#"
        SELECT * FROM meals
        WHERE trainer_id = $1
          AND is_active = TRUE
          AND ($2::boolean IS NULL OR is_template = $2)
        ORDER BY name
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(trainer_id)
    .bind(is_template)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

pub async fn list_by_client(
    pool: &PgPool,
    client_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Meal>, sqlx::Error> {
    sqlx::query_as::<_, Meal>(
        r#"
        SELECT * FROM meals
        WHERE client_id = $1 AND is_active = TRUE
        ORDER BY name
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(client_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Search meals by dietary restrictions", skip(pool, filter))]
pub async fn search_by_dietary_restrictions(
    pool: &PgPool,
    trainer_id: Uuid,
    filter: &DietaryFilter,
    skip: i64,
    limit: i64,
) -> Result<Vec<Meal>, sqlx::Error> {
    sqlx::query_as::<_, Meal>(
        r#"
        SELECT * FROM meals
        WHERE trainer_id = $1
          AND is_active = TRUE
          AND ($2::boolean IS NULL OR is_vegetarian = $2)
          AND ($3::boolean IS NULL OR is_vegan = $3)
          AND ($4::boolean IS NULL OR is_gluten_free = $4)
          AND ($5::boolean IS NULL OR is_dairy_free = $5)
        ORDER BY name
        LIMIT $6 OFFSET $7
        "#,
    )
    .bind(trainer_id)
    .bind(filter.is_vegetarian)
    .bind(filter.is_vegan)
    .bind(filter.is_gluten_free)
    .bind(filter.is_dairy_free)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update meal", skip(pool, update))]
pub async fn update_meal(
    pool: &PgPool,
    id: Uuid,
    update: &MealUpdate,
) -> Result<Option<Meal>, sqlx::Error> {
    sqlx::query_as::<_, Meal>(
        r#"
        UPDATE meals
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            meal_type = COALESCE($4, meal_type),
            preparation_time = COALESCE($5, preparation_time),
            cooking_time = COALESCE($6, cooking_time),
            servings = COALESCE($7, servings),
            calories_per_serving = COALESCE($8, calories_per_serving),
            protein_grams = COALESCE($9, protein_grams),
            carbs_grams = COALESCE($10, carbs_grams),
            fat_grams = COALESCE($11, fat_grams),
            fiber_grams = COALESCE($12, fiber_grams),
            sugar_grams = COALESCE($13, sugar_grams),
            ingredients = COALESCE($14, ingredients),
            instructions = COALESCE($15, instructions),
            image_url = COALESCE($16, image_url),
            is_vegetarian = COALESCE($17, is_vegetarian),
            is_vegan = COALESCE($18, is_vegan),
            is_gluten_free = COALESCE($19, is_gluten_free),
            is_dairy_free = COALESCE($20, is_dairy_free),
            is_active = COALESCE($21, is_active),
            updated_at = $22
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&update.name)
    .bind(&update.description)
    .bind(update.meal_type)
    .bind(update.preparation_time)
    .bind(update.cooking_time)
    .bind(update.servings)
    .bind(update.calories_per_serving)
    .bind(update.protein_grams)
    .bind(update.carbs_grams)
    .bind(update.fat_grams)
    .bind(update.fiber_grams)
    .bind(update.sugar_grams)
    .bind(&update.ingredients)
    .bind(&update.instructions)
    .bind(&update.image_url)
    .bind(update.is_vegetarian)
    .bind(update.is_vegan)
    .bind(update.is_gluten_free)
    .bind(update.is_dairy_free)
    .bind(update.is_active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete meal", skip(pool))]
pub async fn delete_meal(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM meals WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
