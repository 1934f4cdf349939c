use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::FitnessLevel;
use crate::models::exercise::{
    Exercise, ExerciseCategory, ExerciseCreate, ExerciseFilter, ExerciseUpdate,
};

#[tracing::instrument(name = "Insert exercise", skip(pool, exercise), fields(name = %exercise.name))]
pub async fn insert_exercise(
    pool: &PgPool,
    exercise: &ExerciseCreate,
) -> Result<Exercise, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Exercise>(
        r#"
        INSERT INTO exercises (
            id, name, description, instructions, category, muscle_groups,
            difficulty_level, equipment_needed, image_url, video_url,
            duration_minutes, calories_per_minute, is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, TRUE, $13, $13)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&exercise.name)
    .bind(&exercise.description)
    .bind(&exercise.instructions)
    .bind(exercise.category)
    .bind(&exercise.muscle_groups)
    .bind(exercise.difficulty_level.unwrap_or(FitnessLevel::Beginner))
    .bind(
        exercise
            .equipment_needed
            .unwrap_or(crate::models::exercise::EquipmentType::None),
    )
    .bind(&exercise.image_url)
    .bind(&exercise.video_url)
    .bind(exercise.duration_minutes)
    .bind(exercise.calories_per_minute)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_exercise(pool: &PgPool, id: Uuid) -> Result<Option<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>("SELECT * FROM exercises WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_exercises(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>(
        "SELECT * FROM exercises WHERE is_active = TRUE ORDER BY name LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

/// Composes the optional predicates of the search surface, ANDed, always
/// restricted to active rows and ordered by name.
#[tracing::instrument(name = "Search exercises", skip(pool, filter))]
pub async fn search_exercises(
    pool: &PgPool,
    filter: &ExerciseFilter,
    skip: i64,
    limit: i64,
) -> Result<Vec<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>(
        r#"
        SELECT * FROM exercises
        WHERE is_active = TRUE
          AND ($1::text IS NULL OR name ILIKE '%' || $1 || '%')
          AND ($2::exercise_category IS NULL OR category = $2)
          AND ($3::text IS NULL OR muscle_groups ILIKE '%' || $3 || '%')
          AND ($4::fitness_level IS NULL OR difficulty_level = $4)
          AND ($5::equipment_type IS NULL OR equipment_needed = $5)
        ORDER BY name
        LIMIT $6 OFFSET $7
        "#,
    )
    .bind(&filter.name)
    .bind(filter.category)
    .bind(&filter.muscle_group)
    .bind(filter.difficulty_level)
    .bind(filter.equipment_needed)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update exercise", skip(pool, update))]
pub async fn update_exercise(
    pool: &PgPool,
    id: Uuid,
    update: &ExerciseUpdate,
) -> Result<Option<Exercise>, sqlx::Error> {
    sqlx::query_as::<_, Exercise>(
        r#"
        UPDATE exercises
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            instructions = COALESCE($4, instructions),
            category = COALESCE($5, category),
            muscle_groups = COALESCE($6, muscle_groups),
            difficulty_level = COALESCE($7, difficulty_level),
            equipment_needed = COALESCE($8, equipment_needed),
            image_url = COALESCE($9, image_url),
            video_url = COALESCE($10, video_url),
            duration_minutes = COALESCE($11, duration_minutes),
            calories_per_minute = COALESCE($12, calories_per_minute),
            is_active = COALESCE($13, is_active),
            updated_at = $14
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&update.name)
    .bind(&update.description)
    .bind(&update.instructions)
    .bind(update.category)
    .bind(&update.muscle_groups)
    .bind(update.difficulty_level)
    .bind(update.equipment_needed)
    .bind(&update.image_url)
    .bind(&update.video_url)
    .bind(update.duration_minutes)
    .bind(update.calories_per_minute)
    .bind(update.is_active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete exercise", skip(pool))]
pub async fn delete_exercise(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Distinct categories present among active exercises, for filter UIs.
pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<ExerciseCategory>, sqlx::Error> {
    let rows: Vec<(ExerciseCategory,)> = sqlx::query_as(
        r#"
        SELECT DISTINCT category FROM exercises
        WHERE category IS NOT NULL AND is_active = TRUE
        ORDER BY category
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|(c,)| c).collect())
}

/// Raw comma-joined muscle_groups values of active exercises; parsing and
/// deduplication happen application-side.
pub async fn muscle_group_values(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT DISTINCT muscle_groups FROM exercises
        WHERE muscle_groups IS NOT NULL AND is_active = TRUE
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|(m,)| m).collect())
}
