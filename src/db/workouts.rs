use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::workout::{ExerciseLog, WorkoutLog, WorkoutLogCreate, WorkoutLogUpdate};

/// Session row and its per-exercise lines land in one transaction.
#[tracing::instrument(
    name = "Create workout log with exercises",
    skip(pool, log),
    fields(client_id = %log.client_id, exercise_count = log.exercises.len())
)]
pub async fn create_workout_log(
    pool: &PgPool,
    trainer_id: Uuid,
    log: &WorkoutLogCreate,
) -> Result<WorkoutLog, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, WorkoutLog>(
        r#"
        INSERT INTO workout_logs (
            id, client_id, program_id, trainer_id, date, duration_minutes,
            calories_burned, notes, completed, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(log.client_id)
    .bind(log.program_id)
    .bind(trainer_id)
    .bind(log.date.unwrap_or(now))
    .bind(log.duration_minutes)
    .bind(log.calories_burned)
    .bind(&log.notes)
    .bind(log.completed)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for exercise in &log.exercises {
        sqlx::query(
            r#"
            INSERT INTO exercise_logs (
                id, workout_log_id, exercise_id, sets_completed, reps_completed,
                weight_used, duration_seconds, distance_meters, notes, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(created.id)
        .bind(exercise.exercise_id)
        .bind(exercise.sets_completed)
        .bind(&exercise.reps_completed)
        .bind(exercise.weight_used)
        .bind(exercise.duration_seconds)
        .bind(exercise.distance_meters)
        .bind(&exercise.notes)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(created)
}

pub async fn get_workout_log(pool: &PgPool, id: Uuid) -> Result<Option<WorkoutLog>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutLog>("SELECT * FROM workout_logs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_exercise_logs(
    pool: &PgPool,
    workout_log_id: Uuid,
) -> Result<Vec<ExerciseLog>, sqlx::Error> {
    sqlx::query_as::<_, ExerciseLog>(
        "SELECT * FROM exercise_logs WHERE workout_log_id = $1 ORDER BY created_at",
    )
    .bind(workout_log_id)
    .fetch_all(pool)
    .await
}

pub async fn list_by_client(
    pool: &PgPool,
    client_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<WorkoutLog>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutLog>(
        r#"
        SELECT * FROM workout_logs
        WHERE client_id = $1
        ORDER BY date DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(client_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

/// Completed sessions inside the trailing stats window.
pub async fn completed_since(
    pool: &PgPool,
    client_id: Uuid,
    since: DateTime<Utc>,
) -> Result<Vec<WorkoutLog>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutLog>(
        r#"
        SELECT * FROM workout_logs
        WHERE client_id = $1 AND date >= $2 AND completed = TRUE
        ORDER BY date
        "#,
    )
    .bind(client_id)
    .bind(since)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update workout log", skip(pool, update))]
pub async fn update_workout_log(
    pool: &PgPool,
    id: Uuid,
    update: &WorkoutLogUpdate,
) -> Result<Option<WorkoutLog>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutLog>(
        r#"
        UPDATE workout_logs
        SET date = COALESCE($2, date),
            duration_minutes = COALESCE($3, duration_minutes),
            calories_burned = COALESCE($4, calories_burned),
            notes = COALESCE($5, notes),
            completed = COALESCE($6, completed),
            updated_at = $7
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(update.date)
    .bind(update.duration_minutes)
    .bind(update.calories_burned)
    .bind(&update.notes)
    .bind(update.completed)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete workout log", skip(pool))]
pub async fn delete_workout_log(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    // exercise_logs go with the session via the cascade constraint
    let result = sqlx::query("DELETE FROM workout_logs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_by_trainer_on_day(
    pool: &PgPool,
    trainer_id: Uuid,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM workout_logs WHERE trainer_id = $1 AND date >= $2 AND date < $3",
    )
    .bind(trainer_id)
    .bind(day_start)
    .bind(day_end)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// (completed, total) session counts for a trainer across all clients.
pub async fn completion_counts_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
) -> Result<(i64, i64), sqlx::Error> {
    let (completed, total): (i64, i64) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*) FILTER (WHERE completed) AS completed,
            COUNT(*) AS total
        FROM workout_logs
        WHERE trainer_id = $1
        "#,
    )
    .bind(trainer_id)
    .fetch_one(pool)
    .await?;
    Ok((completed, total))
}
