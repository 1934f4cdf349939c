use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::trainer::{Trainer, TrainerCreate, TrainerUpdate};

#[tracing::instrument(name = "Insert trainer profile", skip(pool, trainer))]
pub async fn insert_trainer(
    pool: &PgPool,
    user_id: Uuid,
    trainer: &TrainerCreate,
) -> Result<Trainer, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Trainer>(
        r#"
        INSERT INTO trainers (id, user_id, specialization, experience_years, bio, certification, hourly_rate, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&trainer.specialization)
    .bind(trainer.experience_years)
    .bind(&trainer.bio)
    .bind(&trainer.certification)
    .bind(trainer.hourly_rate)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_trainer(pool: &PgPool, id: Uuid) -> Result<Option<Trainer>, sqlx::Error> {
    sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_by_user_id(pool: &PgPool, user_id: Uuid) -> Result<Option<Trainer>, sqlx::Error> {
    sqlx::query_as::<_, Trainer>("SELECT * FROM trainers WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn list_trainers(
    pool: &PgPool,
    skip: i64,
    limit: i64,
) -> Result<Vec<Trainer>, sqlx::Error> {
    sqlx::query_as::<_, Trainer>(
        "SELECT * FROM trainers ORDER BY created_at LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update trainer profile", skip(pool, update))]
pub async fn update_trainer(
    pool: &PgPool,
    id: Uuid,
    update: &TrainerUpdate,
) -> Result<Option<Trainer>, sqlx::Error> {
    sqlx::query_as::<_, Trainer>(
        r#"
        UPDATE trainers
        SET specialization = COALESCE($2, specialization),
            experience_years = COALESCE($3, experience_years),
            bio = COALESCE($4, bio),
            certification = COALESCE($5, certification),
            hourly_rate = COALESCE($6, hourly_rate),
            updated_at = $7
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&update.specialization)
    .bind(update.experience_years)
    .bind(&update.bio)
    .bind(&update.certification)
    .bind(update.hourly_rate)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete trainer profile", skip(pool))]
pub async fn delete_trainer(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM trainers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
