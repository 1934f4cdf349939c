use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::progress::{Progress, ProgressCreate, ProgressUpdate};

#[tracing::instrument(name = "Insert progress entry", skip(pool, entry))]
pub async fn insert_progress(
    pool: &PgPool,
    trainer_id: Uuid,
    entry: &ProgressCreate,
) -> Result<Progress, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Progress>(
        r#"
        INSERT INTO progress (
            id, client_id, trainer_id, date, weight, body_fat_percentage,
            muscle_mass, chest, waist, hips, biceps_left, biceps_right,
            thigh_left, thigh_right, front_photo_url, side_photo_url,
            back_photo_url, notes, trainer_notes, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $20)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(entry.client_id)
    .bind(trainer_id)
    .bind(entry.date.unwrap_or(now))
    .bind(entry.weight)
    .bind(entry.body_fat_percentage)
    .bind(entry.muscle_mass)
    .bind(entry.chest)
    .bind(entry.waist)
    .bind(entry.hips)
    .bind(entry.biceps_left)
    .bind(entry.biceps_right)
    .bind(entry.thigh_left)
    .bind(entry.thigh_right)
    .bind(&entry.front_photo_url)
    .bind(&entry.side_photo_url)
    .bind(&entry.back_photo_url)
    .bind(&entry.notes)
    .bind(&entry.trainer_notes)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_progress(pool: &PgPool, id: Uuid) -> Result<Option<Progress>, sqlx::Error> {
    sqlx::query_as::<_, Progress>("SELECT * FROM progress WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_client(
    pool: &PgPool,
    client_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Progress>, sqlx::Error> {
    sqlx::query_as::<_, Progress>(
        r#"
        SELECT * FROM progress
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

/// Latest entry is simply the max-by-date row.
pub async fn get_latest(pool: &PgPool, client_id: Uuid) -> Result<Option<Progress>, sqlx::Error> {
    sqlx::query_as::<_, Progress>(
        "SELECT * FROM progress WHERE client_id = $1 ORDER BY date DESC LIMIT 1",
    )
    .bind(client_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_by_date_range(
    pool: &PgPool,
    client_id: Uuid,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<Vec<Progress>, sqlx::Error> {
    sqlx::query_as::<_, Progress>(
        r#"
        SELECT * FROM progress
        WHERE client_id = $1 AND date >= $2 AND date <= $3
        ORDER BY date
        "#,
    )
    .bind(client_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update progress entry", skip(pool, update))]
pub async fn update_progress(
    pool: &PgPool,
    id: Uuid,
    update: &ProgressUpdate,
) -> Result<Option<Progress>, sqlx::Error> {
    sqlx::query_as::<_, Progress>(
        r#"
        UPDATE progress
        SET date = COALESCE($2, date),
            weight = COALESCE($3, weight),
            body_fat_percentage = COALESCE($4, body_fat_percentage),
            muscle_mass = COALESCE($5, muscle_mass),
            chest = COALESCE($6, chest),
            waist = COALESCE($7, waist),
            hips = COALESCE($8, hips),
            biceps_left = COALESCE($9, biceps_left),
            biceps_right = COALESCE($10, biceps_right),
            thigh_left = COALESCE($11, thigh_left),
            thigh_right = COALESCE($12, thigh_right),
            front_photo_url = COALESCE($13, front_photo_url),
            side_photo_url = COALESCE($14, side_photo_url),
            back_photo_url = COALESCE($15, back_photo_url),
            notes = COALESCE($16, notes),
            trainer_notes = COALESCE($17, trainer_notes),
            updated_at = $18
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(update.date)
    .bind(update.weight)
    .bind(update.body_fat_percentage)
    .bind(update.muscle_mass)
    .bind(update.chest)
    .bind(update.waist)
    .bind(update.hips)
    .bind(update.biceps_left)
    .bind(update.biceps_right)
    .bind(update.thigh_left)
    .bind(update.thigh_right)
    .bind(&update.front_photo_url)
    .bind(&update.side_photo_url)
    .bind(&update.back_photo_url)
    .bind(&update.notes)
    .bind(&update.trainer_notes)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete progress entry", skip(pool))]
pub async fn delete_progress(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM progress WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
