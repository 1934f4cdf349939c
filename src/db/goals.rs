use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::goal::{Goal, GoalCreate, GoalUpdate};

#[tracing::instrument(name = "Insert goal", skip(pool, goal), fields(title = %goal.title))]
pub async fn insert_goal(
    pool: &PgPool,
    trainer_id: Uuid,
    goal: &GoalCreate,
) -> Result<Goal, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (
            id, client_id, trainer_id, title, description, target_value,
            current_value, unit, target_date, achieved_date, is_achieved,
            is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NULL, FALSE, TRUE, $10, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(goal.client_id)
    .bind(trainer_id)
    .bind(&goal.title)
    .bind(&goal.description)
    .bind(goal.target_value)
    .bind(goal.current_value)
    .bind(&goal.unit)
    .bind(goal.target_date)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_goal(pool: &PgPool, id: Uuid) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>("SELECT * FROM goals WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_client(
    pool: &PgPool,
    client_id: Uuid,
    is_active: Option<bool>,
) -> Result<Vec<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT * FROM goals
        WHERE client_id = $1
          AND ($2::boolean IS NULL OR is_active = $2)
        ORDER BY target_date
        "#,
    )
    .bind(client_id)
    .bind(is_active)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update goal", skip(pool, update))]
pub async fn update_goal(
    pool: &PgPool,
    id: Uuid,
    update: &GoalUpdate,
) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals
        SET title = COALESCE($2, title),
            description = COALESCE($3, description),
            target_value = COALESCE($4, target_value),
            current_value = COALESCE($5, current_value),
            unit = COALESCE($6, unit),
            target_date = COALESCE($7, target_date),
            is_active = COALESCE($8, is_active),
            updated_at = $9
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&update.title)
    .bind(&update.description)
    .bind(update.target_value)
    .bind(update.current_value)
    .bind(&update.unit)
    .bind(update.target_date)
    .bind(update.is_active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Achievement is caller-asserted; the achieved_date is re-stamped on every
/// call, including repeats on an already-achieved goal.
#[tracing::instrument(name = "Mark goal achieved", skip(pool))]
pub async fn mark_achieved(pool: &PgPool, id: Uuid) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals
        SET is_achieved = TRUE,
            achieved_date = $2,
            updated_at = $2
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

pub async fn list_overdue(pool: &PgPool, client_id: Uuid) -> Result<Vec<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT * FROM goals
        WHERE client_id = $1
          AND target_date < $2
          AND is_achieved = FALSE
          AND is_active = TRUE
        ORDER BY target_date
        "#,
    )
    .bind(client_id)
    .bind(Utc::now())
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Delete goal", skip(pool))]
pub async fn delete_goal(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM goals WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
