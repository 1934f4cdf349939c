use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::{Client, ClientCreate, ClientFilter, ClientUpdate};

#[tracing::instrument(name = "Insert client profile", skip(pool, client))]
pub async fn insert_client(
    pool: &PgPool,
    trainer_id: Uuid,
    client: &ClientCreate,
) -> Result<Client, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Client>(
        r#"
        INSERT INTO clients (
            id, user_id, trainer_id, age, gender, height, weight, fitness_level,
            goals, medical_conditions, preferences, phone, emergency_contact,
            emergency_phone, is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, TRUE, $15, $15)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(client.user_id)
    .bind(trainer_id)
    .bind(client.age)
    .bind(&client.gender)
    .bind(client.height)
    .bind(client.weight)
    .bind(client.fitness_level)
    .bind(&client.goals)
    .bind(&client.medical_conditions)
    .bind(&client.preferences)
    .bind(&client.phone)
    .bind(&client.emergency_contact)
    .bind(&client.emergency_phone)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_client(pool: &PgPool, id: Uuid) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT * FROM clients WHERE trainer_id = $1 ORDER BY created_at LIMIT $2 OFFSET $3",
    )
    .bind(trainer_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

pub async fn count_by_trainer(pool: &PgPool, trainer_id: Uuid) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients WHERE trainer_id = $1")
        .bind(trainer_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Optional filters ANDed onto the trainer scope; absent filters fall away.
#[tracing::instrument(name = "Search clients", skip(pool, filter))]
pub async fn search_clients(
    pool: &PgPool,
    trainer_id: Uuid,
    filter: &ClientFilter,
    skip: i64,
    limit: i64,
) -> Result<Vec<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        r#"
        SELECT * FROM clients
        WHERE trainer_id = $1
          AND ($2::fitness_level IS NULL OR fitness_level = $2)
          AND ($3::boolean IS NULL OR is_active = $3)
        ORDER BY created_at
        LIMIT $4 OFFSET $5
        "#,
    )
    .bind(trainer_id)
    .bind(filter.fitness_level)
    .bind(filter.is_active)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update client profile", skip(pool, update))]
pub async fn update_client(
    pool: &PgPool,
    id: Uuid,
    update: &ClientUpdate,
) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        r#"
        UPDATE clients
        SET age = COALESCE($2, age),
            gender = COALESCE($3, gender),
            height = COALESCE($4, height),
            weight = COALESCE($5, weight),
            fitness_level = COALESCE($6, fitness_level),
            goals = COALESCE($7, goals),
            medical_conditions = COALESCE($8, medical_conditions),
            preferences = COALESCE($9, preferences),
            phone = COALESCE($10, phone),
            emergency_contact = COALESCE($11, emergency_contact),
            emergency_phone = COALESCE($12, emergency_phone),
            is_active = COALESCE($13, is_active),
            updated_at = $14
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(update.age)
    .bind(&update.gender)
    .bind(update.height)
    .bind(update.weight)
    .bind(update.fitness_level)
    .bind(&update.goals)
    .bind(&update.medical_conditions)
    .bind(&update.preferences)
    .bind(&update.phone)
    .bind(&update.emergency_contact)
    .bind(&update.emergency_phone)
    .bind(update.is_active)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Hard delete; dependent rows (programs, progress, payments, ...) go with
/// the client via the cascade constraints.
#[tracing::instrument(name = "Delete client", skip(pool))]
pub async fn delete_client(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Clients of a trainer with at least one workout log since `since`.
pub async fn count_active_since(
    pool: &PgPool,
    trainer_id: Uuid,
    since: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(DISTINCT c.id)
        FROM clients c
        JOIN workout_logs w ON w.client_id = c.id
        WHERE c.trainer_id = $1 AND w.date >= $2
        "#,
    )
    .bind(trainer_id)
    .bind(since)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// New clients of a trainer created within [from, to).
pub async fn count_created_between(
    pool: &PgPool,
    trainer_id: Uuid,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM clients WHERE trainer_id = $1 AND created_at >= $2 AND created_at < $3",
    )
    .bind(trainer_id)
    .bind(from)
    .bind(to)
    .fetch_one(pool)
    .await?;
    Ok(count)
}
