use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payment::{Payment, PaymentCreate, PaymentUpdate};

#[tracing::instrument(name = "Insert payment", skip(pool, payment))]
pub async fn insert_payment(
    pool: &PgPool,
    trainer_id: Uuid,
    payment: &PaymentCreate,
) -> Result<Payment, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Payment>(
        r#"
        INSERT INTO payments (
            id, client_id, trainer_id, amount, currency, description,
            status, payment_method, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $8, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(payment.client_id)
    .bind(trainer_id)
    .bind(payment.amount)
    .bind(payment.currency.as_deref().unwrap_or("USD"))
    .bind(&payment.description)
    .bind(&payment.payment_method)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_payment(pool: &PgPool, id: Uuid) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_client(
    pool: &PgPool,
    client_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        r#"
        SELECT * FROM payments
        WHERE client_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(client_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

pub async fn list_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        r#"
        SELECT * FROM payments
        WHERE trainer_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(trainer_id)
    .bind(limit)
    .bind(skip)
    .fetch_all(pool)
    .await
}

#[tracing::instrument(name = "Update payment", skip(pool, update))]
pub async fn update_payment(
    pool: &PgPool,
    id: Uuid,
    update: &PaymentUpdate,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        r#"
        UPDATE payments
        SET description = COALESCE($2, description),
            status = COALESCE($3, status),
            stripe_payment_intent_id = COALESCE($4, stripe_payment_intent_id),
            stripe_charge_id = COALESCE($5, stripe_charge_id),
            stripe_customer_id = COALESCE($6, stripe_customer_id),
            payment_method = COALESCE($7, payment_method),
            paid_at = COALESCE($8, paid_at),
            updated_at = $9
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&update.description)
    .bind(update.status)
    .bind(&update.stripe_payment_intent_id)
    .bind(&update.stripe_charge_id)
    .bind(&update.stripe_customer_id)
    .bind(&update.payment_method)
    .bind(update.paid_at)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Webhook path: the processor confirmed the intent, so the matching
/// payment becomes completed with paid_at stamped.
#[tracing::instrument(name = "Complete payment by intent", skip(pool))]
pub async fn complete_by_intent(
    pool: &PgPool,
    stripe_payment_intent_id: &str,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        r#"
        UPDATE payments
        SET status = 'completed',
            paid_at = $2,
            updated_at = $2
        WHERE stripe_payment_intent_id = $1
        RETURNING *
        "#,
    )
    .bind(stripe_payment_intent_id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Attach the fabricated/processor identifiers after intent creation.
pub async fn set_intent_id(
    pool: &PgPool,
    id: Uuid,
    stripe_payment_intent_id: &str,
) -> Result<Option<Payment>, sqlx::Error> {
    sqlx::query_as::<_, Payment>(
        r#"
        UPDATE payments
        SET stripe_payment_intent_id = $2,
            updated_at = $3
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(stripe_payment_intent_id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete payment", skip(pool))]
pub async fn delete_payment(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM payments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Completed revenue for a trainer since `since`, in minor units.
pub async fn sum_completed_since(
    pool: &PgPool,
    trainer_id: Uuid,
    since: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let (sum,): (i64,) = sqlx::query_as(
        r#"
        SELECT COALESCE(SUM(amount), 0)::bigint
        FROM payments
        WHERE trainer_id = $1 AND created_at >= $2 AND status = 'completed'
        "#,
    )
    .bind(trainer_id)
    .bind(since)
    .fetch_one(pool)
    .await?;
    Ok(sum)
}
