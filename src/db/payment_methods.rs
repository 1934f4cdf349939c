use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payment::{PaymentMethod, PaymentMethodCreate};

#[tracing::instrument(name = "Insert payment method", skip(pool, method))]
pub async fn insert_payment_method(
    pool: &PgPool,
    method: &PaymentMethodCreate,
) -> Result<PaymentMethod, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, PaymentMethod>(
        r#"
        INSERT INTO payment_methods (
            id, client_id, stripe_payment_method_id, method_type, card_brand,
            card_last_four, card_exp_month, card_exp_year, is_default,
            is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, TRUE, $9, $9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(method.client_id)
    .bind(&method.stripe_payment_method_id)
    .bind(&method.method_type)
    .bind(&method.card_brand)
    .bind(&method.card_last_four)
    .bind(method.card_exp_month)
    .bind(method.card_exp_year)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_payment_method(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<PaymentMethod>, sqlx::Error> {
    sqlx::query_as::<_, PaymentMethod>("SELECT * FROM payment_methods WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_active_by_client(
    pool: &PgPool,
    client_id: Uuid,
) -> Result<Vec<PaymentMethod>, sqlx::Error> {
    sqlx::query_as::<_, PaymentMethod>(
        "SELECT * FROM payment_methods WHERE client_id = $1 AND is_active = TRUE ORDER BY created_at",
    )
    .bind(client_id)
    .fetch_all(pool)
    .await
}

pub async fn get_default(
    pool: &PgPool,
    client_id: Uuid,
) -> Result<Option<PaymentMethod>, sqlx::Error> {
    sqlx::query_as::<_, PaymentMethod>(
        r#"
        SELECT * FROM payment_methods
        WHERE client_id = $1 AND is_default = TRUE AND is_active = TRUE
        "#,
    )
    .bind(client_id)
    .fetch_optional(pool)
    .await
}

/// Clear-then-set runs inside one transaction so there is never a window
/// with zero or two defaults under concurrent calls.
#[tracing::instrument(name = "Set default payment method", skip(pool))]
pub async fn set_default(
    pool: &PgPool,
    client_id: Uuid,
    payment_method_id: Uuid,
) -> Result<Option<PaymentMethod>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("UPDATE payment_methods SET is_default = FALSE WHERE client_id = $1 AND id != $2")
        .bind(client_id)
        .bind(payment_method_id)
        .execute(&mut *tx)
        .await?;

    let method = sqlx::query_as::<_, PaymentMethod>(
        r#"
        UPDATE payment_methods
        SET is_default = TRUE,
            updated_at = $3
        WHERE id = $1 AND client_id = $2
        RETURNING *
        "#,
    )
    .bind(payment_method_id)
    .bind(client_id)
    .bind(Utc::now())
    .fetch_optional(&mut *tx)
    .await?;

    // Unknown target: roll the clearing back rather than leaving no default
    if method.is_none() {
        tx.rollback().await?;
        return Ok(None);
    }

    tx.commit().await?;
    Ok(method)
}

#[tracing::instrument(name = "Delete payment method", skip(pool))]
pub async fn delete_payment_method(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM payment_methods WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
