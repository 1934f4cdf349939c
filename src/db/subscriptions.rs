use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payment::{Subscription, SubscriptionCreate};

#[tracing::instrument(name = "Insert subscription", skip(pool, subscription))]
pub async fn insert_subscription(
    pool: &PgPool,
    trainer_id: Uuid,
    subscription: &SubscriptionCreate,
) -> Result<Subscription, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Subscription>(
        r#"
        INSERT INTO subscriptions (
            id, client_id, trainer_id, plan_name, amount, currency, billing_cycle,
            status, current_period_start, current_period_end, trial_end,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8, $9, $10, $11, $11)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(subscription.client_id)
    .bind(trainer_id)
    .bind(&subscription.plan_name)
    .bind(subscription.amount)
    .bind(subscription.currency.as_deref().unwrap_or("USD"))
    .bind(subscription.billing_cycle)
    .bind(subscription.current_period_start)
    .bind(subscription.current_period_end)
    .bind(subscription.trial_end)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_subscription(pool: &PgPool, id: Uuid) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>("SELECT * FROM subscriptions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_trainer(
    pool: &PgPool,
    trainer_id: Uuid,
    skip: i64,
    limit: i64,
) -> Result<Vec<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        r#"
        SELECT * FROM subscriptions
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

pub async fn list_active_by_client(
    pool: &PgPool,
    client_id: Uuid,
) -> Result<Vec<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE client_id = $1 AND status = 'active'",
    )
    .bind(client_id)
    .fetch_all(pool)
    .await
}

/// The one explicit transition: status becomes cancelled and cancelled_at
/// is stamped.
#[tracing::instrument(name = "Cancel subscription", skip(pool))]
pub async fn cancel_subscription(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        r#"
        UPDATE subscriptions
        SET status = 'cancelled',
            cancelled_at = $2,
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

/// Webhook path: processor-side cancellation keyed by the external id.
#[tracing::instrument(name = "Cancel subscription by external id", skip(pool))]
pub async fn cancel_by_stripe_id(
    pool: &PgPool,
    stripe_subscription_id: &str,
) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        r#"
        UPDATE subscriptions
        SET status = 'cancelled',
            cancelled_at = $2,
            updated_at = $2
        WHERE stripe_subscription_id = $1
        RETURNING *
        "#,
    )
    .bind(stripe_subscription_id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Webhook path: processor confirmed creation, mark active.
#[tracing::instrument(name = "Activate subscription by external id", skip(pool))]
pub async fn activate_by_stripe_id(
    pool: &PgPool,
    stripe_subscription_id: &str,
) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        r#"
        UPDATE subscriptions
        SET status = 'active',
            updated_at = $2
        WHERE stripe_subscription_id = $1
        RETURNING *
        "#,
    )
    .bind(stripe_subscription_id)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}
