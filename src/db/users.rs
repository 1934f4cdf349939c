use chrono::Utc;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{RegistrationRequest, User};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Insert a new user",
    skip(pool, registration),
    fields(email = %registration.email)
)]
pub async fn insert_user(
    pool: &PgPool,
    registration: &RegistrationRequest,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, full_name, is_active, is_superuser, is_trainer, created_at, updated_at)
        VALUES ($1, $2, $3, $4, TRUE, FALSE, $5, $6, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&registration.email)
    .bind(hash_password(registration.password.expose_secret()))
    .bind(&registration.full_name)
    .bind(registration.is_trainer)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Case-sensitive exact match; emails are not normalized at registration,
/// so lookups must not normalize either.
pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

