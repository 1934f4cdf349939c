use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::user::RegistrationRequest;

#[tracing::instrument(
    name = "Register a new account",
    skip(registration, pool),
    fields(email = %registration.email)
)]
pub async fn register_user(
    registration: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    // Exact-match duplicate check; emails are not normalized
    if db::users::get_by_email(&pool, &registration.email)
        .await?
        .is_some()
    {
        return Err(ApiError::conflict("User with this email already exists"));
    }

    let user = db::users::insert_user(&pool, &registration).await?;
    tracing::info!("Registered user {}", user.id);
    Ok(HttpResponse::Created().json(user))
}
