use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::auth::jwt::{generate_token, Claims};
use crate::config::jwt::JwtSettings;
use crate::db;
use crate::errors::ApiError;
use crate::models::user::{LoginRequest, LoginResponse};
use crate::utils::identity::resolve_user;
use crate::utils::password::verify_password;

#[tracing::instrument(
    name = "Login attempt",
    skip(login_form, pool, jwt_settings),
    fields(email = %login_form.email)
)]
pub async fn login_user(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    let user = match db::users::get_by_email(&pool, &login_form.email).await? {
        Some(user) => user,
        None => {
            tracing::info!("Unknown email");
            return Err(ApiError::unauthorized("Incorrect email or password"));
        }
    };

    if !verify_password(login_form.password.expose_secret(), &user.password_hash) {
        tracing::info!("Password mismatch");
        return Err(ApiError::unauthorized("Incorrect email or password"));
    }

    // Activity is only checked here, at login. Already-issued tokens stay
    // valid until expiry even if the account is deactivated afterwards.
    if !user.is_active {
        return Err(ApiError::bad_request("Inactive user"));
    }

    let token = generate_token(&user.email, &jwt_settings).map_err(|e| {
        tracing::error!("Error generating token: {:?}", e);
        ApiError::Internal("token generation failed".to_string())
    })?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

#[tracing::instrument(name = "Get current account", skip(pool, claims))]
pub async fn me(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    Ok(HttpResponse::Ok().json(user))
}
