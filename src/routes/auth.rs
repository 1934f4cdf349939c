use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::config::jwt::JwtSettings;
use crate::errors::ApiError;
use crate::handlers::auth_handler::{login_user, me as me_handler};
use crate::handlers::registration_handler::register_user;
use crate::models::user::{LoginRequest, RegistrationRequest};

#[post("/auth/register")]
async fn register(
    registration: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    register_user(registration, pool).await
}

#[post("/auth/login")]
async fn login(
    login_form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, ApiError> {
    login_user(login_form, pool, jwt_settings).await
}

#[get("/auth/me")]
async fn me(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    me_handler(pool, claims).await
}
