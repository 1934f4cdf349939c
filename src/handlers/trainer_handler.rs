use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::trainer::{TrainerCreate, TrainerUpdate};
use crate::utils::identity::resolve_user;
use crate::utils::pagination::Pagination;

#[tracing::instrument(name = "Create trainer profile", skip(pool, claims, trainer_form))]
pub async fn create_trainer(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    trainer_form: web::Json<TrainerCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    if !user.is_trainer {
        return Err(ApiError::forbidden(
            "Account does not have the trainer role",
        ));
    }
    // One profile per account
    if db::trainers::get_by_user_id(&pool, user.id).await?.is_some() {
        return Err(ApiError::conflict(
            "Trainer profile already exists for this account",
        ));
    }

    let trainer = db::trainers::insert_trainer(&pool, user.id, &trainer_form).await?;
    Ok(HttpResponse::Created().json(trainer))
}

#[tracing::instrument(name = "List trainers", skip(pool))]
pub async fn list_trainers(
    pool: web::Data<PgPool>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let (skip, limit) = pagination.bounds();
    let trainers = db::trainers::list_trainers(&pool, skip, limit).await?;
    Ok(HttpResponse::Ok().json(trainers))
}

#[tracing::instrument(name = "Get trainer", skip(pool))]
pub async fn get_trainer(
    pool: web::Data<PgPool>,
    trainer_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let trainer = db::trainers::get_trainer(&pool, *trainer_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Trainer not found"))?;
    Ok(HttpResponse::Ok().json(trainer))
}

#[tracing::instrument(name = "Update trainer profile", skip(pool, claims, update))]
pub async fn update_trainer(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    trainer_id: web::Path<Uuid>,
    update: web::Json<TrainerUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = db::trainers::get_trainer(&pool, *trainer_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Trainer not found"))?;

    if trainer.user_id != user.id && !user.is_superuser {
        return Err(ApiError::forbidden("Cannot update another trainer's profile"));
    }

    let updated = db::trainers::update_trainer(&pool, trainer.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Trainer not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete trainer profile", skip(pool, claims))]
pub async fn delete_trainer(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    trainer_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = db::trainers::get_trainer(&pool, *trainer_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Trainer not found"))?;

    if trainer.user_id != user.id && !user.is_superuser {
        return Err(ApiError::forbidden("Cannot delete another trainer's profile"));
    }

    db::trainers::delete_trainer(&pool, trainer.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Trainer profile deleted")))
}
