use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::progress::{DateRange, Progress, ProgressCreate, ProgressUpdate};
use crate::models::user::User;
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};
use crate::utils::pagination::Pagination;

async fn load_owned_progress(
    pool: &PgPool,
    user: &User,
    progress_id: Uuid,
) -> Result<Progress, ApiError> {
    let trainer = require_trainer(pool, user).await?;
    let entry = db::progress::get_progress(pool, progress_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Progress entry not found"))?;
    if entry.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Progress entry belongs to another trainer"));
    }
    Ok(entry)
}

#[tracing::instrument(name = "Create progress entry", skip(pool, claims, entry_form))]
pub async fn create_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    entry_form: web::Json<ProgressCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let client = db::clients::get_client(&pool, entry_form.client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    if client.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }

    let entry = db::progress::insert_progress(&pool, trainer.id, &entry_form).await?;
    Ok(HttpResponse::Created().json(entry))
}

#[tracing::instrument(name = "Get progress entry", skip(pool, claims))]
pub async fn get_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    progress_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let entry = db::progress::get_progress(&pool, *progress_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Progress entry not found"))?;

    load_authorized_client(&pool, &user, entry.client_id).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[tracing::instrument(name = "List client progress", skip(pool, claims))]
pub async fn list_client_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let (skip, limit) = pagination.bounds();
    let entries = db::progress::list_by_client(&pool, client.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[tracing::instrument(name = "Get latest progress", skip(pool, claims))]
pub async fn get_latest_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let entry = db::progress::get_latest(&pool, client.id)
        .await?
        .ok_or_else(|| ApiError::not_found("No progress recorded for this client"))?;
    Ok(HttpResponse::Ok().json(entry))
}

#[tracing::instrument(name = "List progress by date range", skip(pool, claims, range))]
pub async fn list_progress_by_range(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    range: web::Query<DateRange>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let entries =
        db::progress::list_by_date_range(&pool, client.id, range.start_date, range.end_date)
            .await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[tracing::instrument(name = "Update progress entry", skip(pool, claims, update))]
pub async fn update_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    progress_id: web::Path<Uuid>,
    update: web::Json<ProgressUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let entry = load_owned_progress(&pool, &user, *progress_id).await?;

    let updated = db::progress::update_progress(&pool, entry.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Progress entry not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete progress entry", skip(pool, claims))]
pub async fn delete_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    progress_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let entry = load_owned_progress(&pool, &user, *progress_id).await?;

    db::progress::delete_progress(&pool, entry.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Progress entry deleted")))
}
