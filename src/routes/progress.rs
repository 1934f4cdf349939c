use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::progress_handler;
use crate::models::progress::{DateRange, ProgressCreate, ProgressUpdate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_client_progress)
        .service(get_latest_progress)
        .service(list_progress_by_range)
        .service(create_progress)
        .service(get_progress)
        .service(update_progress)
        .service(delete_progress);
}

#[post("/progress")]
async fn create_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    entry_form: web::Json<ProgressCreate>,
) -> Result<HttpResponse, ApiError> {
    progress_handler::create_progress(pool, claims, entry_form).await
}

#[get("/progress/client/{client_id}")]
async fn list_client_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    progress_handler::list_client_progress(pool, claims, client_id, pagination).await
}

#[get("/progress/client/{client_id}/latest")]
async fn get_latest_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    progress_handler::get_latest_progress(pool, claims, client_id).await
}

#[get("/progress/client/{client_id}/range")]
async fn list_progress_by_range(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    range: web::Query<DateRange>,
) -> Result<HttpResponse, ApiError> {
    progress_handler::list_progress_by_range(pool, claims, client_id, range).await
}

#[get("/progress/{progress_id}")]
async fn get_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    progress_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    progress_handler::get_progress(pool, claims, progress_id).await
}

#[put("/progress/{progress_id}")]
async fn update_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    progress_id: web::Path<Uuid>,
    update: web::Json<ProgressUpdate>,
) -> Result<HttpResponse, ApiError> {
    progress_handler::update_progress(pool, claims, progress_id, update).await
}

#[delete("/progress/{progress_id}")]
async fn delete_progress(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    progress_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    progress_handler::delete_progress(pool, claims, progress_id).await
}
