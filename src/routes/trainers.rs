use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::trainer_handler;
use crate::models::trainer::{TrainerCreate, TrainerUpdate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_trainer)
        .service(list_trainers)
        .service(get_trainer)
        .service(update_trainer)
        .service(delete_trainer);
}

#[post("/trainers")]
async fn create_trainer(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    trainer_form: web::Json<TrainerCreate>,
) -> Result<HttpResponse, ApiError> {
    trainer_handler::create_trainer(pool, claims, trainer_form).await
}

#[get("/trainers")]
async fn list_trainers(
    pool: web::Data<PgPool>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    trainer_handler::list_trainers(pool, pagination).await
}

#[get("/trainers/{trainer_id}")]
async fn get_trainer(
    pool: web::Data<PgPool>,
    trainer_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    trainer_handler::get_trainer(pool, trainer_id).await
}

#[put("/trainers/{trainer_id}")]
async fn update_trainer(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    trainer_id: web::Path<Uuid>,
    update: web::Json<TrainerUpdate>,
) -> Result<HttpResponse, ApiError> {
    trainer_handler::update_trainer(pool, claims, trainer_id, update).await
}

#[delete("/trainers/{trainer_id}")]
async fn delete_trainer(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    trainer_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    trainer_handler::delete_trainer(pool, claims, trainer_id).await
}
