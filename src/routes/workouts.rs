use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::workout_handler::{self, StatsWindow};
use crate::models::workout::{WorkoutLogCreate, WorkoutLogUpdate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_client_workouts)
        .service(get_workout_stats)
        .service(create_workout_log)
        .service(get_workout_log)
        .service(update_workout_log)
        .service(delete_workout_log);
}

#[post("/workouts")]
async fn create_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    log_form: web::Json<WorkoutLogCreate>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::create_workout_log(pool, claims, log_form).await
}

#[get("/workouts/client/{client_id}")]
async fn list_client_workouts(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::list_client_workouts(pool, claims, client_id, pagination).await
}

#[get("/workouts/stats/{client_id}")]
async fn get_workout_stats(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    window: web::Query<StatsWindow>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::get_workout_stats(pool, claims, client_id, window).await
}

#[get("/workouts/{workout_id}")]
async fn get_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::get_workout_log(pool, claims, workout_id).await
}

#[put("/workouts/{workout_id}")]
async fn update_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_id: web::Path<Uuid>,
    update: web::Json<WorkoutLogUpdate>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::update_workout_log(pool, claims, workout_id, update).await
}

#[delete("/workouts/{workout_id}")]
async fn delete_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    workout_handler::delete_workout_log(pool, claims, workout_id).await
}
