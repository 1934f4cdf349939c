use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::exercise_handler;
use crate::models::exercise::{ExerciseCreate, ExerciseFilter, ExerciseUpdate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    // literal segments before the {exercise_id} matcher
    cfg.service(search_exercises)
        .service(list_categories)
        .service(list_muscle_groups)
        .service(create_exercise)
        .service(list_exercises)
        .service(get_exercise)
        .service(update_exercise)
        .service(delete_exercise);
}

#[post("/exercises")]
async fn create_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    exercise_form: web::Json<ExerciseCreate>,
) -> Result<HttpResponse, ApiError> {
    exercise_handler::create_exercise(pool, claims, exercise_form).await
}

#[get("/exercises")]
async fn list_exercises(
    pool: web::Data<PgPool>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    exercise_handler::list_exercises(pool, pagination).await
}

#[get("/exercises/search")]
async fn search_exercises(
    pool: web::Data<PgPool>,
    filter: web::Query<ExerciseFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    exercise_handler::search_exercises(pool, filter, pagination).await
}

#[get("/exercises/categories")]
async fn list_categories(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    exercise_handler::list_categories(pool).await
}

#[get("/exercises/muscle-groups")]
async fn list_muscle_groups(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    exercise_handler::list_muscle_groups(pool).await
}

#[get("/exercises/{exercise_id}")]
async fn get_exercise(
    pool: web::Data<PgPool>,
    exercise_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    exercise_handler::get_exercise(pool, exercise_id).await
}

#[put("/exercises/{exercise_id}")]
async fn update_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    exercise_id: web::Path<Uuid>,
    update: web::Json<ExerciseUpdate>,
) -> Result<HttpResponse, ApiError> {
    exercise_handler::update_exercise(pool, claims, exercise_id, update).await
}

#[delete("/exercises/{exercise_id}")]
async fn delete_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    exercise_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    exercise_handler::delete_exercise(pool, claims, exercise_id).await
}
