use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::program_handler;
use crate::models::program::{ProgramCreate, ProgramExerciseCreate, ProgramExerciseUpdate, ProgramUpdate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_client_programs)
        .service(create_program)
        .service(list_programs)
        .service(get_program)
        .service(update_program)
        .service(delete_program)
        .service(add_program_exercise)
        .service(update_program_exercise)
        .service(remove_program_exercise);
}

#[post("/programs")]
async fn create_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_form: web::Json<ProgramCreate>,
) -> Result<HttpResponse, ApiError> {
    program_handler::create_program(pool, claims, program_form).await
}

#[get("/programs")]
async fn list_programs(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    program_handler::list_programs(pool, claims, pagination).await
}

#[get("/programs/client/{client_id}")]
async fn list_client_programs(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    program_handler::list_client_programs(pool, claims, client_id).await
}

#[get("/programs/{program_id}")]
async fn get_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    program_handler::get_program(pool, claims, program_id).await
}

#[put("/programs/{program_id}")]
async fn update_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
    update: web::Json<ProgramUpdate>,
) -> Result<HttpResponse, ApiError> {
    program_handler::update_program(pool, claims, program_id, update).await
}

#[delete("/programs/{program_id}")]
async fn delete_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    program_handler::delete_program(pool, claims, program_id).await
}

#[post("/programs/{program_id}/exercises")]
async fn add_program_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
    exercise_form: web::Json<ProgramExerciseCreate>,
) -> Result<HttpResponse, ApiError> {
    program_handler::add_program_exercise(pool, claims, program_id, exercise_form).await
}

#[put("/programs/{program_id}/exercises/{program_exercise_id}")]
async fn update_program_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
    update: web::Json<ProgramExerciseUpdate>,
) -> Result<HttpResponse, ApiError> {
    program_handler::update_program_exercise(pool, claims, path, update).await
}

#[delete("/programs/{program_id}/exercises/{exercise_id}")]
async fn remove_program_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    program_handler::remove_program_exercise(pool, claims, path).await
}
