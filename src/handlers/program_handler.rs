use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::program::{
    Program, ProgramCreate, ProgramExerciseCreate, ProgramExerciseUpdate, ProgramUpdate,
    ProgramWithExercises,
};
use crate::models::trainer::Trainer;
use crate::models::user::User;
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};
use crate::utils::pagination::Pagination;

/// Load a program and verify the caller is its owning trainer.
async fn load_owned_program(
    pool: &PgPool,
    user: &User,
    program_id: Uuid,
) -> Result<(Program, Trainer), ApiError> {
    let trainer = require_trainer(pool, user).await?;
    let program = db::programs::get_program(pool, program_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Program not found"))?;
    if program.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Program belongs to another trainer"));
    }
    Ok((program, trainer))
}

#[tracing::instrument(name = "Create program", skip(pool, claims, program_form), fields(name = %program_form.name))]
pub async fn create_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_form: web::Json<ProgramCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    // The target client must belong to the calling trainer
    let client = db::clients::get_client(&pool, program_form.client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    if client.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }

    // Reject assignments to unknown exercises before writing anything
    for exercise in &program_form.exercises {
        if db::exercises::get_exercise(&pool, exercise.exercise_id)
            .await?
            .is_none()
        {
            return Err(ApiError::not_found("Exercise not found"));
        }
    }

    let program = db::programs::create_program(&pool, trainer.id, &program_form).await?;
    Ok(HttpResponse::Created().json(program))
}

#[tracing::instrument(name = "List programs", skip(pool, claims))]
pub async fn list_programs(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let programs = db::programs::list_by_trainer(&pool, trainer.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(programs))
}

#[tracing::instrument(name = "Get program with exercises", skip(pool, claims))]
pub async fn get_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let program = db::programs::get_program(&pool, *program_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Program not found"))?;

    // Owning trainer or the assigned client may read
    load_authorized_client(&pool, &user, program.client_id).await?;

    let exercises = db::programs::get_exercises(&pool, program.id).await?;
    Ok(HttpResponse::Ok().json(ProgramWithExercises { program, exercises }))
}

#[tracing::instrument(name = "List client programs", skip(pool, claims))]
pub async fn list_client_programs(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let programs = db::programs::list_by_client(&pool, client.id).await?;
    Ok(HttpResponse::Ok().json(programs))
}

#[tracing::instrument(name = "Update program", skip(pool, claims, update))]
pub async fn update_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
    update: web::Json<ProgramUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (program, _) = load_owned_program(&pool, &user, *program_id).await?;

    let updated = db::programs::update_program(&pool, program.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Program not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete program", skip(pool, claims))]
pub async fn delete_program(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (program, _) = load_owned_program(&pool, &user, *program_id).await?;

    db::programs::delete_program(&pool, program.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Program deleted")))
}

#[tracing::instrument(name = "Add exercise to program", skip(pool, claims, exercise_form))]
pub async fn add_program_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    program_id: web::Path<Uuid>,
    exercise_form: web::Json<ProgramExerciseCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (program, _) = load_owned_program(&pool, &user, *program_id).await?;

    if db::exercises::get_exercise(&pool, exercise_form.exercise_id)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found("Exercise not found"));
    }

    let assignment = db::programs::add_exercise(&pool, program.id, &exercise_form).await?;
    Ok(HttpResponse::Created().json(assignment))
}

#[tracing::instrument(name = "Update program exercise", skip(pool, claims, update))]
pub async fn update_program_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
    update: web::Json<ProgramExerciseUpdate>,
) -> Result<HttpResponse, ApiError> {
    let (program_id, program_exercise_id) = path.into_inner();
    let user = resolve_user(&pool, &claims).await?;
    load_owned_program(&pool, &user, program_id).await?;

    let assignment = db::programs::update_exercise(&pool, program_exercise_id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Program exercise not found"))?;
    Ok(HttpResponse::Ok().json(assignment))
}

/// Removal is keyed on (program, exercise); the response reports whether a
/// row was actually removed rather than erroring on absence.
#[tracing::instrument(name = "Remove exercise from program", skip(pool, claims))]
pub async fn remove_program_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (program_id, exercise_id) = path.into_inner();
    let user = resolve_user(&pool, &claims).await?;
    load_owned_program(&pool, &user, program_id).await?;

    let removed = db::programs::remove_exercise(&pool, program_id, exercise_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "removed": removed })))
}
