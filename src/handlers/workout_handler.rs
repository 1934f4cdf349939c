use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::user::User;
use crate::models::workout::{WorkoutLog, WorkoutLogCreate, WorkoutLogUpdate, WorkoutLogWithExercises};
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};
use crate::utils::pagination::Pagination;
use crate::utils::workout_stats::compute_workout_stats;

#[derive(Debug, Deserialize)]
pub struct StatsWindow {
    pub days: Option<i64>,
}

async fn load_owned_workout(
    pool: &PgPool,
    user: &User,
    workout_id: Uuid,
) -> Result<WorkoutLog, ApiError> {
    let trainer = require_trainer(pool, user).await?;
    let log = db::workouts::get_workout_log(pool, workout_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout log not found"))?;
    if log.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Workout log belongs to another trainer"));
    }
    Ok(log)
}

#[tracing::instrument(name = "Create workout log", skip(pool, claims, log_form))]
pub async fn create_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    log_form: web::Json<WorkoutLogCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let client = db::clients::get_client(&pool, log_form.client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    if client.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }

    for exercise in &log_form.exercises {
        if db::exercises::get_exercise(&pool, exercise.exercise_id)
            .await?
            .is_none()
        {
            return Err(ApiError::not_found("Exercise not found"));
        }
    }

    let log = db::workouts::create_workout_log(&pool, trainer.id, &log_form).await?;
    Ok(HttpResponse::Created().json(log))
}

#[tracing::instrument(name = "Get workout log with exercises", skip(pool, claims))]
pub async fn get_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let workout = db::workouts::get_workout_log(&pool, *workout_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout log not found"))?;

    load_authorized_client(&pool, &user, workout.client_id).await?;

    let exercises = db::workouts::get_exercise_logs(&pool, workout.id).await?;
    Ok(HttpResponse::Ok().json(WorkoutLogWithExercises { workout, exercises }))
}

#[tracing::instrument(name = "List client workout logs", skip(pool, claims))]
pub async fn list_client_workouts(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let (skip, limit) = pagination.bounds();
    let logs = db::workouts::list_by_client(&pool, client.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(logs))
}

/// Filtered aggregate over the trailing window of completed sessions.
#[tracing::instrument(name = "Get workout stats", skip(pool, claims))]
pub async fn get_workout_stats(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    window: web::Query<StatsWindow>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let days = window.days.unwrap_or(30);
    if days < 0 {
        return Err(ApiError::bad_request("days must not be negative"));
    }

    let since = Utc::now() - Duration::days(days);
    let workouts = db::workouts::completed_since(&pool, client.id, since).await?;
    Ok(HttpResponse::Ok().json(compute_workout_stats(&workouts, days)))
}

#[tracing::instrument(name = "Update workout log", skip(pool, claims, update))]
pub async fn update_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_id: web::Path<Uuid>,
    update: web::Json<WorkoutLogUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let workout = load_owned_workout(&pool, &user, *workout_id).await?;

    let updated = db::workouts::update_workout_log(&pool, workout.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Workout log not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete workout log", skip(pool, claims))]
pub async fn delete_workout_log(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    workout_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let workout = load_owned_workout(&pool, &user, *workout_id).await?;

    db::workouts::delete_workout_log(&pool, workout.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Workout log deleted")))
}
