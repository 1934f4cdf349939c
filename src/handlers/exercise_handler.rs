use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::exercise::{ExerciseCreate, ExerciseFilter, ExerciseUpdate};
use crate::utils::identity::{can_manage_catalog, resolve_user};
use crate::utils::muscle_groups::distinct_muscle_groups;
use crate::utils::pagination::Pagination;

#[tracing::instrument(name = "Create exercise", skip(pool, claims, exercise_form), fields(name = %exercise_form.name))]
pub async fn create_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    exercise_form: web::Json<ExerciseCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    if !can_manage_catalog(&user) {
        return Err(ApiError::forbidden(
            "Only trainers can manage the exercise library",
        ));
    }

    let exercise = db::exercises::insert_exercise(&pool, &exercise_form).await?;
    Ok(HttpResponse::Created().json(exercise))
}

#[tracing::instrument(name = "List exercises", skip(pool))]
pub async fn list_exercises(
    pool: web::Data<PgPool>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let (skip, limit) = pagination.bounds();
    let exercises = db::exercises::list_exercises(&pool, skip, limit).await?;
    Ok(HttpResponse::Ok().json(exercises))
}

/// Any combination of the optional predicates; active rows only.
#[tracing::instrument(name = "Search exercises", skip(pool, filter))]
pub async fn search_exercises(
    pool: web::Data<PgPool>,
    filter: web::Query<ExerciseFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let (skip, limit) = pagination.bounds();
    let exercises = db::exercises::search_exercises(&pool, &filter, skip, limit).await?;
    Ok(HttpResponse::Ok().json(exercises))
}

#[tracing::instrument(name = "List exercise categories", skip(pool))]
pub async fn list_categories(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let categories = db::exercises::distinct_categories(&pool).await?;
    Ok(HttpResponse::Ok().json(categories))
}

#[tracing::instrument(name = "List muscle groups", skip(pool))]
pub async fn list_muscle_groups(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let values = db::exercises::muscle_group_values(&pool).await?;
    Ok(HttpResponse::Ok().json(distinct_muscle_groups(values)))
}

#[tracing::instrument(name = "Get exercise", skip(pool))]
pub async fn get_exercise(
    pool: web::Data<PgPool>,
    exercise_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let exercise = db::exercises::get_exercise(&pool, *exercise_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Exercise not found"))?;
    Ok(HttpResponse::Ok().json(exercise))
}

#[tracing::instrument(name = "Update exercise", skip(pool, claims, update))]
pub async fn update_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    exercise_id: web::Path<Uuid>,
    update: web::Json<ExerciseUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    if !can_manage_catalog(&user) {
        return Err(ApiError::forbidden(
            "Only trainers can manage the exercise library",
        ));
    }

    let exercise = db::exercises::update_exercise(&pool, *exercise_id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Exercise not found"))?;
    Ok(HttpResponse::Ok().json(exercise))
}

#[tracing::instrument(name = "Delete exercise", skip(pool, claims))]
pub async fn delete_exercise(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    exercise_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    if !can_manage_catalog(&user) {
        return Err(ApiError::forbidden(
            "Only trainers can manage the exercise library",
        ));
    }

    if !db::exercises::delete_exercise(&pool, *exercise_id).await? {
        return Err(ApiError::not_found("Exercise not found"));
    }
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Exercise deleted")))
}
