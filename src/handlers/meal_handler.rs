use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::meal::{DietaryFilter, Meal, MealCreate, MealUpdate};
use crate::models::trainer::Trainer;
use crate::models::user::User;
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};
use crate::utils::pagination::Pagination;

#[derive(Debug, Deserialize)]
pub struct MealListFilter {
    pub is_template: Option<bool>,
}

async fn load_owned_meal(
    pool: &PgPool,
    user: &User,
    meal_id: Uuid,
) -> Result<(Meal, Trainer), ApiError> {
    let trainer = require_trainer(pool, user).await?;
    let meal = db::meals::get_meal(pool, meal_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Meal not found"))?;
    if meal.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Meal belongs to another trainer"));
    }
    Ok((meal, trainer))
}

#[tracing::instrument(name = "Create meal", skip(pool, claims, meal_form), fields(name = %meal_form.name))]
pub async fn create_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_form: web::Json<MealCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    // An assigned meal must target one of the caller's clients
    if let Some(client_id) = meal_form.client_id {
        let client = db::clients::get_client(&pool, client_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Client not found"))?;
        if client.trainer_id != trainer.id {
            return Err(ApiError::forbidden("Client belongs to another trainer"));
        }
    }

    let meal = db::meals::insert_meal(&pool, trainer.id, &meal_form).await?;
    Ok(HttpResponse::Created().json(meal))
}

#[tracing::instrument(name = "List meals", skip(pool, claims))]
pub async fn list_meals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    filter: web::Query<MealListFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let meals =
        db::meals::list_by_trainer(&pool, trainer.id, filter.is_template, skip, limit).await?;
    Ok(HttpResponse::Ok().json(meals))
}

#[tracing::instrument(name = "List meal templates", skip(pool, claims))]
pub async fn list_templates(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let meals = db::meals::list_by_trainer(&pool, trainer.id, Some(true), skip, limit).await?;
    Ok(HttpResponse::Ok().json(meals))
}

#[tracing::instrument(name = "List client meals", skip(pool, claims))]
pub async fn list_client_meals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let (skip, limit) = pagination.bounds();
    let meals = db::meals::list_by_client(&pool, client.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(meals))
}

#[tracing::instrument(name = "Search meals by dietary restrictions", skip(pool, claims, filter))]
pub async fn search_meals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    filter: web::Query<DietaryFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let meals =
        db::meals::search_by_dietary_restrictions(&pool, trainer.id, &filter, skip, limit).await?;
    Ok(HttpResponse::Ok().json(meals))
}

#[tracing::instrument(name = "Get meal", skip(pool, claims))]
pub async fn get_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let meal = db::meals::get_meal(&pool, *meal_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Meal not found"))?;

    // Owning trainer always; assigned client may read their own meals
    if user.is_trainer {
        let trainer = require_trainer(&pool, &user).await?;
        if meal.trainer_id != trainer.id {
            return Err(ApiError::forbidden("Meal belongs to another trainer"));
        }
    } else {
        let client_id = meal
            .client_id
            .ok_or_else(|| ApiError::forbidden("Not authorized to access this meal"))?;
        load_authorized_client(&pool, &user, client_id).await?;
    }

    Ok(HttpResponse::Ok().json(meal))
}

#[tracing::instrument(name = "Update meal", skip(pool, claims, update))]
pub async fn update_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_id: web::Path<Uuid>,
    update: web::Json<MealUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (meal, _) = load_owned_meal(&pool, &user, *meal_id).await?;

    let updated = db::meals::update_meal(&pool, meal.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Meal not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete meal", skip(pool, claims))]
pub async fn delete_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (meal, _) = load_owned_meal(&pool, &user, *meal_id).await?;

    db::meals::delete_meal(&pool, meal.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Meal deleted")))
}
