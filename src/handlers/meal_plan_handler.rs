use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::meal::{MealPlan, MealPlanCreate, MealPlanMealCreate, MealPlanUpdate, MealPlanWithMeals};
use crate::models::user::User;
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};
use crate::utils::pagination::Pagination;

async fn load_owned_plan(
    pool: &PgPool,
    user: &User,
    plan_id: Uuid,
) -> Result<MealPlan, ApiError> {
    let trainer = require_trainer(pool, user).await?;
    let plan = db::meal_plans::get_meal_plan(pool, plan_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Meal plan not found"))?;
    if plan.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Meal plan belongs to another trainer"));
    }
    Ok(plan)
}

#[tracing::instrument(name = "Create meal plan", skip(pool, claims, plan_form), fields(name = %plan_form.name))]
pub async fn create_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_form: web::Json<MealPlanCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let client = db::clients::get_client(&pool, plan_form.client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    if client.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }

    // Schedule entries must reference the trainer's own meals
    for entry in &plan_form.meals {
        let meal = db::meals::get_meal(&pool, entry.meal_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Meal not found"))?;
        if meal.trainer_id != trainer.id {
            return Err(ApiError::forbidden("Meal belongs to another trainer"));
        }
        if !(1..=7).contains(&entry.day_of_week) {
            return Err(ApiError::bad_request("day_of_week must be between 1 and 7"));
        }
    }

    let plan = db::meal_plans::create_meal_plan(&pool, trainer.id, &plan_form).await?;
    Ok(HttpResponse::Created().json(plan))
}

#[tracing::instrument(name = "List meal plans", skip(pool, claims))]
pub async fn list_meal_plans(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let plans = db::meal_plans::list_by_trainer(&pool, trainer.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(plans))
}

#[tracing::instrument(name = "Get meal plan with schedule", skip(pool, claims))]
pub async fn get_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let plan = db::meal_plans::get_meal_plan(&pool, *plan_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Meal plan not found"))?;

    // Owning trainer or the plan's client
    load_authorized_client(&pool, &user, plan.client_id).await?;

    let meals = db::meal_plans::get_schedule(&pool, plan.id).await?;
    Ok(HttpResponse::Ok().json(MealPlanWithMeals { plan, meals }))
}

/// The plan covering today for a client; with overlapping plans the most
/// recently started wins.
#[tracing::instrument(name = "Get client's active meal plan", skip(pool, claims))]
pub async fn get_client_active_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let plan = db::meal_plans::get_client_active_plan(&pool, client.id)
        .await?
        .ok_or_else(|| ApiError::not_found("No active meal plan for this client"))?;
    let meals = db::meal_plans::get_schedule(&pool, plan.id).await?;
    Ok(HttpResponse::Ok().json(MealPlanWithMeals { plan, meals }))
}

#[tracing::instrument(name = "Update meal plan", skip(pool, claims, update))]
pub async fn update_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
    update: web::Json<MealPlanUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let plan = load_owned_plan(&pool, &user, *plan_id).await?;

    let updated = db::meal_plans::update_meal_plan(&pool, plan.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Meal plan not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete meal plan", skip(pool, claims))]
pub async fn delete_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let plan = load_owned_plan(&pool, &user, *plan_id).await?;

    db::meal_plans::delete_meal_plan(&pool, plan.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Meal plan deleted")))
}

#[tracing::instrument(name = "Add meal to plan", skip(pool, claims, entry))]
pub async fn add_meal_to_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
    entry: web::Json<MealPlanMealCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let plan = load_owned_plan(&pool, &user, *plan_id).await?;

    if db::meals::get_meal(&pool, entry.meal_id).await?.is_none() {
        return Err(ApiError::not_found("Meal not found"));
    }
    if !(1..=7).contains(&entry.day_of_week) {
        return Err(ApiError::bad_request("day_of_week must be between 1 and 7"));
    }

    let scheduled = db::meal_plans::add_meal(&pool, plan.id, &entry).await?;
    Ok(HttpResponse::Created().json(scheduled))
}

#[tracing::instrument(name = "Remove meal from plan", skip(pool, claims))]
pub async fn remove_meal_from_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (plan_id, meal_id) = path.into_inner();
    let user = resolve_user(&pool, &claims).await?;
    let plan = load_owned_plan(&pool, &user, plan_id).await?;

    let removed = db::meal_plans::remove_meal(&pool, plan.id, meal_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "removed": removed })))
}
