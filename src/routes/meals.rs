use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::meal_handler::{self, MealListFilter};
use crate::handlers::meal_plan_handler;
use crate::models::meal::{DietaryFilter, MealCreate, MealPlanCreate, MealPlanMealCreate, MealPlanUpdate, MealUpdate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    // literal segments (templates, search, plans, client) before {meal_id}
    cfg.service(list_templates)
        .service(search_meals)
        .service(list_client_meals)
        .service(get_client_active_plan)
        .service(create_meal_plan)
        .service(list_meal_plans)
        .service(get_meal_plan)
        .service(update_meal_plan)
        .service(delete_meal_plan)
        .service(add_meal_to_plan)
        .service(remove_meal_from_plan)
        .service(create_meal)
        .service(list_meals)
        .service(get_meal)
        .service(update_meal)
        .service(delete_meal);
}

#[post("/meals")]
async fn create_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_form: web::Json<MealCreate>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::create_meal(pool, claims, meal_form).await
}

#[get("/meals")]
async fn list_meals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    filter: web::Query<MealListFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::list_meals(pool, claims, filter, pagination).await
}

#[get("/meals/templates")]
async fn list_templates(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::list_templates(pool, claims, pagination).await
}

#[get("/meals/search")]
async fn search_meals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    filter: web::Query<DietaryFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::search_meals(pool, claims, filter, pagination).await
}

#[get("/meals/client/{client_id}")]
async fn list_client_meals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::list_client_meals(pool, claims, client_id, pagination).await
}

#[get("/meals/{meal_id}")]
async fn get_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::get_meal(pool, claims, meal_id).await
}

#[put("/meals/{meal_id}")]
async fn update_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_id: web::Path<Uuid>,
    update: web::Json<MealUpdate>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::update_meal(pool, claims, meal_id, update).await
}

#[delete("/meals/{meal_id}")]
async fn delete_meal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    meal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    meal_handler::delete_meal(pool, claims, meal_id).await
}

#[post("/meals/plans")]
async fn create_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_form: web::Json<MealPlanCreate>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::create_meal_plan(pool, claims, plan_form).await
}

#[get("/meals/plans")]
async fn list_meal_plans(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::list_meal_plans(pool, claims, pagination).await
}

#[get("/meals/plans/client/{client_id}/active")]
async fn get_client_active_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::get_client_active_plan(pool, claims, client_id).await
}

#[get("/meals/plans/{plan_id}")]
async fn get_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::get_meal_plan(pool, claims, plan_id).await
}

#[put("/meals/plans/{plan_id}")]
async fn update_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
    update: web::Json<MealPlanUpdate>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::update_meal_plan(pool, claims, plan_id, update).await
}

#[delete("/meals/plans/{plan_id}")]
async fn delete_meal_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::delete_meal_plan(pool, claims, plan_id).await
}

#[post("/meals/plans/{plan_id}/meals")]
async fn add_meal_to_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    plan_id: web::Path<Uuid>,
    entry: web::Json<MealPlanMealCreate>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::add_meal_to_plan(pool, claims, plan_id, entry).await
}

#[delete("/meals/plans/{plan_id}/meals/{meal_id}")]
async fn remove_meal_from_plan(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    meal_plan_handler::remove_meal_from_plan(pool, claims, path).await
}
