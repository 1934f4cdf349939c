use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::goal::{Goal, GoalCreate, GoalUpdate};
use crate::models::user::User;
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};

#[derive(Debug, Deserialize)]
pub struct GoalListFilter {
    pub is_active: Option<bool>,
}

async fn load_owned_goal(pool: &PgPool, user: &User, goal_id: Uuid) -> Result<Goal, ApiError> {
    let trainer = require_trainer(pool, user).await?;
    let goal = db::goals::get_goal(pool, goal_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Goal not found"))?;
    if goal.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Goal belongs to another trainer"));
    }
    Ok(goal)
}

#[tracing::instrument(name = "Create goal", skip(pool, claims, goal_form), fields(title = %goal_form.title))]
pub async fn create_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_form: web::Json<GoalCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let client = db::clients::get_client(&pool, goal_form.client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    if client.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }

    let goal = db::goals::insert_goal(&pool, trainer.id, &goal_form).await?;
    Ok(HttpResponse::Created().json(goal))
}

#[tracing::instrument(name = "Get goal", skip(pool, claims))]
pub async fn get_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let goal = db::goals::get_goal(&pool, *goal_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Goal not found"))?;

    load_authorized_client(&pool, &user, goal.client_id).await?;
    Ok(HttpResponse::Ok().json(goal))
}

#[tracing::instrument(name = "List client goals", skip(pool, claims))]
pub async fn list_client_goals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    filter: web::Query<GoalListFilter>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let goals = db::goals::list_by_client(&pool, client.id, filter.is_active).await?;
    Ok(HttpResponse::Ok().json(goals))
}

#[tracing::instrument(name = "List overdue goals", skip(pool, claims))]
pub async fn list_overdue_goals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let goals = db::goals::list_overdue(&pool, client.id).await?;
    Ok(HttpResponse::Ok().json(goals))
}

#[tracing::instrument(name = "Update goal", skip(pool, claims, update))]
pub async fn update_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
    update: web::Json<GoalUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let goal = load_owned_goal(&pool, &user, *goal_id).await?;

    let updated = db::goals::update_goal(&pool, goal.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Goal not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Caller-asserted achievement. Repeat calls re-stamp achieved_date.
#[tracing::instrument(name = "Mark goal achieved", skip(pool, claims))]
pub async fn mark_goal_achieved(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let goal = load_owned_goal(&pool, &user, *goal_id).await?;

    let achieved = db::goals::mark_achieved(&pool, goal.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Goal not found"))?;
    Ok(HttpResponse::Ok().json(achieved))
}

#[tracing::instrument(name = "Delete goal", skip(pool, claims))]
pub async fn delete_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let goal = load_owned_goal(&pool, &user, *goal_id).await?;

    db::goals::delete_goal(&pool, goal.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Goal deleted")))
}
