use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::payment::SubscriptionCreate;
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};
use crate::utils::pagination::Pagination;

#[tracing::instrument(name = "Create subscription", skip(pool, claims, subscription_form))]
pub async fn create_subscription(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    subscription_form: web::Json<SubscriptionCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let client = db::clients::get_client(&pool, subscription_form.client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    if client.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }
    if subscription_form.amount <= 0 {
        return Err(ApiError::bad_request("amount must be positive"));
    }

    let subscription =
        db::subscriptions::insert_subscription(&pool, trainer.id, &subscription_form).await?;
    Ok(HttpResponse::Created().json(subscription))
}

#[tracing::instrument(name = "List trainer subscriptions", skip(pool, claims))]
pub async fn list_subscriptions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let subscriptions = db::subscriptions::list_by_trainer(&pool, trainer.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(subscriptions))
}

#[tracing::instrument(name = "Get subscription", skip(pool, claims))]
pub async fn get_subscription(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    subscription_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let subscription = db::subscriptions::get_subscription(&pool, *subscription_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Subscription not found"))?;

    load_authorized_client(&pool, &user, subscription.client_id).await?;
    Ok(HttpResponse::Ok().json(subscription))
}

#[tracing::instrument(name = "List client's active subscriptions", skip(pool, claims))]
pub async fn list_client_active_subscriptions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let subscriptions = db::subscriptions::list_active_by_client(&pool, client.id).await?;
    Ok(HttpResponse::Ok().json(subscriptions))
}

/// Set status to cancelled and stamp cancelled_at.
#[tracing::instrument(name = "Cancel subscription", skip(pool, claims))]
pub async fn cancel_subscription(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    subscription_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let subscription = db::subscriptions::get_subscription(&pool, *subscription_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Subscription not found"))?;
    if subscription.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Subscription belongs to another trainer"));
    }

    let cancelled = db::subscriptions::cancel_subscription(&pool, subscription.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Subscription not found"))?;
    Ok(HttpResponse::Ok().json(cancelled))
}
