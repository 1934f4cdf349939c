use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::payment::{Payment, PaymentCreate, PaymentUpdate};
use crate::models::user::User;
use crate::services::{PaymentProcessor, StripeClient};
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user};
use crate::utils::pagination::Pagination;

async fn load_owned_payment(
    pool: &PgPool,
    user: &User,
    payment_id: Uuid,
) -> Result<Payment, ApiError> {
    let trainer = require_trainer(pool, user).await?;
    let payment = db::payments::get_payment(pool, payment_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;
    if payment.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Payment belongs to another trainer"));
    }
    Ok(payment)
}

#[tracing::instrument(name = "Create payment", skip(pool, claims, payment_form))]
pub async fn create_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_form: web::Json<PaymentCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let client = db::clients::get_client(&pool, payment_form.client_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    if client.trainer_id != trainer.id {
        return Err(ApiError::forbidden("Client belongs to another trainer"));
    }
    if payment_form.amount <= 0 {
        return Err(ApiError::bad_request("amount must be positive"));
    }

    let payment = db::payments::insert_payment(&pool, trainer.id, &payment_form).await?;
    Ok(HttpResponse::Created().json(payment))
}

#[tracing::instrument(name = "List trainer payments", skip(pool, claims))]
pub async fn list_payments(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let payments = db::payments::list_by_trainer(&pool, trainer.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(payments))
}

#[tracing::instrument(name = "List client payments", skip(pool, claims))]
pub async fn list_client_payments(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let (skip, limit) = pagination.bounds();
    let payments = db::payments::list_by_client(&pool, client.id, skip, limit).await?;
    Ok(HttpResponse::Ok().json(payments))
}

#[tracing::instrument(name = "Get payment", skip(pool, claims))]
pub async fn get_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let payment = db::payments::get_payment(&pool, *payment_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;

    // Owning trainer or the paying client
    load_authorized_client(&pool, &user, payment.client_id).await?;
    Ok(HttpResponse::Ok().json(payment))
}

#[tracing::instrument(name = "Update payment", skip(pool, claims, update))]
pub async fn update_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_id: web::Path<Uuid>,
    update: web::Json<PaymentUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let payment = load_owned_payment(&pool, &user, *payment_id).await?;

    let updated = db::payments::update_payment(&pool, payment.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete payment", skip(pool, claims))]
pub async fn delete_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let payment = load_owned_payment(&pool, &user, *payment_id).await?;

    db::payments::delete_payment(&pool, payment.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Payment deleted")))
}

/// Ask the processor for an intent and attach the returned identifier to
/// the payment row.
#[tracing::instrument(name = "Create payment intent", skip(pool, claims, stripe))]
pub async fn create_payment_intent(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    stripe: web::Data<StripeClient>,
    payment_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let payment = load_owned_payment(&pool, &user, *payment_id).await?;

    let intent = stripe.create_payment_intent(&payment);
    db::payments::set_intent_id(&pool, payment.id, &intent.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment not found"))?;

    Ok(HttpResponse::Ok().json(intent))
}
