use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::{payment_handler, payment_method_handler, subscription_handler};
use crate::models::payment::{PaymentCreate, PaymentMethodCreate, PaymentUpdate, SubscriptionCreate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_client_payments)
        .service(create_payment)
        .service(list_payments)
        .service(create_payment_intent)
        .service(get_payment)
        .service(update_payment)
        .service(delete_payment)
        .service(list_client_active_subscriptions)
        .service(create_subscription)
        .service(list_subscriptions)
        .service(cancel_subscription)
        .service(get_subscription)
        .service(create_payment_method)
        .service(get_default_payment_method)
        .service(set_default_payment_method)
        .service(list_client_payment_methods)
        .service(delete_payment_method);
}

#[post("/payments")]
async fn create_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_form: web::Json<PaymentCreate>,
) -> Result<HttpResponse, ApiError> {
    payment_handler::create_payment(pool, claims, payment_form).await
}

#[get("/payments")]
async fn list_payments(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    payment_handler::list_payments(pool, claims, pagination).await
}

#[get("/payments/client/{client_id}")]
async fn list_client_payments(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    payment_handler::list_client_payments(pool, claims, client_id, pagination).await
}

#[get("/payments/{payment_id}")]
async fn get_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    payment_handler::get_payment(pool, claims, payment_id).await
}

#[put("/payments/{payment_id}")]
async fn update_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_id: web::Path<Uuid>,
    update: web::Json<PaymentUpdate>,
) -> Result<HttpResponse, ApiError> {
    payment_handler::update_payment(pool, claims, payment_id, update).await
}

#[delete("/payments/{payment_id}")]
async fn delete_payment(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    payment_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    payment_handler::delete_payment(pool, claims, payment_id).await
}

#[post("/payments/{payment_id}/intent")]
async fn create_payment_intent(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    stripe: web::Data<crate::services::StripeClient>,
    payment_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    payment_handler::create_payment_intent(pool, claims, stripe, payment_id).await
}

#[post("/subscriptions")]
async fn create_subscription(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    subscription_form: web::Json<SubscriptionCreate>,
) -> Result<HttpResponse, ApiError> {
    subscription_handler::create_subscription(pool, claims, subscription_form).await
}

#[get("/subscriptions")]
async fn list_subscriptions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    subscription_handler::list_subscriptions(pool, claims, pagination).await
}

#[get("/subscriptions/client/{client_id}/active")]
async fn list_client_active_subscriptions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    subscription_handler::list_client_active_subscriptions(pool, claims, client_id).await
}

#[get("/subscriptions/{subscription_id}")]
async fn get_subscription(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    subscription_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    subscription_handler::get_subscription(pool, claims, subscription_id).await
}

#[post("/subscriptions/{subscription_id}/cancel")]
async fn cancel_subscription(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    subscription_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    subscription_handler::cancel_subscription(pool, claims, subscription_id).await
}

#[post("/payment-methods")]
async fn create_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    method_form: web::Json<PaymentMethodCreate>,
) -> Result<HttpResponse, ApiError> {
    payment_method_handler::create_payment_method(pool, claims, method_form).await
}

#[get("/payment-methods/client/{client_id}")]
async fn list_client_payment_methods(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    payment_method_handler::list_client_payment_methods(pool, claims, client_id).await
}

#[get("/payment-methods/client/{client_id}/default")]
async fn get_default_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    payment_method_handler::get_default_payment_method(pool, claims, client_id).await
}

#[put("/payment-methods/client/{client_id}/default/{method_id}")]
async fn set_default_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    payment_method_handler::set_default_payment_method(pool, claims, path).await
}

#[delete("/payment-methods/client/{client_id}/{method_id}")]
async fn delete_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    payment_method_handler::delete_payment_method(pool, claims, path).await
}
