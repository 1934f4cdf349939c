use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::common::ApiResponse;
use crate::models::payment::PaymentMethodCreate;
use crate::utils::identity::{load_authorized_client, resolve_user};

#[tracing::instrument(name = "Add payment method", skip(pool, claims, method_form))]
pub async fn create_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    method_form: web::Json<PaymentMethodCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    load_authorized_client(&pool, &user, method_form.client_id).await?;

    let method = db::payment_methods::insert_payment_method(&pool, &method_form).await?;
    Ok(HttpResponse::Created().json(method))
}

#[tracing::instrument(name = "List client payment methods", skip(pool, claims))]
pub async fn list_client_payment_methods(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let methods = db::payment_methods::list_active_by_client(&pool, client.id).await?;
    Ok(HttpResponse::Ok().json(methods))
}

#[tracing::instrument(name = "Get default payment method", skip(pool, claims))]
pub async fn get_default_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;

    let method = db::payment_methods::get_default(&pool, client.id)
        .await?
        .ok_or_else(|| ApiError::not_found("No default payment method set"))?;
    Ok(HttpResponse::Ok().json(method))
}

/// After this call exactly one method is default for the client: the clear
/// and the set run in one transaction in the db layer.
#[tracing::instrument(name = "Set default payment method", skip(pool, claims))]
pub async fn set_default_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (client_id, method_id) = path.into_inner();
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, client_id).await?;

    let method = db::payment_methods::set_default(&pool, client.id, method_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment method not found"))?;
    Ok(HttpResponse::Ok().json(method))
}

#[tracing::instrument(name = "Delete payment method", skip(pool, claims))]
pub async fn delete_payment_method(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, ApiError> {
    let (client_id, method_id) = path.into_inner();
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, client_id).await?;

    let method = db::payment_methods::get_payment_method(&pool, method_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Payment method not found"))?;
    if method.client_id != client.id {
        return Err(ApiError::forbidden("Payment method belongs to another client"));
    }

    db::payment_methods::delete_payment_method(&pool, method.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Payment method deleted")))
}
