use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::db;
use crate::errors::ApiError;
use crate::models::client::{ClientCreate, ClientFilter, ClientUpdate};
use crate::models::common::{ApiResponse, Page};
use crate::utils::identity::{load_authorized_client, require_trainer, resolve_user, ClientAccess};
use crate::utils::pagination::Pagination;

#[tracing::instrument(name = "Create client", skip(pool, claims, client_form))]
pub async fn create_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_form: web::Json<ClientCreate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let client = db::clients::insert_client(&pool, trainer.id, &client_form).await?;
    Ok(HttpResponse::Created().json(client))
}

#[tracing::instrument(name = "List clients", skip(pool, claims))]
pub async fn list_clients(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let clients = db::clients::list_by_trainer(&pool, trainer.id, skip, limit).await?;
    let total = db::clients::count_by_trainer(&pool, trainer.id).await?;

    Ok(HttpResponse::Ok().json(Page::new(clients, total, skip, limit)))
}

/// Empty filters return the trainer's full client set.
#[tracing::instrument(name = "Search clients", skip(pool, claims, filter))]
pub async fn search_clients(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    filter: web::Query<ClientFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let trainer = require_trainer(&pool, &user).await?;

    let (skip, limit) = pagination.bounds();
    let clients = db::clients::search_clients(&pool, trainer.id, &filter, skip, limit).await?;
    Ok(HttpResponse::Ok().json(clients))
}

#[tracing::instrument(name = "Get client", skip(pool, claims))]
pub async fn get_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, _) = load_authorized_client(&pool, &user, *client_id).await?;
    Ok(HttpResponse::Ok().json(client))
}

#[tracing::instrument(name = "Update client", skip(pool, claims, update))]
pub async fn update_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    update: web::Json<ClientUpdate>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, access) = load_authorized_client(&pool, &user, *client_id).await?;

    // Clients edit their own self-service fields; the active flag is the
    // trainer's call.
    if matches!(access, ClientAccess::AsSelf) && update.is_active.is_some() {
        return Err(ApiError::forbidden(
            "Only the owning trainer can change the active flag",
        ));
    }

    let updated = db::clients::update_client(&pool, client.id, &update)
        .await?
        .ok_or_else(|| ApiError::not_found("Client not found"))?;
    Ok(HttpResponse::Ok().json(updated))
}

#[tracing::instrument(name = "Delete client", skip(pool, claims))]
pub async fn delete_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(&pool, &claims).await?;
    let (client, access) = load_authorized_client(&pool, &user, *client_id).await?;

    if !matches!(access, ClientAccess::AsTrainer(_)) {
        return Err(ApiError::forbidden("Only the owning trainer can delete a client"));
    }

    db::clients::delete_client(&pool, client.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Client deleted")))
}
