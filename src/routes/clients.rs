use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::client_handler;
use crate::models::client::{ClientCreate, ClientFilter, ClientUpdate};
use crate::utils::pagination::Pagination;

pub fn routes(cfg: &mut web::ServiceConfig) {
    // literal segments before the {client_id} matcher
    cfg.service(search_clients)
        .service(create_client)
        .service(list_clients)
        .service(get_client)
        .service(update_client)
        .service(delete_client);
}

#[post("/clients")]
async fn create_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_form: web::Json<ClientCreate>,
) -> Result<HttpResponse, ApiError> {
    client_handler::create_client(pool, claims, client_form).await
}

#[get("/clients")]
async fn list_clients(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    client_handler::list_clients(pool, claims, pagination).await
}

#[get("/clients/search")]
async fn search_clients(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    filter: web::Query<ClientFilter>,
    pagination: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    client_handler::search_clients(pool, claims, filter, pagination).await
}

#[get("/clients/{client_id}")]
async fn get_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    client_handler::get_client(pool, claims, client_id).await
}

#[put("/clients/{client_id}")]
async fn update_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    update: web::Json<ClientUpdate>,
) -> Result<HttpResponse, ApiError> {
    client_handler::update_client(pool, claims, client_id, update).await
}

#[delete("/clients/{client_id}")]
async fn delete_client(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    client_handler::delete_client(pool, claims, client_id).await
}
