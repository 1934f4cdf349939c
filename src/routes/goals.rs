use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::goal_handler::{self, GoalListFilter};
use crate::models::goal::{GoalCreate, GoalUpdate};

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_client_goals)
        .service(list_overdue_goals)
        .service(create_goal)
        .service(mark_goal_achieved)
        .service(get_goal)
        .service(update_goal)
        .service(delete_goal);
}

#[post("/goals")]
async fn create_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_form: web::Json<GoalCreate>,
) -> Result<HttpResponse, ApiError> {
    goal_handler::create_goal(pool, claims, goal_form).await
}

#[get("/goals/client/{client_id}")]
async fn list_client_goals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
    filter: web::Query<GoalListFilter>,
) -> Result<HttpResponse, ApiError> {
    goal_handler::list_client_goals(pool, claims, client_id, filter).await
}

#[get("/goals/client/{client_id}/overdue")]
async fn list_overdue_goals(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    client_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    goal_handler::list_overdue_goals(pool, claims, client_id).await
}

#[get("/goals/{goal_id}")]
async fn get_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    goal_handler::get_goal(pool, claims, goal_id).await
}

#[put("/goals/{goal_id}")]
async fn update_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
    update: web::Json<GoalUpdate>,
) -> Result<HttpResponse, ApiError> {
    goal_handler::update_goal(pool, claims, goal_id, update).await
}

#[put("/goals/{goal_id}/achieve")]
async fn mark_goal_achieved(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    goal_handler::mark_goal_achieved(pool, claims, goal_id).await
}

#[delete("/goals/{goal_id}")]
async fn delete_goal(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
    goal_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    goal_handler::delete_goal(pool, claims, goal_id).await
}
