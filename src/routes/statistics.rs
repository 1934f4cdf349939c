use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::auth::jwt::Claims;
use crate::errors::ApiError;
use crate::handlers::statistics_handler;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(trainer_statistics);
}

#[get("/statistics/trainer")]
async fn trainer_statistics(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse, ApiError> {
    statistics_handler::get_trainer_statistics(pool, claims).await
}
