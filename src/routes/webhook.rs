use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::handlers::webhook_handler::handle_webhook;
use crate::models::payment::WebhookEvent;

#[post("/webhook")]
async fn stripe_webhook(
    pool: web::Data<PgPool>,
    event: web::Json<WebhookEvent>,
) -> Result<HttpResponse, ApiError> {
    handle_webhook(pool, event).await
}
