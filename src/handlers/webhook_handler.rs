use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db;
use crate::errors::ApiError;
use crate::models::payment::WebhookEvent;

/// Inbound processor events. Unknown event types are acknowledged and
/// ignored so the processor does not retry them forever.
///
/// Signature verification is NOT implemented; every event logs a warning so
/// the gap stays visible. Do not expose this endpoint beyond a demo without
/// verifying the processor's signature.
#[tracing::instrument(name = "Handle payment webhook", skip(pool, event), fields(event_type = %event.event_type))]
pub async fn handle_webhook(
    pool: web::Data<PgPool>,
    event: web::Json<WebhookEvent>,
) -> Result<HttpResponse, ApiError> {
    tracing::warn!("Webhook accepted without signature verification");

    let object_id = event.data["object"]["id"].as_str();

    match event.event_type.as_str() {
        "payment_intent.succeeded" => {
            let intent_id = object_id
                .ok_or_else(|| ApiError::bad_request("Missing payment intent id in payload"))?;
            match db::payments::complete_by_intent(&pool, intent_id).await? {
                Some(payment) => {
                    tracing::info!("Payment {} completed via webhook", payment.id);
                }
                None => {
                    tracing::warn!("No payment found for intent {}", intent_id);
                }
            }
        }
        "customer.subscription.created" => {
            let subscription_id = object_id
                .ok_or_else(|| ApiError::bad_request("Missing subscription id in payload"))?;
            match db::subscriptions::activate_by_stripe_id(&pool, subscription_id).await? {
                Some(subscription) => {
                    tracing::info!("Subscription {} activated via webhook", subscription.id);
                }
                None => {
                    tracing::warn!("No subscription found for {}", subscription_id);
                }
            }
        }
        "customer.subscription.deleted" => {
            let subscription_id = object_id
                .ok_or_else(|| ApiError::bad_request("Missing subscription id in payload"))?;
            match db::subscriptions::cancel_by_stripe_id(&pool, subscription_id).await? {
                Some(subscription) => {
                    tracing::info!("Subscription {} cancelled via webhook", subscription.id);
                }
                None => {
                    tracing::warn!("No subscription found for {}", subscription_id);
                }
            }
        }
        other => {
            tracing::debug!("Ignoring unhandled webhook event type: {}", other);
        }
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({ "received": true })))
}
