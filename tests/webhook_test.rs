use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_client_for, create_trainer, spawn_app};

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn payment_intent_succeeded_completes_the_payment() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let response = http
        .post(format!("{}/api/v1/payments", &test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({ "client_id": client_id, "amount": 7500 }))
        .send()
        .await
        .unwrap();
    assert_eq!(201, response.status().as_u16());
    let payment: serde_json::Value = response.json().await.unwrap();
    let payment_id = payment["id"].as_str().unwrap();
    assert_eq!(payment["status"], "pending");

    let response = http
        .post(format!(
            "{}/api/v1/payments/{}/intent",
            &test_app.address, payment_id
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let intent: serde_json::Value = response.json().await.unwrap();
    let intent_id = intent["id"].as_str().unwrap();

    // unauthenticated, as the processor would call it
    let response = http
        .post(format!("{}/api/v1/webhook", &test_app.address))
        .json(&json!({
            "type": "payment_intent.succeeded",
            "data": { "object": { "id": intent_id } }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());

    let (status, paid_at): (String, Option<chrono::DateTime<chrono::Utc>>) = sqlx::query_as(
        "SELECT status::text, paid_at FROM payments WHERE stripe_payment_intent_id = $1",
    )
    .bind(intent_id)
    .fetch_one(&test_app.db_pool)
    .await
    .unwrap();
    assert_eq!(status, "completed");
    assert!(paid_at.is_some());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn unknown_webhook_events_are_acknowledged() {
    let test_app = spawn_app().await;
    let http = Client::new();

    let response = http
        .post(format!("{}/api/v1/webhook", &test_app.address))
        .json(&json!({ "type": "charge.refund.updated", "data": {} }))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["received"], true);
}
