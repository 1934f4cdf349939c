use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{create_client_for, create_trainer, spawn_app};

async fn add_method(app_address: &str, token: &str, client_id: Uuid, last_four: &str) -> Uuid {
    let http = Client::new();
    let response = http
        .post(format!("{}/api/v1/payment-methods", app_address))
        .bearer_auth(token)
        .json(&json!({
            "client_id": client_id,
            "stripe_payment_method_id": format!("pm_{}", Uuid::new_v4().simple()),
            "method_type": "card",
            "card_brand": "visa",
            "card_last_four": last_four
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

async fn set_default(app_address: &str, token: &str, client_id: Uuid, method_id: Uuid) {
    let http = Client::new();
    let response = http
        .put(format!(
            "{}/api/v1/payment-methods/client/{}/default/{}",
            app_address, client_id, method_id
        ))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
}

// After switching the default from A to B there is exactly one default:
// never zero, never two.
#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn switching_default_leaves_exactly_one_default_method() {
    let test_app = spawn_app().await;
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let method_a = add_method(&test_app.address, &trainer.token, client_id, "1111").await;
    let method_b = add_method(&test_app.address, &trainer.token, client_id, "2222").await;

    set_default(&test_app.address, &trainer.token, client_id, method_a).await;
    set_default(&test_app.address, &trainer.token, client_id, method_b).await;

    let (default_count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM payment_methods WHERE client_id = $1 AND is_default = TRUE",
    )
    .bind(client_id)
    .fetch_one(&test_app.db_pool)
    .await
    .unwrap();
    assert_eq!(default_count, 1);

    let (default_id,): (Uuid,) = sqlx::query_as(
        "SELECT id FROM payment_methods WHERE client_id = $1 AND is_default = TRUE",
    )
    .bind(client_id)
    .fetch_one(&test_app.db_pool)
    .await
    .unwrap();
    assert_eq!(default_id, method_b);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn setting_default_to_unknown_method_keeps_the_current_default() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let method_a = add_method(&test_app.address, &trainer.token, client_id, "1111").await;
    set_default(&test_app.address, &trainer.token, client_id, method_a).await;

    let response = http
        .put(format!(
            "{}/api/v1/payment-methods/client/{}/default/{}",
            &test_app.address,
            client_id,
            Uuid::new_v4()
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());

    let (default_count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM payment_methods WHERE client_id = $1 AND is_default = TRUE",
    )
    .bind(client_id)
    .fetch_one(&test_app.db_pool)
    .await
    .unwrap();
    assert_eq!(default_count, 1);
}
