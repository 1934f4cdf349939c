use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::spawn_app;

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn register_user_persists_the_account() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let email = format!("user{}@example.com", Uuid::new_v4());
    let response = client
        .post(format!("{}/api/v1/auth/register", &test_app.address))
        .json(&json!({
            "email": &email,
            "password": "password123",
            "full_name": "Jane Doe",
            "is_trainer": true
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["is_trainer"], true);
    // the hash never leaves the server
    assert!(body.get("password_hash").is_none());

    let (saved_email, saved_name): (String, String) =
        sqlx::query_as("SELECT email, full_name FROM users WHERE email = $1")
            .bind(&email)
            .fetch_one(&test_app.db_pool)
            .await
            .expect("Failed to fetch saved user.");
    assert_eq!(saved_email, email);
    assert_eq!(saved_name, "Jane Doe");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn duplicate_email_returns_conflict_and_leaves_first_account_intact() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let email = format!("user{}@example.com", Uuid::new_v4());
    let register = |name: &str| {
        client
            .post(format!("{}/api/v1/auth/register", &test_app.address))
            .json(&json!({
                "email": &email,
                "password": "password123",
                "full_name": name
            }))
            .send()
    };

    let first = register("First Account").await.unwrap();
    assert_eq!(201, first.status().as_u16());

    let second = register("Second Account").await.unwrap();
    assert_eq!(409, second.status().as_u16());
    let body: serde_json::Value = second.json().await.unwrap();
    assert_eq!(body["error"], true);
    assert_eq!(body["status_code"], 409);
    assert!(body.get("request_id").is_some());

    let (count, name): (i64, String) = sqlx::query_as(
        "SELECT COUNT(*) OVER (), full_name FROM users WHERE email = $1 LIMIT 1",
    )
    .bind(&email)
    .fetch_one(&test_app.db_pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
    assert_eq!(name, "First Account");
}
