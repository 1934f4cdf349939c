use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{register_and_login, spawn_app};

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn login_with_wrong_password_is_unauthorized() {
    let test_app = spawn_app().await;
    let account = register_and_login(&test_app.address, false).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/auth/login", &test_app.address))
        .json(&json!({ "email": account.email, "password": "wrong-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn login_as_deactivated_account_is_a_bad_request() {
    let test_app = spawn_app().await;
    let account = register_and_login(&test_app.address, false).await;

    sqlx::query("UPDATE users SET is_active = FALSE WHERE email = $1")
        .bind(&account.email)
        .execute(&test_app.db_pool)
        .await
        .unwrap();

    let client = Client::new();
    let response = client
        .post(format!("{}/api/v1/auth/login", &test_app.address))
        .json(&json!({ "email": account.email, "password": "password123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(400, response.status().as_u16());
}

// Activity is only checked at login: a token issued before deactivation
// keeps resolving until it expires.
#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn issued_token_survives_deactivation_until_expiry() {
    let test_app = spawn_app().await;
    let account = register_and_login(&test_app.address, false).await;
    let client = Client::new();

    sqlx::query("UPDATE users SET is_active = FALSE WHERE email = $1")
        .bind(&account.email)
        .execute(&test_app.db_pool)
        .await
        .unwrap();

    let response = client
        .get(format!("{}/api/v1/auth/me", &test_app.address))
        .bearer_auth(&account.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn me_requires_a_token_and_an_existing_account() {
    let test_app = spawn_app().await;
    let account = register_and_login(&test_app.address, false).await;
    let client = Client::new();

    let no_token = client
        .get(format!("{}/api/v1/auth/me", &test_app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(401, no_token.status().as_u16());

    let with_token = client
        .get(format!("{}/api/v1/auth/me", &test_app.address))
        .bearer_auth(&account.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, with_token.status().as_u16());
    let body: serde_json::Value = with_token.json().await.unwrap();
    assert_eq!(body["email"], account.email.as_str());

    // a token whose subject no longer exists stops resolving
    sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(&account.email)
        .execute(&test_app.db_pool)
        .await
        .unwrap();
    let gone = client
        .get(format!("{}/api/v1/auth/me", &test_app.address))
        .bearer_auth(&account.token)
        .send()
        .await
        .unwrap();
    assert_eq!(401, gone.status().as_u16());
}
