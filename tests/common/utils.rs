use once_cell::sync::Lazy;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;
use uuid::Uuid;

use fitcoach_backend::config::settings::{get_config, get_jwt_settings, DatabaseSettings};
use fitcoach_backend::run;
use fitcoach_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database).await;
    let jwt_settings = get_jwt_settings(&configuration);

    let server = run(
        listener,
        connection_pool.clone(),
        jwt_settings,
        configuration.stripe,
    )
    .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db_pool: connection_pool,
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect(&config.connection_string_without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect(config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

pub struct TestAccount {
    pub email: String,
    pub token: String,
}

/// Register an account and log in, returning the bearer token.
pub async fn register_and_login(app_address: &str, is_trainer: bool) -> TestAccount {
    let client = Client::new();
    let email = format!("user{}@example.com", Uuid::new_v4());
    let password = "password123";

    let response = client
        .post(format!("{}/api/v1/auth/register", app_address))
        .json(&json!({
            "email": &email,
            "password": password,
            "full_name": "Test User",
            "is_trainer": is_trainer
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(201, response.status().as_u16());

    let response = client
        .post(format!("{}/api/v1/auth/login", app_address))
        .json(&json!({ "email": &email, "password": password }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
    let token = body["access_token"].as_str().unwrap().to_string();

    TestAccount { email, token }
}

/// Trainer account with a trainer profile; returns (account, trainer_id).
pub async fn create_trainer(app_address: &str) -> (TestAccount, Uuid) {
    let account = register_and_login(app_address, true).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/v1/trainers", app_address))
        .bearer_auth(&account.token)
        .json(&json!({
            "specialization": "Strength Training",
            "experience_years": 5,
            "hourly_rate": 7500
        }))
        .send()
        .await
        .expect("Failed to create trainer profile");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    let trainer_id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
    (account, trainer_id)
}

/// Create a client owned by the trainer; returns the client id.
pub async fn create_client_for(
    app_address: &str,
    trainer_token: &str,
    body: serde_json::Value,
) -> Uuid {
    let client = Client::new();
    let response = client
        .post(format!("{}/api/v1/clients", app_address))
        .bearer_auth(trainer_token)
        .json(&body)
        .send()
        .await
        .expect("Failed to create client");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.unwrap();
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}
