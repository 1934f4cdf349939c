use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_client_for, create_trainer, spawn_app};

async fn log_workout(
    app_address: &str,
    token: &str,
    client_id: uuid::Uuid,
    duration: i32,
    completed: bool,
) {
    let http = Client::new();
    let response = http
        .post(format!("{}/api/v1/workouts", app_address))
        .bearer_auth(token)
        .json(&json!({
            "client_id": client_id,
            "duration_minutes": duration,
            "calories_burned": duration * 8,
            "completed": completed
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(201, response.status().as_u16());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn stats_on_zero_completed_logs_are_all_zero() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    // an incomplete session must not count
    log_workout(&test_app.address, &trainer.token, client_id, 30, false).await;

    let response = http
        .get(format!(
            "{}/api/v1/workouts/stats/{}?days=30",
            &test_app.address, client_id
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let stats: serde_json::Value = response.json().await.unwrap();

    assert_eq!(stats["total_workouts"], 0);
    assert_eq!(stats["total_duration_minutes"], 0);
    assert_eq!(stats["total_calories_burned"], 0);
    assert_eq!(stats["average_duration"], 0.0);
    assert_eq!(stats["workouts_per_week"], 0.0);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn stats_average_three_completed_sessions() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    for duration in [30, 45, 60] {
        log_workout(&test_app.address, &trainer.token, client_id, duration, true).await;
    }

    let response = http
        .get(format!(
            "{}/api/v1/workouts/stats/{}?days=30",
            &test_app.address, client_id
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    let stats: serde_json::Value = response.json().await.unwrap();

    assert_eq!(stats["total_workouts"], 3);
    assert_eq!(stats["total_duration_minutes"], 135);
    assert_eq!(stats["average_duration"], 45.0);
}
