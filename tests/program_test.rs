use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{create_client_for, create_trainer, spawn_app};

async fn seed_exercise(app_address: &str, token: &str, name: &str) -> Uuid {
    let http = Client::new();
    let response = http
        .post(format!("{}/api/v1/exercises", app_address))
        .bearer_auth(token)
        .json(&json!({
            "name": name,
            "category": "strength",
            "muscle_groups": "chest,triceps",
            "difficulty_level": "intermediate",
            "equipment_needed": "barbell"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn program_created_with_three_assignments_returns_all_three() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let mut exercises = Vec::new();
    for name in ["Bench Press", "Incline Press", "Dips"] {
        exercises.push(seed_exercise(&test_app.address, &trainer.token, name).await);
    }

    let assignments: Vec<_> = exercises
        .iter()
        .enumerate()
        .map(|(i, id)| {
            json!({
                "exercise_id": id,
                "sets": 3,
                "reps": "8-12",
                "order_in_program": i + 1,
                "week_number": 1,
                "day_number": 1
            })
        })
        .collect();

    let response = http
        .post(format!("{}/api/v1/programs", &test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({
            "name": "Push Block",
            "client_id": client_id,
            "duration_weeks": 4,
            "sessions_per_week": 3,
            "exercises": assignments
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(201, response.status().as_u16());
    let program: serde_json::Value = response.json().await.unwrap();
    let program_id = program["id"].as_str().unwrap();

    let response = http
        .get(format!("{}/api/v1/programs/{}", &test_app.address, program_id))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();

    let returned = body["exercises"].as_array().unwrap();
    assert_eq!(returned.len(), 3);
    for assignment in returned {
        let exercise_id = Uuid::parse_str(assignment["exercise_id"].as_str().unwrap()).unwrap();
        assert!(exercises.contains(&exercise_id));
    }
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn program_with_unknown_exercise_writes_nothing() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let response = http
        .post(format!("{}/api/v1/programs", &test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({
            "name": "Broken Block",
            "client_id": client_id,
            "exercises": [{ "exercise_id": Uuid::new_v4(), "sets": 3 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(404, response.status().as_u16());

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM programs")
        .fetch_one(&test_app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn removing_an_absent_assignment_reports_false_not_an_error() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let response = http
        .post(format!("{}/api/v1/programs", &test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({ "name": "Empty Block", "client_id": client_id }))
        .send()
        .await
        .unwrap();
    let program: serde_json::Value = response.json().await.unwrap();
    let program_id = program["id"].as_str().unwrap();

    let response = http
        .delete(format!(
            "{}/api/v1/programs/{}/exercises/{}",
            &test_app.address,
            program_id,
            Uuid::new_v4()
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["removed"], false);
}
