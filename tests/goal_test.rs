use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_client_for, create_trainer, spawn_app};

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn mark_achieved_restamps_on_every_call() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let response = http
        .post(format!("{}/api/v1/goals", &test_app.address))
        .bearer_auth(&trainer.token)
        .json(&json!({
            "client_id": client_id,
            "title": "Bodyweight squat x20",
            "target_value": 20.0,
            "current_value": 12.0,
            "unit": "reps"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(201, response.status().as_u16());
    let goal: serde_json::Value = response.json().await.unwrap();
    let goal_id = goal["id"].as_str().unwrap().to_string();

    let achieve_url = format!("{}/api/v1/goals/{}/achieve", &test_app.address, goal_id);

    let first = http
        .put(&achieve_url)
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, first.status().as_u16());
    let first: serde_json::Value = first.json().await.unwrap();
    assert_eq!(first["is_achieved"], true);
    let first_stamp: chrono::DateTime<chrono::Utc> =
        first["achieved_date"].as_str().unwrap().parse().unwrap();

    // achievement is caller-asserted and the stamp moves on repeat calls
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let second = http
        .put(&achieve_url)
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    let second: serde_json::Value = second.json().await.unwrap();
    assert_eq!(second["is_achieved"], true);
    let second_stamp: chrono::DateTime<chrono::Utc> =
        second["achieved_date"].as_str().unwrap().parse().unwrap();
    assert!(second_stamp > first_stamp);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn overdue_listing_excludes_achieved_and_future_goals() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (trainer, _) = create_trainer(&test_app.address).await;
    let client_id = create_client_for(&test_app.address, &trainer.token, json!({})).await;

    let create_goal = |title: &str, target_date: &str| {
        http.post(format!("{}/api/v1/goals", &test_app.address))
            .bearer_auth(&trainer.token)
            .json(&json!({
                "client_id": client_id,
                "title": title,
                "target_date": target_date
            }))
            .send()
    };

    let overdue = create_goal("Overdue", "2020-01-01T00:00:00Z").await.unwrap();
    assert_eq!(201, overdue.status().as_u16());
    let overdue_but_achieved = create_goal("Done late", "2020-06-01T00:00:00Z")
        .await
        .unwrap();
    let achieved: serde_json::Value = overdue_but_achieved.json().await.unwrap();
    let future = create_goal("Future", "2099-01-01T00:00:00Z").await.unwrap();
    assert_eq!(201, future.status().as_u16());

    let achieve_url = format!(
        "{}/api/v1/goals/{}/achieve",
        &test_app.address,
        achieved["id"].as_str().unwrap()
    );
    http.put(&achieve_url)
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();

    let response = http
        .get(format!(
            "{}/api/v1/goals/client/{}/overdue",
            &test_app.address, client_id
        ))
        .bearer_auth(&trainer.token)
        .send()
        .await
        .unwrap();
    let goals: serde_json::Value = response.json().await.unwrap();
    let goals = goals.as_array().unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0]["title"], "Overdue");
}
