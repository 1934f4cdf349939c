use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_client_for, create_trainer, register_and_login, spawn_app};

// The ownership matrix: owning trainer passes, another trainer is
// forbidden, the client's own login passes, another client is forbidden.
#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn client_reads_follow_the_ownership_matrix() {
    let test_app = spawn_app().await;
    let http = Client::new();

    let (owner, _) = create_trainer(&test_app.address).await;
    let (other_trainer, _) = create_trainer(&test_app.address).await;

    // a client account linked to the profile, plus an unrelated client login
    let client_account = register_and_login(&test_app.address, false).await;
    let (client_user_id,): (uuid::Uuid,) =
        sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(&client_account.email)
            .fetch_one(&test_app.db_pool)
            .await
            .unwrap();
    let stranger_account = register_and_login(&test_app.address, false).await;

    let client_id = create_client_for(
        &test_app.address,
        &owner.token,
        json!({ "user_id": client_user_id, "fitness_level": "beginner" }),
    )
    .await;

    let url = format!("{}/api/v1/clients/{}", &test_app.address, client_id);

    let as_owner = http.get(&url).bearer_auth(&owner.token).send().await.unwrap();
    assert_eq!(200, as_owner.status().as_u16());

    let as_other = http
        .get(&url)
        .bearer_auth(&other_trainer.token)
        .send()
        .await
        .unwrap();
    assert_eq!(403, as_other.status().as_u16());

    let as_self = http
        .get(&url)
        .bearer_auth(&client_account.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, as_self.status().as_u16());

    let as_stranger = http
        .get(&url)
        .bearer_auth(&stranger_account.token)
        .send()
        .await
        .unwrap();
    assert_eq!(403, as_stranger.status().as_u16());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn client_search_filters_by_fitness_level() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let (owner, _) = create_trainer(&test_app.address).await;

    create_client_for(
        &test_app.address,
        &owner.token,
        json!({ "fitness_level": "beginner" }),
    )
    .await;
    create_client_for(
        &test_app.address,
        &owner.token,
        json!({ "fitness_level": "advanced" }),
    )
    .await;

    let response = http
        .get(format!(
            "{}/api/v1/clients/search?fitness_level=beginner",
            &test_app.address
        ))
        .bearer_auth(&owner.token)
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let clients = body.as_array().unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0]["fitness_level"], "beginner");

    // empty filters return the trainer's full client set
    let all = http
        .get(format!("{}/api/v1/clients/search", &test_app.address))
        .bearer_auth(&owner.token)
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = all.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn non_trainer_cannot_create_clients() {
    let test_app = spawn_app().await;
    let http = Client::new();
    let account = register_and_login(&test_app.address, false).await;

    let response = http
        .post(format!("{}/api/v1/clients", &test_app.address))
        .bearer_auth(&account.token)
        .json(&json!({ "fitness_level": "beginner" }))
        .send()
        .await
        .unwrap();
    assert_eq!(403, response.status().as_u16());
}
