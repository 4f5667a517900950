//! End-to-end tests that bind the router to an ephemeral port and drive it
//! over HTTP.

use std::sync::Arc;

use kody::{server, storage::Storage};
use serde_json::{Value, json};

/// Binds the router to an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let app = server::router(Arc::new(Storage::new()), 1);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Completes `level` with `stars` for the default player.
async fn complete_level(client: &reqwest::Client, base: &str, level: i32, stars: i32) -> Value {
    client
        .post(format!("{base}/api/complete-level"))
        .json(&json!({ "level": level, "stars": stars }))
        .send()
        .await
        .expect("complete-level request")
        .json()
        .await
        .expect("complete-level body")
}

#[tokio::test]
async fn game_state_defaults_for_new_players() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let state: Value = client
        .get(format!("{base}/api/game-state"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("body");

    assert_eq!(state["currentLevel"], 1);
    assert_eq!(state["completedLevels"], json!([]));
    assert_eq!(state["totalStars"], 0);
    assert_eq!(state["audioEnabled"], true);
}

#[tokio::test]
async fn execute_python_grades_the_power_exercise() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let verdict: Value = client
        .post(format!("{base}/api/execute-python"))
        .json(&json!({
            "code": "power = 'on'\nif power == 'on':\n    print('Kody aktif!')\n"
        }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("body");

    assert_eq!(verdict["output"], "Kody aktif!");
    assert_eq!(verdict["success"], true);

    let asleep: Value = client
        .post(format!("{base}/api/execute-python"))
        .json(&json!({
            "code": "power = 'off'\nif power == 'on':\n    print('Kody aktif!')\nelse:\n    \
                     print('Kody tidur...')\n"
        }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("body");

    assert_eq!(asleep["output"], "Kody tidur...");
    assert_eq!(asleep["success"], false);
}

#[tokio::test]
async fn execute_python_rejects_malformed_payloads_before_grading() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/execute-python"))
        .json(&json!({ "code": 42 }))
        .send()
        .await
        .expect("request");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn complete_level_advances_state_and_accumulates_stars() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let state = complete_level(&client, &base, 1, 3).await;
    assert_eq!(state["currentLevel"], 2);
    assert_eq!(state["completedLevels"], json!([1]));
    assert_eq!(state["totalStars"], 3);

    // Repeating a level adds stars but not a duplicate completion.
    let state = complete_level(&client, &base, 1, 2).await;
    assert_eq!(state["completedLevels"], json!([1]));
    assert_eq!(state["totalStars"], 5);
}

#[tokio::test]
async fn complete_level_records_achievements_once() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let payload = json!({
        "level": 1,
        "stars": 3,
        "achievement": {
            "id": "first-steps",
            "title": "Langkah Pertama",
            "description": "Selesaikan level pertama",
            "icon": "medal",
            "earnedAt": "2024-06-01",
            "level": 1
        }
    });

    for _ in 0..2 {
        client
            .post(format!("{base}/api/complete-level"))
            .json(&payload)
            .send()
            .await
            .expect("request");
    }

    let state: Value = client
        .get(format!("{base}/api/game-state"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("body");

    let achievements = state["achievements"].as_array().expect("achievements array");
    assert_eq!(achievements.len(), 1, "achievement ids deduplicate");
    // Badges mirror each award event, not each unique achievement.
    assert_eq!(state["badges"].as_array().expect("badges array").len(), 2);
}

#[tokio::test]
async fn complete_level_rejects_out_of_range_stars() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/complete-level"))
        .json(&json!({ "level": 1, "stars": 4 }))
        .send()
        .await
        .expect("request");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn certificate_requires_all_levels() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/generate-certificate"))
        .json(&json!({ "studentName": "Sari" }))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("body");
    assert_eq!(body["message"], "All levels must be completed to generate certificate");

    for level in 1..=5 {
        complete_level(&client, &base, level, 3).await;
    }

    let certificate: Value = client
        .post(format!("{base}/api/generate-certificate"))
        .json(&json!({ "studentName": "Sari" }))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("body");

    assert_eq!(certificate["studentName"], "Sari");
    let levels = certificate["certificateData"]["levels"]
        .as_array()
        .expect("levels array");
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[1]["title"], "Negeri Pythonia");
    assert_eq!(levels[4]["title"], "Robotron");
    assert!(levels.iter().all(|row| row["stars"] == 3));
    assert_eq!(certificate["certificateData"]["totalStars"], 15);
}

#[tokio::test]
async fn players_are_separated_by_header() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{base}/api/complete-level"))
        .header("x-player", "2")
        .json(&json!({ "level": 1, "stars": 3 }))
        .send()
        .await
        .expect("request");

    let default_state: Value = client
        .get(format!("{base}/api/game-state"))
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("body");
    assert_eq!(default_state["completedLevels"], json!([]));

    let other_state: Value = client
        .get(format!("{base}/api/game-state"))
        .header("x-player", "2")
        .send()
        .await
        .expect("request")
        .json()
        .await
        .expect("body");
    assert_eq!(other_state["completedLevels"], json!([1]));
}
