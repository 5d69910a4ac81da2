//! API tests against a running server

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::common::unique_token;

const BASE_URL: &str = "http://localhost:8000/api/v1";

async fn create(client: &Client, path: &str, body: Value) -> Value {
    let response = client
        .post(format!("{}/{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED, "POST /{}", path);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_hotel_lifecycle() {
    let client = Client::new();
    let token = unique_token();

    let owner = create(
        &client,
        "owners",
        json!({
            "first_name": "Olga",
            "last_name": "Owner",
            "email": format!("owner-{}@example.com", token),
            "username": format!("o{}", token),
            "password": "secret12"
        }),
    )
    .await;
    assert!(owner.get("password").is_none());

    let hotel = create(
        &client,
        "hotels",
        json!({
            "owner_id": owner["id"],
            "hotel_name": format!("Hotel {}", token),
            "hotel_rating": "5",
            "hotel_location": "Samarkand",
            "number_of_rooms": 10
        }),
    )
    .await;
    let hotel_url = format!("{}/hotels/{}", BASE_URL, hotel["id"]);

    let response = client
        .get(format!("{}/hotels?search={}&limit=5", BASE_URL, token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let page: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(page["count"], 1);
    assert_eq!(page["limit"], 5);
    assert_eq!(page["items"][0]["id"], hotel["id"]);

    let response = client.delete(&hotel_url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Successfully deleted");

    let response = client.get(&hotel_url).send().await.expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_hotel_with_unknown_owner() {
    let client = Client::new();

    let response = client
        .post(format!("{}/hotels", BASE_URL))
        .json(&json!({
            "owner_id": i64::MAX,
            "hotel_name": "Nowhere",
            "hotel_rating": "1",
            "hotel_location": "Nowhere",
            "number_of_rooms": 0
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["code"], 6);
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": format!("nobody-{}@example.com", unique_token()),
            "password": "wrong-pass"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn test_file_upload() {
    let client = Client::new();
    let part = reqwest::multipart::Part::bytes(b"fake-image".to_vec()).file_name("room.jpg");
    let form = reqwest::multipart::Form::new().part("file", part);

    let response = client
        .post(format!("{}/file-upload", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let url = body["url"].as_str().expect("No url in response");
    assert!(url.ends_with(".jpg"));

    let stored = client.get(url).send().await.expect("Failed to fetch media");
    assert_eq!(stored.bytes().await.unwrap().as_ref(), b"fake-image");
}
