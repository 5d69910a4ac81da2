//! Requests rejected before any store access

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use booking_server::api::create_router;

use crate::common::lazy_state;

fn app() -> Router {
    create_router(lazy_state())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    for uri in ["/api/v1/users/abc", "/api/v1/hotels/1.5", "/api/v1/bookings/x"] {
        let (status, body) = send(get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["code"], 5);
        assert_eq!(body["error"], "BadValue");
    }
}

#[tokio::test]
async fn test_invalid_pagination_is_bad_request() {
    for uri in [
        "/api/v1/rooms?page=0",
        "/api/v1/rooms?limit=0",
        "/api/v1/owners?limit=101",
        "/api/v1/hotels?page=abc",
        "/api/v1/bookings?page=9223372036854775807",
        "/api/v1/users?page=10000001&limit=100",
    ] {
        let (status, _) = send(get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/hotels")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"hotel_name\": "))
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_invalid_user_is_rejected() {
    let user = json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "email": "not-an-email",
        "username": "ann",
        "password": "secret1",
        "type": "user"
    });
    let (status, body) = send(post_json("/api/v1/users", &user)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_phone_number_longer_than_column_rejected() {
    let owner = json!({
        "first_name": "Olga",
        "last_name": "Owner",
        "email": "olga@example.com",
        "phone_number": "1".repeat(31),
        "username": "olga",
        "password": "secret12"
    });
    let (status, body) = send(post_json("/api/v1/owners", &owner)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_reversed_booking_dates_rejected() {
    let booking = json!({
        "room_id": 1,
        "user_id": 1,
        "number_of_users": 2,
        "from_date": "2024-06-05",
        "to_date": "2024-06-01"
    });
    let (status, _) = send(post_json("/api/v1/bookings", &booking)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_password_requires_bearer() {
    let body = json!({ "password": "newpass1" });
    let (status, error) = send(post_json("/api/v1/auth/update-password", &body)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["code"], 2);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/auth/update-password")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let boundary = "X-BOUNDARY";
    let payload = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{b}--\r\n",
        b = boundary
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/file-upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(payload))
        .unwrap();

    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing file field");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = send(get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/hotels/{id}"].is_object());
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _) = send(get("/api/v1/payments")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
