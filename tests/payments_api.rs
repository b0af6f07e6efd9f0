use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use payment_api::config::AppConfig;
use payment_api::database::connection::ensure_schema;
use payment_api::database::payment_store::SqlitePaymentStore;
use payment_api::services::payment_service::PaymentService;
use payment_api::state::AppState;

const API_KEY: &str = "test-secret";

async fn test_app() -> Router {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_schema(&pool).await.unwrap();

    let config = Arc::new(AppConfig {
        api_key: API_KEY.to_string(),
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    });
    let store = Arc::new(SqlitePaymentStore::new(pool.clone()));
    let payment_service = Arc::new(PaymentService::new(store));

    payment_api::build_router(AppState::new(config, pool, payment_service))
}

fn request(method: Method, uri: &str, api_key: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("api_key", key);
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn create_body() -> Value {
    json!({
        "amount": 100.0,
        "currency": "USD",
        "sender_mobile": "+911234567890",
        "receiver_mobile": "+919876543210",
    })
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_payment(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/payments",
            Some(API_KEY),
            Some(create_body()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

#[tokio::test]
async fn create_returns_pending_payment_with_formatted_uid() {
    let app = test_app().await;
    let body = create_payment(&app).await;

    assert_eq!(body["status"], "PENDING");
    assert!(body["payment_id"].as_i64().unwrap() > 0);

    let uid = body["payment_uid"].as_str().unwrap();
    let parts: Vec<&str> = uid.split('_').collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[0], "PAY");
    assert_eq!(parts[1], "7890");
    assert_eq!(parts[2], "3210");
    assert_eq!(parts[3].len(), 15);
    assert_eq!(parts[3].as_bytes()[8], b'T');
    assert_eq!(parts[3].chars().filter(char::is_ascii_digit).count(), 14);
    assert_eq!(parts[4].len(), 4);
    assert!(parts[4]
        .chars()
        .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let app = test_app().await;
    let created = create_payment(&app).await;
    let uid = created["payment_uid"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            &format!("/payments/{uid}"),
            Some(API_KEY),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["payment_id"], created["payment_id"]);
    assert_eq!(body["payment_uid"], created["payment_uid"]);
    assert_eq!(body["status"], "PENDING");
}

#[tokio::test]
async fn create_with_missing_field_is_unprocessable() {
    let app = test_app().await;

    let mut body = create_body();
    body.as_object_mut().unwrap().remove("currency");

    let response = app
        .clone()
        .oneshot(request(Method::POST, "/payments", Some(API_KEY), Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_with_short_mobile_is_unprocessable() {
    let app = test_app().await;

    let mut body = create_body();
    body["receiver_mobile"] = json!("321");

    let response = app
        .clone()
        .oneshot(request(Method::POST, "/payments", Some(API_KEY), Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn update_then_get_reflects_new_status() {
    for target in ["SUCCESS", "FAILED"] {
        let app = test_app().await;
        let created = create_payment(&app).await;
        let uid = created["payment_uid"].as_str().unwrap();

        let response = app
            .clone()
            .oneshot(request(
                Method::PUT,
                &format!("/payments/{uid}"),
                Some(API_KEY),
                Some(json!({ "status": target })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], target);

        let response = app
            .clone()
            .oneshot(request(
                Method::GET,
                &format!("/payments/{uid}"),
                Some(API_KEY),
                None,
            ))
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["status"], target);
    }
}

#[tokio::test]
async fn update_with_invalid_status_is_rejected_and_record_unchanged() {
    let app = test_app().await;
    let created = create_payment(&app).await;
    let uid = created["payment_uid"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            &format!("/payments/{uid}"),
            Some(API_KEY),
            Some(json!({ "status": "CANCELLED" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            &format!("/payments/{uid}"),
            Some(API_KEY),
            None,
        ))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["status"], "PENDING");
}

#[tokio::test]
async fn update_on_terminal_status_conflicts() {
    let app = test_app().await;
    let created = create_payment(&app).await;
    let uid = created["payment_uid"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            &format!("/payments/{uid}"),
            Some(API_KEY),
            Some(json!({ "status": "SUCCESS" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            &format!("/payments/{uid}"),
            Some(API_KEY),
            Some(json!({ "status": "FAILED" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            &format!("/payments/{uid}"),
            Some(API_KEY),
            None,
        ))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert_eq!(body["status"], "SUCCESS");
}

#[tokio::test]
async fn unknown_uid_is_not_found_for_get_and_update() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            "/payments/PAY_0000_0000_20240101T000000_AAAA",
            Some(API_KEY),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(request(
            Method::PUT,
            "/payments/PAY_0000_0000_20240101T000000_AAAA",
            Some(API_KEY),
            Some(json!({ "status": "SUCCESS" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn requests_without_valid_api_key_are_unauthorized() {
    let app = test_app().await;

    // Missing header, valid body.
    let response = app
        .clone()
        .oneshot(request(Method::POST, "/payments", None, Some(create_body())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Wrong secret.
    for (method, uri, body) in [
        (Method::POST, "/payments".to_string(), Some(create_body())),
        (Method::GET, "/payments/PAY_X".to_string(), None),
        (
            Method::PUT,
            "/payments/PAY_X".to_string(),
            Some(json!({ "status": "SUCCESS" })),
        ),
    ] {
        let response = app
            .clone()
            .oneshot(request(method, &uri, Some("wrong-secret"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn generated_uids_are_unique_across_creates() {
    let app = test_app().await;

    let first = create_payment(&app).await;
    let second = create_payment(&app).await;
    assert_ne!(first["payment_uid"], second["payment_uid"]);
}

#[tokio::test]
async fn health_endpoint_needs_no_credentials() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(request(Method::GET, "/health", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}
