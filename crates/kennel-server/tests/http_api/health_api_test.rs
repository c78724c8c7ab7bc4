//! Health probe and routing integration tests

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use kennel_persistence::{
    SqlPersistService,
    sea_orm::{ConnectOptions, Database},
};
use kennel_server::{
    middleware::tracing::X_REQUEST_ID,
    model::{AppState, Configuration},
};
use serde_json::json;

use crate::common::{get, init_app, labrador, post_json, send, test_state};

#[actix_web::test]
async fn test_liveness() {
    let app = init_app(test_state().await, "").await;

    let (status, body) = send(&app, get("/health/liveness")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"status": "UP"})));
}

#[actix_web::test]
async fn test_readiness_up() {
    let app = init_app(test_state().await, "").await;

    let (status, body) = send(&app, get("/health/readiness")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"status": "UP"})));
}

#[actix_web::test]
async fn test_readiness_down_when_pool_closed() {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    let state = Arc::new(AppState::new(
        Configuration::default(),
        Arc::new(SqlPersistService::new(db.clone())),
    ));
    db.close().await.unwrap();

    let app = init_app(state, "").await;
    let (status, body) = send(&app, get("/health/readiness")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let body = body.unwrap();
    assert_eq!(body["status"], "DOWN");
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn test_context_path_prefixes_entity_routes_only() {
    let app = init_app(test_state().await, "/api").await;

    let (status, _) = send(&app, post_json("/api/breeds/", labrador())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, get("/api/breeds/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap().as_array().unwrap().len(), 1);

    let (status, _) = send(&app, get("/breeds/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/health/liveness")).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = init_app(test_state().await, "").await;

    let req = test::TestRequest::get()
        .uri("/breeds/")
        .insert_header((X_REQUEST_ID, "req-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get(X_REQUEST_ID).unwrap(), "req-123");

    let resp = test::call_service(&app, get("/breeds/")).await;
    assert!(resp.headers().contains_key(X_REQUEST_ID));
}
