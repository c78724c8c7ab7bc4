//! Common test utilities for integration testing
//!
//! - `test_state` - application state over a fresh in-memory SQLite database
//! - `init_app` - the routed application wrapped in the tracing middleware
//! - request helpers returning the status and the decoded JSON body

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use kennel_persistence::{
    SqlPersistService,
    schema::create_tables,
    sea_orm::{ConnectOptions, Database},
};
use kennel_server::{
    middleware::tracing::TracingMiddleware,
    model::{AppState, Configuration},
    startup::configure_app,
};
use serde_json::{Value, json};

pub async fn test_state() -> Arc<AppState> {
    // A single connection keeps every query on the same in-memory database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    create_tables(&db).await.unwrap();

    Arc::new(AppState::new(
        Configuration::default(),
        Arc::new(SqlPersistService::new(db)),
    ))
}

pub async fn init_app(
    state: Arc<AppState>,
    context_path: &'static str,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(TracingMiddleware)
            .app_data(web::Data::from(state))
            .configure(|cfg| configure_app(cfg, context_path)),
    )
    .await
}

/// Send a request, returning the status and the JSON body (`None` when empty)
pub async fn send<S, B>(app: &S, req: Request) -> (StatusCode, Option<Value>)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    if body.is_empty() {
        (status, None)
    } else {
        (status, Some(serde_json::from_slice(&body).unwrap()))
    }
}

pub fn get(uri: &str) -> Request {
    test::TestRequest::get().uri(uri).to_request()
}

pub fn post_json(uri: &str, body: Value) -> Request {
    test::TestRequest::post().uri(uri).set_json(body).to_request()
}

pub fn put_json(uri: &str, body: Value) -> Request {
    test::TestRequest::put().uri(uri).set_json(body).to_request()
}

pub fn delete(uri: &str) -> Request {
    test::TestRequest::delete().uri(uri).to_request()
}

pub fn labrador() -> Value {
    json!({
        "name": "Labrador",
        "size": "L",
        "friendliness": 5,
        "trainability": 5,
        "shedding_amount": 3,
        "exercise_needs": 4,
    })
}

pub fn buddy(breed_id: i64) -> Value {
    json!({
        "name": "Buddy",
        "age": 3,
        "gender": "Male",
        "color": "Black",
        "favorite_food": "Bones",
        "favorite_toy": "Ball",
        "breed_id": breed_id,
    })
}

/// Create a breed through the API and return its id
pub async fn create_breed<S, B>(app: &S, body: Value) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = send(app, post_json("/breeds/", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    body.unwrap()["id"].as_i64().unwrap()
}

/// Create a dog through the API and return its id
pub async fn create_dog<S, B>(app: &S, body: Value) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = send(app, post_json("/dogs/", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    body.unwrap()["id"].as_i64().unwrap()
}
