//! Dog API handlers
//!
//! - GET    /dogs/      - list dogs in id order
//! - POST   /dogs/      - create a dog
//! - GET    /dogs/{id}  - retrieve a dog
//! - PUT    /dogs/{id}  - replace a dog
//! - DELETE /dogs/{id}  - delete a dog

use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::{model::AppState, service::dog as dog_service};

pub async fn list(data: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let dogs = dog_service::find_all(data.persistence()).await?;
    Ok(HttpResponse::Ok().json(dogs))
}

pub async fn create(
    data: web::Data<AppState>,
    body: web::Json<Value>,
) -> actix_web::Result<HttpResponse> {
    let dog = dog_service::create(data.persistence(), &body).await?;
    Ok(HttpResponse::Created().json(dog))
}

pub async fn retrieve(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> actix_web::Result<HttpResponse> {
    let dog = dog_service::get(data.persistence(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(dog))
}

pub async fn update(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: Result<web::Json<Value>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();
    dog_service::ensure_exists(data.persistence(), id).await?;

    let body = body?.into_inner();
    let dog = dog_service::update(data.persistence(), id, &body).await?;
    Ok(HttpResponse::Ok().json(dog))
}

pub async fn destroy(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> actix_web::Result<HttpResponse> {
    dog_service::delete(data.persistence(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
