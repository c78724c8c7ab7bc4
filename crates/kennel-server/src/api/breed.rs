//! Breed API handlers
//!
//! - GET    /breeds/      - list breeds ordered by name
//! - POST   /breeds/      - create a breed
//! - GET    /breeds/{id}  - retrieve a breed
//! - PUT    /breeds/{id}  - replace a breed
//! - DELETE /breeds/{id}  - delete a breed and its dogs

use actix_web::{HttpResponse, web};
use serde_json::Value;

use crate::{model::AppState, service::breed as breed_service};

pub async fn list(data: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let breeds = breed_service::find_all(data.persistence()).await?;
    Ok(HttpResponse::Ok().json(breeds))
}

pub async fn create(
    data: web::Data<AppState>,
    body: web::Json<Value>,
) -> actix_web::Result<HttpResponse> {
    let breed = breed_service::create(data.persistence(), &body).await?;
    Ok(HttpResponse::Created().json(breed))
}

pub async fn retrieve(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> actix_web::Result<HttpResponse> {
    let breed = breed_service::get(data.persistence(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(breed))
}

/// The breed must exist before the body is looked at, so a missing id is a 404
/// even when the body is malformed.
pub async fn update(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    body: Result<web::Json<Value>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let id = path.into_inner();
    breed_service::ensure_exists(data.persistence(), id).await?;

    let body = body?.into_inner();
    let breed = breed_service::update(data.persistence(), id, &body).await?;
    Ok(HttpResponse::Ok().json(breed))
}

pub async fn destroy(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> actix_web::Result<HttpResponse> {
    breed_service::delete(data.persistence(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
