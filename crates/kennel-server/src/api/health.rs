//! Health probes, mounted outside the API context path
//!
//! - GET /health/liveness  - the process is serving requests
//! - GET /health/readiness - the database answers

use actix_web::{HttpResponse, web};
use tracing::warn;

use crate::model::{AppState, HealthStatus};

pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus::up())
}

pub async fn readiness(data: web::Data<AppState>) -> HttpResponse {
    match data.persistence().health_check().await {
        Ok(()) => HttpResponse::Ok().json(HealthStatus::up()),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthStatus::down(e.to_string()))
        }
    }
}
