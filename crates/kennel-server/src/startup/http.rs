//! HTTP server setup

use std::{sync::Arc, time::Duration};

use actix_web::{
    App, HttpRequest, HttpResponse, HttpServer,
    dev::Server,
    error::{InternalError, JsonPayloadError, PathError},
    http::header::CONTENT_TYPE,
    middleware::Logger,
    web,
};
use tracing::debug;

use crate::{
    api::route::{health_routes, routes},
    middleware::tracing::TracingMiddleware,
    model::{AppState, ErrorDetail},
};

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected request body for {}: {}", req.path(), err);

    let response = match &err {
        JsonPayloadError::ContentType => {
            let content_type = req
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("");
            HttpResponse::UnsupportedMediaType().json(ErrorDetail::new(format!(
                "Unsupported media type \"{}\" in request.",
                content_type
            )))
        }
        JsonPayloadError::Deserialize(e) => {
            HttpResponse::BadRequest().json(ErrorDetail::new(format!("JSON parse error - {}", e)))
        }
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorDetail::new(err.to_string()))
        }
        _ => HttpResponse::BadRequest().json(ErrorDetail::new(err.to_string())),
    };

    InternalError::from_response(err, response).into()
}

// Digit ids beyond the i32 range never match a stored row
fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    InternalError::from_response(err, HttpResponse::NotFound().finish()).into()
}

/// Register body and path extraction settings plus every route.
///
/// Health probes stay at the root; breeds and dogs live under `context_path`.
pub fn configure_app(cfg: &mut web::ServiceConfig, context_path: &str) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(health_routes())
        .service(routes(context_path));
}

/// Creates and binds the API server.
///
/// OS signals are left to `GracefulShutdown`, which stops the server through
/// its handle.
pub fn api_server(
    app_state: Arc<AppState>,
    context_path: String,
    address: String,
    port: u16,
    workers: usize,
    shutdown_timeout: Duration,
) -> Result<Server, std::io::Error> {
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(TracingMiddleware)
            .app_data(web::Data::from(app_state.clone()))
            .configure(|cfg| configure_app(cfg, &context_path))
    })
    .disable_signals()
    .shutdown_timeout(shutdown_timeout.as_secs());

    if workers > 0 {
        server = server.workers(workers);
    }

    Ok(server.bind((address, port))?.run())
}
