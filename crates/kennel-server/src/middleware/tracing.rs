//! Request tracing middleware.
//!
//! Every request runs inside an `http_request` span carrying its method, path and
//! request id. The id comes from the `x-request-id` header or is generated, and is
//! echoed on the response.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderMap, HeaderName, HeaderValue},
};
use tracing::{Instrument, Span, info_span};

/// Request ID header
pub const X_REQUEST_ID: &str = "x-request-id";

/// Longest client supplied request id that is reused as is
const MAX_REQUEST_ID_LENGTH: usize = 128;

/// Trace context attached to each request's extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    pub request_id: String,
}

impl TraceContext {
    /// Take the request id from the headers, or generate a UUID v4
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let request_id = headers
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LENGTH)
            .map(String::from)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Self { request_id }
    }
}

/// Tracing middleware factory
#[derive(Default)]
pub struct TracingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TracingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TracingMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingMiddlewareService { service }))
    }
}

/// Tracing middleware service
pub struct TracingMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TracingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_ctx = TraceContext::from_headers(req.headers());
        let request_id = trace_ctx.request_id.clone();

        let span = info_span!(
            "http_request",
            request_id = %request_id,
            http.method = %req.method(),
            http.target = %req.path(),
            http.status_code = tracing::field::Empty,
        );

        req.extensions_mut().insert(trace_ctx);

        let fut = self.service.call(req);

        Box::pin(
            async move {
                let mut res = fut.await?;

                let status = res.status().as_u16();
                Span::current().record("http.status_code", status);
                tracing::debug!("request completed with status {}", status);

                if let Ok(value) = HeaderValue::from_str(&request_id) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(X_REQUEST_ID), value);
                }

                Ok(res)
            }
            .instrument(span),
        )
    }
}
