//! Error handling for HTTP handlers
//!
//! Services and persistence propagate `anyhow::Error`; `AppError` wraps it at the
//! handler boundary and picks the response from the `KennelError` inside, if any.

use std::fmt::{Display, Formatter};

use actix_web::{HttpResponse, http::StatusCode};
use kennel_api::validation::{does_not_exist, error_message};
use kennel_common::{FieldErrors, KennelError};
use tracing::error;

use crate::model::ErrorDetail;

// Wrapper for application errors to implement actix-web error handling
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl AppError {
    pub fn kennel_error(&self) -> Option<&KennelError> {
        self.inner.downcast_ref::<KennelError>()
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<KennelError> for AppError {
    fn from(value: KennelError) -> Self {
        AppError {
            inner: value.into(),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(value: FieldErrors) -> Self {
        KennelError::Validation(value).into()
    }
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.kennel_error() {
            Some(KennelError::Validation(_)) | Some(KennelError::RelatedNotFound { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Some(KennelError::NotFound { .. }) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.kennel_error() {
            Some(KennelError::Validation(errors)) => HttpResponse::BadRequest().json(errors),
            Some(KennelError::NotFound { .. }) => HttpResponse::NotFound().finish(),
            Some(KennelError::RelatedNotFound { field, id, .. }) => HttpResponse::BadRequest()
                .json(FieldErrors::single(field, error_message(&does_not_exist(id)))),
            _ => {
                error!("Request failed: {:#}", self.inner);
                HttpResponse::InternalServerError().json(ErrorDetail::new(self.inner.to_string()))
            }
        }
    }
}
