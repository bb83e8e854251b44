use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use log::{error, warn};
use thiserror::Error;

use super::response::ResponseFormat;
use crate::models::ValidationError;
use crate::security::PermissionError;
use crate::service::ServiceError;

/// Every way a gateway request can fail, rendered as an envelope
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("missing request header: {0}")]
    MissingHeader(&'static str),

    #[error("invalid request header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    #[error("{0}")]
    BadRequest(String),

    #[error("{reason}")]
    Payload { status: StatusCode, reason: String },

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Permission(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_)
            | ApiError::MissingHeader(_)
            | ApiError::InvalidHeader { .. }
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Payload { status, .. } => *status,
            ApiError::Service(err) => match err {
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::IllegalState(_) => StatusCode::CONFLICT,
                ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
                ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed with {}: {}", status, self);
        } else {
            warn!("Request rejected with {}: {}", status, self);
        }

        ResponseFormat::error(status, self.to_string()).into_response()
    }
}

// Extractor failures go through the same envelope as handler errors

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    // Oversized bodies and wrong content types keep their own status
    ApiError::Payload {
        status: err.status_code(),
        reason: format!("malformed request body: {}", err),
    }
    .into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("malformed query string: {}", err)).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("malformed path parameter: {}", err)).into()
}
