use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Message returned when a failure has nothing a client can act on.
pub const GENERIC_FAILURE: &str = "The request could not be processed";

/// Handler error mapped onto the HTTP contract: 400 with `{ message }`, or 404 with no body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound,
    /// Infrastructure failure; the detail is logged, never returned.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Json(MessageBody::new(msg))).into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                (StatusCode::BAD_REQUEST, Json(MessageBody::new(GENERIC_FAILURE))).into_response()
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(_) => ApiError::NotFound,
            other => match other.client_message() {
                Some(msg) => ApiError::BadRequest(msg),
                None => ApiError::Internal(other.to_string()),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid bind address {addr}: {source}")]
    BindAddr { addr: String, source: std::net::AddrParseError },
}
