use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Request conflicts with the stored state.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body could not be decoded into the expected shape.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// HTTP method is not mapped for the requested path.
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Conflict with current state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Request body exceeds the accepted size.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    /// Request body was not declared as JSON.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::Conflict(message) => AppError::Conflict(message),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(err) => {
                AppError::UnsupportedMediaType(err.body_text())
            }
            JsonRejection::JsonSyntaxError(err) => AppError::BadRequest(err.body_text()),
            JsonRejection::JsonDataError(err) => AppError::BadRequest(err.body_text()),
            JsonRejection::BytesRejection(err) => match err.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(err.body_text()),
                status if status.is_server_error() => {
                    error!(error = %err.body_text(), "failed to read request body");
                    AppError::Internal("failed to read request body".into())
                }
                _ => AppError::BadRequest(err.body_text()),
            },
            other => {
                warn!(error = %other.body_text(), "unexpected JSON rejection");
                AppError::BadRequest(other.body_text())
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => {
                return (StatusCode::METHOD_NOT_ALLOWED, self.to_string()).into_response();
            }
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}
