use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use trivia_core::CoreError;
use validator::ValidationErrors;

use crate::dto::ErrorResponse;

/// Failure categories returned to clients.
///
/// The payload strings are for logs only; responses carry the fixed
/// message of the category.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad request!",
            ApiError::NotFound(_) => "resource not found!",
            ApiError::MethodNotAllowed => "method not allowed!",
            ApiError::Unprocessable(_) => "unprocessable request!",
            ApiError::Internal(_) => "internal server error!",
        }
    }

    /// Error for a bare status produced outside the handlers.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(status.to_string()),
            StatusCode::NOT_FOUND => ApiError::NotFound(status.to_string()),
            StatusCode::METHOD_NOT_ALLOWED => ApiError::MethodNotAllowed,
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Unprocessable(status.to_string()),
            s if s.is_client_error() => ApiError::BadRequest(s.to_string()),
            s => ApiError::Internal(s.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(format!("Validation failed: {}", errors))
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoCandidates => ApiError::NotFound("no candidate questions".to_string()),
            CoreError::Database(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
