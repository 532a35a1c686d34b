//! Boundary error type translated into HTTP responses.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::repositories::RepositoryError;
use crate::validation::ValidationError;

/// Message returned for every internal failure; the cause only goes to the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "something went wrong";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Input failed a validation rule; the message is reported verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal(reason.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        let (code, message) = match self {
            AppError::Validation(message) => ("validation_error", message.clone()),
            AppError::BadRequest(message) => ("bad_request", message.clone()),
            AppError::NotFound(message) => ("not_found", message.clone()),
            AppError::Conflict(message) => ("conflict", message.clone()),
            AppError::Internal(_) => ("internal_error", INTERNAL_ERROR_MESSAGE.to_string()),
        };
        ErrorBody { code, message }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(reason) = &self {
            tracing::error!("Request failed: {}", reason);
        }

        (self.status(), Json(self.to_error_body())).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.message())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", e);
        AppError::bad_request("invalid query string")
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::Conflict(_) => AppError::conflict("alias already exists"),
            RepositoryError::NotFound(_) => AppError::not_found("alias not found"),
            RepositoryError::Storage(reason) => AppError::internal(reason),
        }
    }
}
