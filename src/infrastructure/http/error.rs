//! HTTP Error Handling
//!
//! 错误响应格式:
//! - 404 `{"error": "Author with ID 1 not found"}`
//! - 400 `{"error": "Invalid payload", "details": [...]}`
//! - 409 `{"error": "..."}`（约束冲突）
//! - 500 `{"error": "Internal server error"}`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::{FieldError, ValidationErrors};

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            error: error.into(),
            details: Some(details),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidPayload(ValidationErrors),
    Conflict(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, ErrorResponse::new(msg))
            }
            ApiError::InvalidPayload(errors) => {
                tracing::warn!(error = %errors, "Invalid payload");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid payload", errors.into_inner()),
                )
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(error = %msg, "Constraint violation");
                (StatusCode::CONFLICT, ErrorResponse::new(msg))
            }
            ApiError::Internal(msg) => {
                // 内部细节只写日志，不返回给客户端
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidPayload(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload(FieldError::body("json_invalid", rejection.body_text()).into())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::ConstraintViolation(msg) => ApiError::Conflict(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}
