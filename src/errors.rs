// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid API Key")]
    InvalidApiKey,

    #[error("Payment not found")]
    PaymentNotFound,

    #[error("Duplicate payment_uid")]
    DuplicatePaymentUid,

    #[error("Payment status is already final")]
    StatusAlreadyFinal,

    #[error("Invalid status value")]
    InvalidStatusValue,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Database(err) => {
                // Keep driver details out of responses; 500 with a generic body.
                tracing::error!("database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::InvalidApiKey => (StatusCode::UNAUTHORIZED, "Invalid API Key".to_string()),
            AppError::PaymentNotFound => (StatusCode::NOT_FOUND, "Payment not found".to_string()),
            AppError::DuplicatePaymentUid => (
                StatusCode::CONFLICT,
                "Payment identifier already exists, retry the request".to_string(),
            ),
            AppError::StatusAlreadyFinal => (
                StatusCode::CONFLICT,
                "Payment status is already final".to_string(),
            ),
            AppError::InvalidStatusValue => {
                (StatusCode::BAD_REQUEST, "Invalid status value".to_string())
            }
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::ConfigurationError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Configuration error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
            "success": false,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
