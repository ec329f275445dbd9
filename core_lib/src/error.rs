//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::validation::ValidationResult;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed for: {}", .0.field_names().join(", "))]
    Validation(ValidationResult),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) | AppError::JsonError(_) | AppError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation(result) => {
                tracing::warn!(fields = ?result.field_names(), "rejected invalid submission");
                json!({
                    "error": "Validation failed",
                    "status": status.as_u16(),
                    "fields": result.errors,
                })
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) => json!({
                "error": msg,
                "status": status.as_u16(),
            }),
            AppError::StoreUnavailable(msg) => {
                tracing::error!("Record store error: {}", msg);
                json!({
                    "error": "Record store unavailable",
                    "status": status.as_u16(),
                })
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                json!({
                    "error": "Internal server error",
                    "status": status.as_u16(),
                })
            }
            AppError::JsonError(err) => {
                tracing::error!("JSON error: {:?}", err);
                json!({
                    "error": "Internal server error",
                    "status": status.as_u16(),
                })
            }
            AppError::Other(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                json!({
                    "error": "Internal server error",
                    "status": status.as_u16(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}
