use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assist::strategy::AssistError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI assistance error: {0}")]
    Assist(String),
}

impl From<AssistError> for AppError {
    fn from(e: AssistError) -> Self {
        match e {
            AssistError::Validation(msg) => AppError::Validation(msg),
            other => AppError::Assist(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Assist(msg) => {
                tracing::error!("AI assistance error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ASSIST_ERROR",
                    "Unable to produce suggestions. Please try again.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
