//! Generative proxy: the server side of the remote AI endpoint.
//!
//! Accepts `{action, payload}`, prompts Gemini and returns the reply parsed as
//! JSON. Failures are reported as `{"error": "..."}` with a non-2xx status,
//! which callers treat as a transport failure.

pub mod handlers;
pub mod prompts;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("GEMINI_API_KEY not configured")]
    NotConfigured,

    #[error("{0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Llm(LlmError::Api { .. }) | ProxyError::Llm(LlmError::Http(_)) => {
                StatusCode::BAD_GATEWAY
            }
            ProxyError::Llm(LlmError::EmptyContent) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            tracing::error!("Proxy error: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        let cases = [
            (ProxyError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ProxyError::NotConfigured, StatusCode::INTERNAL_SERVER_ERROR),
            (ProxyError::Llm(LlmError::EmptyContent), StatusCode::BAD_GATEWAY),
            (
                ProxyError::Llm(LlmError::Api {
                    status: 429,
                    message: "quota".into(),
                }),
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_not_configured_message() {
        assert_eq!(
            ProxyError::NotConfigured.to_string(),
            "GEMINI_API_KEY not configured"
        );
    }
}
