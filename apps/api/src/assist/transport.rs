//! Transport to the remote AI endpoint.
//!
//! The dispatcher only sees the `Transport` trait, so tests swap in fakes
//! without any network or global state.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::ai::AiRequest;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote endpoint error (status {status}): {message}")]
    Status { status: u16, message: String },
}

/// Sends one tagged request and returns the decoded JSON reply.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &AiRequest) -> Result<Value, TransportError>;
}

#[derive(Debug, Deserialize)]
struct RemoteError {
    error: String,
}

/// POSTs `{action, payload}` to the configured endpoint with an optional
/// bearer credential. No timeout and no retries.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    bearer: Option<String>,
}

impl HttpTransport {
    pub fn new(endpoint: String, bearer: Option<String>) -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint,
            bearer,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &AiRequest) -> Result<Value, TransportError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(token) = &self.bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<RemoteError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = response.json().await?;
        debug!("Remote endpoint answered {}", request.action());
        Ok(value)
    }
}
