use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_GEMINI_API_URL;

/// Application configuration loaded from environment variables.
///
/// Everything except the port is optional: without `AI_ENDPOINT_URL` the
/// assistant runs on local heuristics, without `GEMINI_API_KEY` the proxy
/// answers with an error, and without `REDIS_URL` storage lives in memory.
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_endpoint_url: Option<String>,
    pub ai_endpoint_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub redis_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ai_endpoint_url: optional_env("AI_ENDPOINT_URL"),
            ai_endpoint_key: optional_env("AI_ENDPOINT_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_api_url: optional_env("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            redis_url: optional_env("REDIS_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank values both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("RESUME_ASSIST_TEST_BLANK", "   ");
        assert_eq!(optional_env("RESUME_ASSIST_TEST_BLANK"), None);
        assert_eq!(optional_env("RESUME_ASSIST_TEST_NEVER_SET"), None);
    }

    #[test]
    fn test_optional_env_trims() {
        std::env::set_var("RESUME_ASSIST_TEST_URL", " http://localhost:8080/api/v1/ai ");
        assert_eq!(
            optional_env("RESUME_ASSIST_TEST_URL").as_deref(),
            Some("http://localhost:8080/api/v1/ai")
        );
    }
}
