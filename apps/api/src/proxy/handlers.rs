use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::models::ai::AiRequest;
use crate::proxy::prompts::build_prompt;
use crate::proxy::ProxyError;
use crate::state::AppState;

/// POST /api/v1/ai
///
/// Body is read as raw bytes so malformed JSON still gets an `{"error"}` body.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ProxyError> {
    let request: AiRequest = serde_json::from_slice(&body)
        .map_err(|e| ProxyError::InvalidRequest(e.to_string()))?;

    let llm = state.llm.as_ref().ok_or(ProxyError::NotConfigured)?;

    info!("Proxying {} to Gemini", request.action());
    let (system, prompt) = build_prompt(&request);
    let result = llm.call_json(&prompt, &system).await?;

    Ok(Json(result))
}
