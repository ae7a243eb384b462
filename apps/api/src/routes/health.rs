use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which AI backends are wired up.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let assist_mode = if state.dispatcher.is_simulated() {
        "simulated"
    } else {
        "remote"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-assist",
        "assist_mode": assist_mode,
        "proxy_configured": state.llm.is_some(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;

    #[tokio::test]
    async fn test_health_reports_simulated_mode() {
        let Json(body) = health_handler(State(test_state())).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["assist_mode"], "simulated");
        assert_eq!(body["proxy_configured"], false);
    }
}
