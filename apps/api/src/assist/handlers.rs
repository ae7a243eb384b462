//! Axum route handlers for the four AI assistance entry points.

use axum::{extract::State, Json};

use crate::assist::dispatcher::Dispatched;
use crate::errors::AppError;
use crate::models::ai::{
    AtsPayload, ContentSuggestionsPayload, JobMatchPayload, SmartSuggestionsPayload,
};
use crate::models::analysis::{AtsAnalysis, ContentSuggestion, JobMatchAnalysis};
use crate::state::AppState;

/// POST /api/v1/assist/content-suggestions
pub async fn handle_content_suggestions(
    State(state): State<AppState>,
    Json(payload): Json<ContentSuggestionsPayload>,
) -> Result<Json<Dispatched<Vec<ContentSuggestion>>>, AppError> {
    Ok(Json(state.dispatcher.content_suggestions(&payload).await?))
}

/// POST /api/v1/assist/ats
pub async fn handle_ats_analysis(
    State(state): State<AppState>,
    Json(payload): Json<AtsPayload>,
) -> Result<Json<Dispatched<AtsAnalysis>>, AppError> {
    Ok(Json(state.dispatcher.ats_analysis(&payload).await?))
}

/// POST /api/v1/assist/job-match
///
/// A blank job description is a 400; nothing is sent upstream.
pub async fn handle_job_match(
    State(state): State<AppState>,
    Json(payload): Json<JobMatchPayload>,
) -> Result<Json<Dispatched<JobMatchAnalysis>>, AppError> {
    Ok(Json(state.dispatcher.job_match(&payload).await?))
}

/// POST /api/v1/assist/smart-suggestions
pub async fn handle_smart_suggestions(
    State(state): State<AppState>,
    Json(payload): Json<SmartSuggestionsPayload>,
) -> Result<Json<Dispatched<Vec<String>>>, AppError> {
    Ok(Json(state.dispatcher.smart_suggestions(&payload).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assist::dispatcher::ResultSource;
    use crate::state::tests::test_state;

    #[tokio::test]
    async fn test_empty_job_description_is_validation_error() {
        let payload = JobMatchPayload::default();
        let result = handle_job_match(State(test_state()), Json(payload)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_ats_in_simulated_mode() {
        let result = handle_ats_analysis(State(test_state()), Json(AtsPayload::default()))
            .await
            .unwrap();
        assert_eq!(result.0.source, ResultSource::Simulated);
        assert_eq!(result.0.result.score.as_u64(), Some(20));
    }
}
