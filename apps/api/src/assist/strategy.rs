//! Result-producing strategies behind the dispatcher.
//!
//! `RemoteStrategy` asks the AI endpoint and validates the reply against the
//! typed result schema. `LocalStrategy` runs the deterministic heuristics.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::analysis::{ats, content, job_match};
use crate::assist::transport::{Transport, TransportError};
use crate::models::ai::{
    AiRequest, AtsPayload, ContentSuggestionsPayload, JobMatchPayload, SmartSuggestionsPayload,
};
use crate::models::analysis::{AtsAnalysis, ContentSuggestion, JobMatchAnalysis};

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Remote response does not match the {expected} schema: {source}")]
    Schema {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait AssistStrategy: Send + Sync {
    async fn content_suggestions(
        &self,
        payload: &ContentSuggestionsPayload,
    ) -> Result<Vec<ContentSuggestion>, AssistError>;

    async fn ats_analysis(&self, payload: &AtsPayload) -> Result<AtsAnalysis, AssistError>;

    async fn job_match(&self, payload: &JobMatchPayload) -> Result<JobMatchAnalysis, AssistError>;

    async fn smart_suggestions(
        &self,
        payload: &SmartSuggestionsPayload,
    ) -> Result<Vec<String>, AssistError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Remote
// ────────────────────────────────────────────────────────────────────────────

pub struct RemoteStrategy {
    transport: Arc<dyn Transport>,
}

impl RemoteStrategy {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        request: AiRequest,
        expected: &'static str,
    ) -> Result<T, AssistError> {
        let value = self.transport.send(&request).await?;
        validate(value, expected)
    }
}

/// Checks a remote reply against the result type's schema: required fields
/// present with the right JSON types. Values and tags pass through unchanged.
fn validate<T: DeserializeOwned>(value: Value, expected: &'static str) -> Result<T, AssistError> {
    serde_json::from_value(value).map_err(|source| AssistError::Schema { expected, source })
}

#[async_trait]
impl AssistStrategy for RemoteStrategy {
    async fn content_suggestions(
        &self,
        payload: &ContentSuggestionsPayload,
    ) -> Result<Vec<ContentSuggestion>, AssistError> {
        self.request(
            AiRequest::GenerateContentSuggestions(payload.clone()),
            "content suggestions",
        )
        .await
    }

    async fn ats_analysis(&self, payload: &AtsPayload) -> Result<AtsAnalysis, AssistError> {
        self.request(AiRequest::AnalyzeAtsCompatibility(payload.clone()), "ATS analysis")
            .await
    }

    async fn job_match(&self, payload: &JobMatchPayload) -> Result<JobMatchAnalysis, AssistError> {
        self.request(AiRequest::AnalyzeJobMatch(payload.clone()), "job match")
            .await
    }

    async fn smart_suggestions(
        &self,
        payload: &SmartSuggestionsPayload,
    ) -> Result<Vec<String>, AssistError> {
        self.request(
            AiRequest::GenerateSmartSuggestions(payload.clone()),
            "smart suggestions",
        )
        .await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Local heuristics
// ────────────────────────────────────────────────────────────────────────────

pub struct LocalStrategy;

#[async_trait]
impl AssistStrategy for LocalStrategy {
    async fn content_suggestions(
        &self,
        payload: &ContentSuggestionsPayload,
    ) -> Result<Vec<ContentSuggestion>, AssistError> {
        Ok(content::suggest_content(
            &payload.resume_data,
            payload.industry(),
            payload.job_description.as_deref(),
        ))
    }

    async fn ats_analysis(&self, payload: &AtsPayload) -> Result<AtsAnalysis, AssistError> {
        Ok(ats::analyze_ats(&payload.resume_data))
    }

    async fn job_match(&self, payload: &JobMatchPayload) -> Result<JobMatchAnalysis, AssistError> {
        Ok(job_match::analyze_job_match(
            &payload.resume_data,
            &payload.job_description,
        ))
    }

    async fn smart_suggestions(
        &self,
        payload: &SmartSuggestionsPayload,
    ) -> Result<Vec<String>, AssistError> {
        Ok(content::smart_suggestions(&payload.section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{Importance, Severity};
    use serde_json::json;

    #[test]
    fn test_validate_accepts_well_formed_ats() {
        let value = json!({
            "score": 88,
            "issues": [{"type": "warning", "section": "skills", "issue": "Few skills", "fix": "Add more"}],
            "keywordMatches": [{"keyword": "sql", "found": true, "frequency": 2, "importance": "high"}]
        });
        let analysis: AtsAnalysis = validate(value, "ATS analysis").unwrap();
        assert_eq!(analysis.score.as_u64(), Some(88));
        assert_eq!(analysis.keyword_matches[0].frequency.as_u64(), Some(2));
    }

    #[test]
    fn test_validate_returns_out_of_range_score_verbatim() {
        let value = json!({"score": 140, "issues": [], "keywordMatches": []});
        let analysis: AtsAnalysis = validate(value, "ATS analysis").unwrap();
        assert_eq!(analysis.score.as_u64(), Some(140));
    }

    #[test]
    fn test_validate_passes_fractional_negative_and_unknown_tags() {
        let value = json!({
            "score": 87.5,
            "issues": [{"type": "info", "section": "layout", "issue": "Two columns", "fix": "Use one"}],
            "keywordMatches": [{"keyword": "sql", "found": true, "frequency": 1.5, "importance": "critical"}]
        });
        let analysis: AtsAnalysis = validate(value, "ATS analysis").unwrap();
        assert_eq!(analysis.score.as_f64(), Some(87.5));
        assert_eq!(analysis.issues[0].severity, Severity::Other("info".to_string()));
        assert_eq!(
            analysis.keyword_matches[0].importance,
            Importance::Other("critical".to_string())
        );

        let value = json!({"matchScore": -5, "missingKeywords": [], "suggestions": []});
        let analysis: JobMatchAnalysis = validate(value, "job match").unwrap();
        assert_eq!(analysis.match_score.as_i64(), Some(-5));
    }

    #[test]
    fn test_validate_rejects_wrong_json_types() {
        let value = json!({"score": "high", "issues": [], "keywordMatches": []});
        assert!(validate::<AtsAnalysis>(value, "ATS analysis").is_err());

        let value = json!({"score": 80, "issues": "none", "keywordMatches": []});
        assert!(validate::<AtsAnalysis>(value, "ATS analysis").is_err());
    }

    #[test]
    fn test_validate_rejects_text_fallback_object() {
        let value = json!({"text": "Here is my analysis..."});
        let result: Result<AtsAnalysis, _> = validate(value, "ATS analysis");
        assert!(matches!(
            result,
            Err(AssistError::Schema {
                expected: "ATS analysis",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_object_for_array_result() {
        let value = json!({"suggestions": ["one"]});
        let result: Result<Vec<String>, _> = validate(value, "smart suggestions");
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_local_strategy_never_fails() {
        let local = LocalStrategy;
        assert!(local.ats_analysis(&AtsPayload::default()).await.is_ok());
        assert!(local.job_match(&JobMatchPayload::default()).await.is_ok());
        assert!(local
            .content_suggestions(&ContentSuggestionsPayload::default())
            .await
            .is_ok());
        assert_eq!(
            local
                .smart_suggestions(&SmartSuggestionsPayload::default())
                .await
                .unwrap()
                .len(),
            3
        );
    }
}
