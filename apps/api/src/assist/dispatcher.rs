//! AI request dispatcher. Remote first, local heuristics on any failure.
//!
//! State flow per call: `Idle → Sending → Succeeded`, or
//! `Sending → Failed → Fallback → Succeeded`. Without a configured endpoint
//! the dispatcher skips straight to the local strategy (simulated mode).
//! Fallback is silent: the caller only sees `ResultSource::Fallback`.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::assist::strategy::{AssistError, AssistStrategy, LocalStrategy, RemoteStrategy};
use crate::assist::transport::Transport;
use crate::models::ai::{
    AtsPayload, ContentSuggestionsPayload, JobMatchPayload, SmartSuggestionsPayload,
};
use crate::models::analysis::{AtsAnalysis, ContentSuggestion, JobMatchAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchState {
    Sending,
    Succeeded,
    Failed,
    Fallback,
}

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Remote,
    Fallback,
    Simulated,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dispatched<T> {
    pub result: T,
    pub source: ResultSource,
}

pub struct Dispatcher {
    remote: Option<RemoteStrategy>,
    local: LocalStrategy,
}

impl Dispatcher {
    pub fn new(transport: Option<Arc<dyn Transport>>) -> Self {
        Self {
            remote: transport.map(RemoteStrategy::new),
            local: LocalStrategy,
        }
    }

    /// Local heuristics only.
    pub fn simulated() -> Self {
        Self::new(None)
    }

    pub fn is_simulated(&self) -> bool {
        self.remote.is_none()
    }

    pub async fn content_suggestions(
        &self,
        payload: &ContentSuggestionsPayload,
    ) -> Result<Dispatched<Vec<ContentSuggestion>>, AssistError> {
        resolve(
            "generateContentSuggestions",
            self.remote.as_ref().map(|r| r.content_suggestions(payload)),
            || self.local.content_suggestions(payload),
        )
        .await
    }

    pub async fn ats_analysis(
        &self,
        payload: &AtsPayload,
    ) -> Result<Dispatched<AtsAnalysis>, AssistError> {
        resolve(
            "analyzeATSCompatibility",
            self.remote.as_ref().map(|r| r.ats_analysis(payload)),
            || self.local.ats_analysis(payload),
        )
        .await
    }

    /// Rejects a blank job description before anything is sent.
    pub async fn job_match(
        &self,
        payload: &JobMatchPayload,
    ) -> Result<Dispatched<JobMatchAnalysis>, AssistError> {
        if payload.job_description.trim().is_empty() {
            return Err(AssistError::Validation(
                "Please paste a job description to analyze match compatibility.".to_string(),
            ));
        }

        resolve(
            "analyzeJobMatch",
            self.remote.as_ref().map(|r| r.job_match(payload)),
            || self.local.job_match(payload),
        )
        .await
    }

    pub async fn smart_suggestions(
        &self,
        payload: &SmartSuggestionsPayload,
    ) -> Result<Dispatched<Vec<String>>, AssistError> {
        if payload.section.trim().is_empty() {
            return Err(AssistError::Validation(
                "A section name is required for writing suggestions.".to_string(),
            ));
        }

        resolve(
            "generateSmartSuggestions",
            self.remote.as_ref().map(|r| r.smart_suggestions(payload)),
            || self.local.smart_suggestions(payload),
        )
        .await
    }
}

/// The single decision point between the two strategies: a remote result is
/// used iff it arrived and passed schema validation.
async fn resolve<T, R, L, LF>(
    action: &'static str,
    remote: Option<R>,
    local: L,
) -> Result<Dispatched<T>, AssistError>
where
    R: Future<Output = Result<T, AssistError>>,
    L: FnOnce() -> LF,
    LF: Future<Output = Result<T, AssistError>>,
{
    let Some(remote) = remote else {
        let result = local().await?;
        return Ok(Dispatched {
            result,
            source: ResultSource::Simulated,
        });
    };

    debug!(action, state = ?DispatchState::Sending);
    match remote.await {
        Ok(result) => {
            debug!(action, state = ?DispatchState::Succeeded);
            Ok(Dispatched {
                result,
                source: ResultSource::Remote,
            })
        }
        Err(e) => {
            warn!(action, state = ?DispatchState::Failed, "Remote AI call failed: {e}");
            debug!(action, state = ?DispatchState::Fallback);
            let result = local().await?;
            Ok(Dispatched {
                result,
                source: ResultSource::Fallback,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::assist::transport::TransportError;
    use crate::models::ai::AiRequest;
    use crate::models::resume::{Experience, PersonalInfo, ResumeSnapshot};

    /// Replies with a canned value, or a 500 when `reply` is `None`.
    struct FakeTransport {
        reply: Option<Value>,
        calls: AtomicUsize,
        last_action: std::sync::Mutex<Option<&'static str>>,
    }

    impl FakeTransport {
        fn replying(value: Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(value),
                calls: AtomicUsize::new(0),
                last_action: std::sync::Mutex::new(None),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: AtomicUsize::new(0),
                last_action: std::sync::Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, request: &AiRequest) -> Result<Value, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_action.lock().unwrap() = Some(request.action());
            self.reply.clone().ok_or(TransportError::Status {
                status: 500,
                message: "GEMINI_API_KEY not configured".to_string(),
            })
        }
    }

    fn dispatcher(transport: Arc<FakeTransport>) -> Dispatcher {
        let transport: Arc<dyn Transport> = transport;
        Dispatcher::new(Some(transport))
    }

    fn tech_resume(summary: &str) -> ResumeSnapshot {
        ResumeSnapshot {
            personal_info: PersonalInfo {
                email: "sam@example.com".to_string(),
                phone: "555-0101".to_string(),
                summary: summary.to_string(),
                ..Default::default()
            },
            experiences: vec![Experience {
                company: "Initech".to_string(),
                position: "Engineer".to_string(),
                description: "Kept the lights on".to_string(),
                ..Default::default()
            }],
            target_industry: "technology".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_remote_fractional_score_and_unknown_tag_stay_remote() {
        let transport = FakeTransport::replying(json!({
            "score": 87.5,
            "issues": [{"type": "info", "section": "layout", "issue": "Two columns", "fix": "Use one"}],
            "keywordMatches": []
        }));
        let d = dispatcher(transport);

        let out = d.ats_analysis(&AtsPayload::default()).await.unwrap();
        assert_eq!(out.source, ResultSource::Remote);
        let body = serde_json::to_value(&out.result).unwrap();
        assert_eq!(body["score"], json!(87.5));
        assert_eq!(body["issues"][0]["type"], "info");
    }

    #[tokio::test]
    async fn test_valid_remote_ats_is_returned_verbatim() {
        let transport = FakeTransport::replying(json!({
            "score": 91,
            "issues": [],
            "keywordMatches": [{"keyword": "rust", "found": true, "frequency": 4, "importance": "high"}],
            "formatIssues": [{"issue": "Tables", "impact": "Parsers skip them", "fix": "Use plain text"}]
        }));
        let d = dispatcher(transport.clone());

        let out = d.ats_analysis(&AtsPayload::default()).await.unwrap();
        assert_eq!(out.source, ResultSource::Remote);
        assert_eq!(out.result.score.as_u64(), Some(91));
        assert_eq!(out.result.format_issues.len(), 1);
        assert_eq!(
            *transport.last_action.lock().unwrap(),
            Some("analyzeATSCompatibility")
        );
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back_to_local_ats() {
        let d = dispatcher(FakeTransport::failing());
        let payload = AtsPayload {
            resume_data: tech_resume("Results-driven engineer"),
        };

        let out = d.ats_analysis(&payload).await.unwrap();
        assert_eq!(out.source, ResultSource::Fallback);
        assert!(out.result.score.as_u64().unwrap() >= 70);
        assert!(out
            .result
            .keyword_matches
            .iter()
            .any(|m| m.keyword == "results-driven" && m.found));
    }

    #[tokio::test]
    async fn test_text_reply_falls_back_for_every_action() {
        let d = dispatcher(FakeTransport::replying(json!({"text": "I think it looks great!"})));
        let resume = tech_resume("Led team of 5 engineers");

        let content = d
            .content_suggestions(&ContentSuggestionsPayload {
                resume_data: resume.clone(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(content.source, ResultSource::Fallback);

        let ats = d
            .ats_analysis(&AtsPayload {
                resume_data: resume.clone(),
            })
            .await
            .unwrap();
        assert_eq!(ats.source, ResultSource::Fallback);
        assert!(ats.result.score.as_u64().unwrap() <= 100);

        let job = d
            .job_match(&JobMatchPayload {
                resume_data: resume,
                job_description: "Senior engineer for cloud platform".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(job.source, ResultSource::Fallback);
        assert!(job.result.missing_keywords.len() <= 10);

        let smart = d
            .smart_suggestions(&SmartSuggestionsPayload {
                section: "experience".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(smart.source, ResultSource::Fallback);
        assert_eq!(smart.result[0], "Use action verbs to start each bullet point");
    }

    #[tokio::test]
    async fn test_fallback_content_suggestion_scenario() {
        let d = dispatcher(FakeTransport::failing());
        let out = d
            .content_suggestions(&ContentSuggestionsPayload {
                resume_data: tech_resume("Led team of 5 engineers"),
                target_industry: String::new(),
                job_description: None,
            })
            .await
            .unwrap();

        let summary = out
            .result
            .iter()
            .find(|s| s.section == "summary")
            .expect("summary suggestion");
        assert_eq!(summary.confidence, 0.85);
        assert!(summary
            .keywords
            .iter()
            .any(|k| k == "cloud computing" || k == "agile"));
    }

    #[tokio::test]
    async fn test_remote_array_of_strings_accepted_for_smart_suggestions() {
        let d = dispatcher(FakeTransport::replying(json!(["Quantify impact", "Lead with verbs"])));
        let out = d
            .smart_suggestions(&SmartSuggestionsPayload {
                section: "summary".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(out.source, ResultSource::Remote);
        assert_eq!(out.result, vec!["Quantify impact", "Lead with verbs"]);
    }

    #[tokio::test]
    async fn test_empty_job_description_rejected_without_sending() {
        let transport = FakeTransport::failing();
        let d = dispatcher(transport.clone());

        let result = d
            .job_match(&JobMatchPayload {
                resume_data: ResumeSnapshot::default(),
                job_description: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AssistError::Validation(_))));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_attempt_no_retries() {
        let transport = FakeTransport::failing();
        let d = dispatcher(transport.clone());
        d.ats_analysis(&AtsPayload::default()).await.unwrap();
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_simulated_mode_never_sends() {
        let d = Dispatcher::simulated();
        assert!(d.is_simulated());
        let out = d
            .job_match(&JobMatchPayload {
                resume_data: ResumeSnapshot::default(),
                job_description: "a b c".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(out.source, ResultSource::Simulated);
        assert_eq!(out.result.match_score.as_u64(), Some(0));
    }

    #[tokio::test]
    async fn test_malformed_job_match_falls_back() {
        // matchScore as a string fails the schema.
        let d = dispatcher(FakeTransport::replying(json!({
            "matchScore": "75%",
            "missingKeywords": [],
            "suggestions": []
        })));
        let out = d
            .job_match(&JobMatchPayload {
                resume_data: ResumeSnapshot::default(),
                job_description: "Rust developer".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(out.source, ResultSource::Fallback);
        assert_eq!(out.result.match_score.as_u64(), Some(0));
        assert_eq!(out.result.missing_keywords, vec!["rust", "developer"]);
    }
}
