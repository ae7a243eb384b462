use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::resume::ResumeSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestionsPayload {
    #[serde(default)]
    pub resume_data: ResumeSnapshot,
    /// Falls back to `resume_data.target_industry` when blank.
    #[serde(default)]
    pub target_industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

impl ContentSuggestionsPayload {
    pub fn industry(&self) -> &str {
        if self.target_industry.trim().is_empty() {
            &self.resume_data.target_industry
        } else {
            &self.target_industry
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsPayload {
    #[serde(default)]
    pub resume_data: ResumeSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchPayload {
    #[serde(default)]
    pub resume_data: ResumeSnapshot,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartSuggestionsPayload {
    pub section: String,
    #[serde(default)]
    pub current_content: String,
    #[serde(default)]
    pub context: Value,
}

/// Tagged request sent to the generative endpoint: `{"action": ..., "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum AiRequest {
    GenerateContentSuggestions(ContentSuggestionsPayload),
    #[serde(rename = "analyzeATSCompatibility")]
    AnalyzeAtsCompatibility(AtsPayload),
    AnalyzeJobMatch(JobMatchPayload),
    GenerateSmartSuggestions(SmartSuggestionsPayload),
}

impl AiRequest {
    pub fn action(&self) -> &'static str {
        match self {
            AiRequest::GenerateContentSuggestions(_) => "generateContentSuggestions",
            AiRequest::AnalyzeAtsCompatibility(_) => "analyzeATSCompatibility",
            AiRequest::AnalyzeJobMatch(_) => "analyzeJobMatch",
            AiRequest::GenerateSmartSuggestions(_) => "generateSmartSuggestions",
        }
    }
}
