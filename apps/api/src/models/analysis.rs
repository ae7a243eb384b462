//! Result shapes shared by the remote endpoint and the local heuristics.
//!
//! These types double as the schema for remote responses: a reply that does
//! not deserialize into them is treated as malformed and replaced locally.
//! The schema checks field presence and JSON types only. Remote numbers keep
//! their exact value and unknown tags are carried through as `Other`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestion {
    pub section: String,
    pub original: String,
    pub suggested: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub section: String,
    pub issue: String,
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
    pub frequency: Number,
    pub importance: Importance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatIssue {
    pub issue: String,
    pub impact: String,
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub score: Number, // 0 to 100 when computed locally
    pub issues: Vec<Issue>,
    pub keyword_matches: Vec<KeywordMatch>,
    #[serde(default)]
    pub format_issues: Vec<FormatIssue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSuggestion {
    pub section: String,
    pub action: String,
    pub impact: Importance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchAnalysis {
    pub match_score: Number, // 0 to 100 when computed locally
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub overused_keywords: Vec<String>,
    pub suggestions: Vec<MatchSuggestion>,
}
