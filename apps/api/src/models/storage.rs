use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeSnapshot;

/// The last-entered resume as persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResume {
    #[serde(flatten)]
    pub resume: ResumeSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
    Html,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub selected_template: String,
    pub auto_save: bool,
    pub theme: Theme,
    pub export_format: ExportFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub section: String,
    pub suggestion: String,
    pub applied: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRating {
    pub feature: String,
    pub rating: u8, // 1 to 5
    #[serde(default)]
    pub feedback: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    #[serde(default)]
    pub improvements: Vec<Improvement>,
    #[serde(default)]
    pub user_ratings: Vec<UserRating>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_resume_flattens_snapshot() {
        let json = r#"{
            "personalInfo": {"fullName": "Ada Lovelace"},
            "skills": ["math"],
            "jobDescription": "Analyst"
        }"#;
        let stored: StoredResume = serde_json::from_str(json).unwrap();
        assert_eq!(stored.resume.personal_info.full_name, "Ada Lovelace");
        assert_eq!(stored.job_description.as_deref(), Some("Analyst"));
        assert!(stored.last_modified.is_none());
    }

    #[test]
    fn test_preferences_enum_tags() {
        let json = r#"{"selectedTemplate": "modern", "autoSave": true, "theme": "dark", "exportFormat": "docx"}"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.export_format, ExportFormat::Docx);
    }

    #[test]
    fn test_feedback_defaults_to_empty_lists() {
        let feedback: FeedbackData = serde_json::from_str("{}").unwrap();
        assert!(feedback.improvements.is_empty());
        assert!(feedback.user_ratings.is_empty());
    }
}
