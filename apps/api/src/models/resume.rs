use serde::{Deserialize, Serialize};

/// Contact block and free-text summary entered on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// Snapshot of everything the wizard has collected so far.
///
/// Every field defaults to empty so half-finished drafts can still be scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeSnapshot {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub target_industry: String,
}

impl ResumeSnapshot {
    /// Joins every scoreable free-text field into one space-separated blob:
    /// summary, each experience description and position, each education
    /// field and degree, then all skills.
    pub fn aggregated_text(&self) -> String {
        let mut texts: Vec<&str> = Vec::new();

        if !self.personal_info.summary.is_empty() {
            texts.push(&self.personal_info.summary);
        }

        for exp in &self.experiences {
            texts.push(&exp.description);
            texts.push(&exp.position);
        }

        for edu in &self.education {
            texts.push(&edu.field);
            texts.push(&edu.degree);
        }

        texts.extend(self.skills.iter().map(String::as_str));

        texts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_snapshot_deserializes_with_defaults() {
        let json = r#"{"personalInfo": {"email": "a@b.com"}, "skills": ["Rust"]}"#;
        let resume: ResumeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_info.email, "a@b.com");
        assert!(resume.personal_info.phone.is_empty());
        assert!(resume.experiences.is_empty());
        assert_eq!(resume.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_linked_in_uses_ui_field_name() {
        let json = r#"{"personalInfo": {"linkedIn": "linkedin.com/in/x"}}"#;
        let resume: ResumeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_info.linked_in, "linkedin.com/in/x");
    }

    #[test]
    fn test_aggregated_text_order() {
        let resume = ResumeSnapshot {
            personal_info: PersonalInfo {
                summary: "Summary".to_string(),
                ..Default::default()
            },
            experiences: vec![Experience {
                position: "Engineer".to_string(),
                description: "Built things".to_string(),
                ..Default::default()
            }],
            education: vec![Education {
                degree: "BSc".to_string(),
                field: "Physics".to_string(),
                ..Default::default()
            }],
            skills: vec!["Rust".to_string(), "Go".to_string()],
            target_industry: String::new(),
        };

        assert_eq!(
            resume.aggregated_text(),
            "Summary Built things Engineer Physics BSc Rust Go"
        );
    }

    #[test]
    fn test_aggregated_text_empty_resume() {
        assert_eq!(ResumeSnapshot::default().aggregated_text(), "");
    }
}
