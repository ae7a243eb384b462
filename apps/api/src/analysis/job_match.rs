//! Job-match scorer: share of job-description keywords present in the resume.

use serde_json::Number;

use crate::analysis::keywords::extract_keywords;
use crate::models::analysis::{Importance, JobMatchAnalysis, MatchSuggestion};
use crate::models::resume::ResumeSnapshot;

const MAX_MISSING_KEYWORDS: usize = 10;
const SUGGESTED_KEYWORDS: usize = 3;
const LOW_MATCH_THRESHOLD: u32 = 60;

pub fn analyze_job_match(resume: &ResumeSnapshot, job_description: &str) -> JobMatchAnalysis {
    let job_keywords = extract_keywords(job_description);
    let resume_keywords = extract_keywords(&resume.aggregated_text());

    // Both sides are already lowercase.
    let (matched, missing): (Vec<&String>, Vec<&String>) = job_keywords
        .iter()
        .partition(|job_kw| resume_keywords.iter().any(|r| r.contains(job_kw.as_str())));

    let match_score = if job_keywords.is_empty() {
        0
    } else {
        ((matched.len() as f64 / job_keywords.len() as f64) * 100.0)
            .round()
            .clamp(0.0, 100.0) as u32
    };

    let missing_keywords: Vec<String> = missing
        .into_iter()
        .take(MAX_MISSING_KEYWORDS)
        .cloned()
        .collect();

    let mut suggestions = Vec::new();

    if !missing_keywords.is_empty() {
        let top = missing_keywords
            .iter()
            .take(SUGGESTED_KEYWORDS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        suggestions.push(MatchSuggestion {
            section: "summary".to_string(),
            action: format!("Incorporate key terms from the job description: {top}"),
            impact: Importance::High,
        });
    }

    if match_score < LOW_MATCH_THRESHOLD {
        suggestions.push(MatchSuggestion {
            section: "experience".to_string(),
            action: "Rewrite experience descriptions to mirror the responsibilities and \
                     requirements in the job description"
                .to_string(),
            impact: Importance::High,
        });
    }

    JobMatchAnalysis {
        match_score: Number::from(match_score),
        missing_keywords,
        overused_keywords: vec![],
        suggestions,
    }
}
