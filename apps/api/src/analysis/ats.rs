//! ATS compatibility scorer: structural completeness plus keyword density.
//!
//! Algorithm:
//! 1. Start at 100.
//! 2. Missing phone (−15), missing email (−15), no experience (−20); each
//!    emits a `critical` issue.
//! 3. Subtract `30 − found_fraction × 30` where `found_fraction` is the share
//!    of `ATS_FRIENDLY_PHRASES` present in the aggregated resume text.
//! 4. Clamp to [0, 100] and round.

use serde_json::Number;

use crate::analysis::keywords::match_keywords;
use crate::models::analysis::{AtsAnalysis, Importance, Issue, Severity};
use crate::models::resume::ResumeSnapshot;

const MISSING_PHONE_PENALTY: f64 = 15.0;
const MISSING_EMAIL_PENALTY: f64 = 15.0;
const NO_EXPERIENCE_PENALTY: f64 = 20.0;
const KEYWORD_DENSITY_WEIGHT: f64 = 30.0;

pub const ATS_FRIENDLY_PHRASES: &[&str] = &[
    "results-driven",
    "proven track record",
    "strong communication",
    "team player",
    "problem solving",
    "leadership",
    "detail-oriented",
    "cross-functional",
    "project management",
    "strategic planning",
];

pub fn analyze_ats(resume: &ResumeSnapshot) -> AtsAnalysis {
    let info = &resume.personal_info;
    let mut issues = Vec::new();
    let mut score = 100.0_f64;

    if info.phone.is_empty() {
        issues.push(critical(
            "contact",
            "Missing phone number",
            "Add a phone number to your contact information",
        ));
        score -= MISSING_PHONE_PENALTY;
    }

    if info.email.is_empty() {
        issues.push(critical(
            "contact",
            "Missing email address",
            "Add a professional email address",
        ));
        score -= MISSING_EMAIL_PENALTY;
    }

    if resume.experiences.is_empty() {
        issues.push(critical(
            "experience",
            "No work experience listed",
            "Add at least one position with a description of your achievements",
        ));
        score -= NO_EXPERIENCE_PENALTY;
    }

    // Advisory only, no deduction.
    if info.summary.trim().is_empty() {
        issues.push(Issue {
            severity: Severity::Warning,
            section: "summary".to_string(),
            issue: "Missing professional summary".to_string(),
            fix: "Add a 2-3 sentence summary highlighting your key strengths".to_string(),
        });
    }

    if resume.skills.iter().all(|s| s.trim().is_empty()) {
        issues.push(Issue {
            severity: Severity::Warning,
            section: "skills".to_string(),
            issue: "No skills listed".to_string(),
            fix: "List the tools and competencies the roles you target ask for".to_string(),
        });
    }

    let text = resume.aggregated_text();
    let keyword_matches = match_keywords(&text, ATS_FRIENDLY_PHRASES, Importance::Medium);

    let found = keyword_matches.iter().filter(|m| m.found).count();
    let found_fraction = found as f64 / ATS_FRIENDLY_PHRASES.len() as f64;
    score -= KEYWORD_DENSITY_WEIGHT - found_fraction * KEYWORD_DENSITY_WEIGHT;

    AtsAnalysis {
        score: Number::from(score.clamp(0.0, 100.0).round() as u32),
        issues,
        keyword_matches,
        format_issues: vec![],
    }
}

fn critical(section: &str, issue: &str, fix: &str) -> Issue {
    Issue {
        severity: Severity::Critical,
        section: section.to_string(),
        issue: issue.to_string(),
        fix: fix.to_string(),
    }
}
