//! Local content suggestions and per-section writing tips.

use std::collections::HashSet;

use crate::analysis::enhancer::enhance_text;
use crate::analysis::industry::keywords_for_industry;
use crate::analysis::keywords::{extract_keywords, find_missing_keywords};
use crate::models::analysis::ContentSuggestion;
use crate::models::resume::ResumeSnapshot;

const MAX_INJECTED_KEYWORDS: usize = 3;
const SUMMARY_CONFIDENCE: f64 = 0.85;
const EXPERIENCE_CONFIDENCE: f64 = 0.75;
const SKILLS_CONFIDENCE: f64 = 0.7;

/// Builds content suggestions by injecting keywords the resume lacks.
///
/// Keyword priority: job-description keywords missing from the resume (when a
/// description is given), then industry-table phrases missing from the resume.
pub fn suggest_content(
    resume: &ResumeSnapshot,
    target_industry: &str,
    job_description: Option<&str>,
) -> Vec<ContentSuggestion> {
    let text = resume.aggregated_text();
    let industry_keywords = keywords_for_industry(target_industry);

    let mut candidates: Vec<String> = Vec::new();
    if let Some(jd) = job_description.filter(|jd| !jd.trim().is_empty()) {
        let jd_keywords = extract_keywords(jd);
        let jd_refs: Vec<&str> = jd_keywords.iter().map(String::as_str).collect();
        candidates.extend(find_missing_keywords(&text, &jd_refs).into_iter().map(str::to_string));
    }
    candidates.extend(
        find_missing_keywords(&text, industry_keywords)
            .into_iter()
            .map(str::to_string),
    );

    let mut seen = HashSet::new();
    let keywords: Vec<String> = candidates
        .into_iter()
        .filter(|k| seen.insert(k.to_lowercase()))
        .take(MAX_INJECTED_KEYWORDS)
        .collect();

    let industry_label = if target_industry.trim().is_empty() {
        "your target"
    } else {
        target_industry.trim()
    };

    let mut suggestions = Vec::new();

    let summary = resume.personal_info.summary.trim();
    if !summary.is_empty() && !keywords.is_empty() {
        suggestions.push(ContentSuggestion {
            section: "summary".to_string(),
            original: resume.personal_info.summary.clone(),
            suggested: enhance_text(summary, &keywords),
            reason: format!("Added {industry_label} industry keywords and achievement language"),
            keywords: keywords.clone(),
            confidence: SUMMARY_CONFIDENCE,
        });
    }

    if !keywords.is_empty() {
        for exp in resume.experiences.iter().filter(|e| !e.description.trim().is_empty()) {
            // Rotate so each entry leads with a different keyword.
            let offset = suggestions.len() % keywords.len();
            let rotated: Vec<&String> = keywords.iter().cycle().skip(offset).take(2).collect();
            let rotated: Vec<String> = dedup_preserving(rotated);

            suggestions.push(ContentSuggestion {
                section: "experience".to_string(),
                original: exp.description.clone(),
                suggested: enhance_text(exp.description.trim(), &rotated),
                reason: format!(
                    "Tie your work at {} to keywords recruiters search for",
                    if exp.company.is_empty() { "this role" } else { exp.company.as_str() }
                ),
                keywords: rotated,
                confidence: EXPERIENCE_CONFIDENCE,
            });
        }
    }

    let skills_text = resume.skills.join(" ");
    let missing_skills: Vec<String> = find_missing_keywords(&skills_text, industry_keywords)
        .into_iter()
        .take(MAX_INJECTED_KEYWORDS)
        .map(str::to_string)
        .collect();
    if !missing_skills.is_empty() {
        let mut suggested_skills = resume.skills.clone();
        suggested_skills.extend(missing_skills.iter().cloned());
        suggestions.push(ContentSuggestion {
            section: "skills".to_string(),
            original: resume.skills.join(", "),
            suggested: suggested_skills.join(", "),
            reason: "List in-demand skills explicitly so ATS keyword scans pick them up"
                .to_string(),
            keywords: missing_skills,
            confidence: SKILLS_CONFIDENCE,
        });
    }

    suggestions
}

fn dedup_preserving(keywords: Vec<&String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .filter(|k| seen.insert(*k))
        .cloned()
        .collect()
}

/// Fixed writing tips for a resume section.
pub fn smart_suggestions(section: &str) -> Vec<String> {
    let tips: &[&str] = match section.trim().to_lowercase().as_str() {
        "summary" => &[
            "Start with your years of experience and key expertise",
            "Include specific industry achievements with metrics",
            "End with your professional goal or value proposition",
        ],
        "experience" => &[
            "Use action verbs to start each bullet point",
            "Include specific metrics and percentages",
            "Focus on achievements rather than job duties",
        ],
        _ => &[
            "Use specific examples",
            "Include measurable results",
            "Keep content relevant",
        ],
    };
    tips.iter().map(|t| t.to_string()).collect()
}
