// Per-action prompt constants for the generative proxy.
// Templates use `{placeholder}` markers filled in one pass by `fill`.

use serde_json::Value;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::models::ai::AiRequest;

pub const CONTENT_SUGGESTIONS_SYSTEM: &str = "You are an expert resume writer and career coach. \
    Provide specific, actionable content suggestions that improve ATS compatibility \
    and highlight achievements.";

pub const CONTENT_SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Analyze this resume data for the {industry} industry and suggest improvements:

Resume Data: {resume}

{job_description}

Provide specific suggestions for:
1. Professional summary enhancement with industry keywords
2. Work experience bullet points that highlight achievements with metrics
3. Skills optimization for ATS scanning

Return a JSON array of suggestion objects with this EXACT schema:
[{"section": "summary", "original": "...", "suggested": "...", "reason": "...", "keywords": ["..."], "confidence": 0.8}]"#;

pub const ATS_SYSTEM: &str = "You are an ATS (Applicant Tracking System) expert. \
    Analyze resume compatibility and provide a detailed score with specific issues and fixes.";

pub const ATS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for ATS compatibility:

{resume}

Provide analysis including:
1. Overall ATS score (0-100)
2. Critical issues that prevent parsing
3. Warning issues that reduce ranking
4. Keyword density analysis
5. Format issues

Return a JSON object with this EXACT schema:
{
  "score": 0,
  "issues": [{"type": "critical | warning | suggestion", "section": "...", "issue": "...", "fix": "..."}],
  "keywordMatches": [{"keyword": "...", "found": true, "frequency": 1, "importance": "high | medium | low"}],
  "formatIssues": [{"issue": "...", "impact": "...", "fix": "..."}]
}"#;

pub const JOB_MATCH_SYSTEM: &str = "You are a job matching expert. \
    Analyze how well a resume matches a specific job description.";

pub const JOB_MATCH_PROMPT_TEMPLATE: &str = r#"Compare this resume against the job description:

Resume: {resume}

Job Description: {job_description}

Provide:
1. Match percentage (0-100)
2. Missing keywords from the job description
3. Overused keywords that seem forced
4. Specific suggestions to improve the match

Return a JSON object with this EXACT schema:
{
  "matchScore": 0,
  "missingKeywords": ["..."],
  "overusedKeywords": ["..."],
  "suggestions": [{"section": "...", "action": "...", "impact": "high | medium | low"}]
}"#;

pub const SMART_SUGGESTIONS_SYSTEM: &str =
    "You are a writing coach specializing in professional resume content.";

pub const SMART_SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Provide smart writing suggestions for the {section} section:

Current Content: {current_content}
Context: {context}

Provide 3-5 specific, actionable suggestions to improve this section.
Return a JSON array of strings."#;

/// Builds `(system_instruction, prompt)` for a request.
pub fn build_prompt(request: &AiRequest) -> (String, String) {
    let (system, prompt) = match request {
        AiRequest::GenerateContentSuggestions(p) => {
            let job_description = p
                .job_description
                .as_deref()
                .filter(|jd| !jd.trim().is_empty())
                .map(|jd| format!("Job Description: {jd}"))
                .unwrap_or_default();
            (
                CONTENT_SUGGESTIONS_SYSTEM,
                fill(
                    CONTENT_SUGGESTIONS_PROMPT_TEMPLATE,
                    &[
                        ("industry", p.industry()),
                        ("resume", pretty(&p.resume_data).as_str()),
                        ("job_description", job_description.as_str()),
                    ],
                ),
            )
        }
        AiRequest::AnalyzeAtsCompatibility(p) => (
            ATS_SYSTEM,
            fill(ATS_PROMPT_TEMPLATE, &[("resume", pretty(&p.resume_data).as_str())]),
        ),
        AiRequest::AnalyzeJobMatch(p) => (
            JOB_MATCH_SYSTEM,
            fill(
                JOB_MATCH_PROMPT_TEMPLATE,
                &[
                    ("resume", pretty(&p.resume_data).as_str()),
                    ("job_description", p.job_description.as_str()),
                ],
            ),
        ),
        AiRequest::GenerateSmartSuggestions(p) => (
            SMART_SUGGESTIONS_SYSTEM,
            fill(
                SMART_SUGGESTIONS_PROMPT_TEMPLATE,
                &[
                    ("section", p.section.as_str()),
                    ("current_content", p.current_content.as_str()),
                    ("context", compact(&p.context).as_str()),
                ],
            ),
        ),
    };

    (format!("{system} {JSON_ONLY_SYSTEM}"), prompt)
}

/// Replaces each `{name}` marker in `template` with its value in a single
/// pass. Inserted values are never rescanned, so braces in user text stay
/// literal. Braces that do not form a known marker are copied through.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let marker = values
            .iter()
            .find(|(name, _)| tail.starts_with(name) && tail[name.len()..].starts_with('}'));

        match marker {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn compact(value: &Value) -> String {
    if value.is_null() {
        "{}".to_string()
    } else {
        value.to_string()
    }
}
