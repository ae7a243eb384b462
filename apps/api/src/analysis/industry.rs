//! Static industry → keyword phrase table used by the content suggester.

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "cloud computing",
            "agile",
            "software development",
            "machine learning",
            "devops",
            "api design",
            "scalability",
            "cybersecurity",
        ],
    ),
    (
        "healthcare",
        &[
            "patient care",
            "hipaa compliance",
            "clinical documentation",
            "electronic health records",
            "quality improvement",
            "care coordination",
        ],
    ),
    (
        "finance",
        &[
            "financial analysis",
            "risk management",
            "forecasting",
            "regulatory compliance",
            "budgeting",
            "financial modeling",
        ],
    ),
    (
        "marketing",
        &[
            "digital marketing",
            "brand strategy",
            "seo",
            "campaign management",
            "content strategy",
            "market research",
        ],
    ),
    (
        "education",
        &[
            "curriculum development",
            "classroom management",
            "student engagement",
            "assessment design",
            "differentiated instruction",
        ],
    ),
    (
        "sales",
        &[
            "revenue growth",
            "pipeline management",
            "client relationships",
            "crm",
            "negotiation",
            "quota attainment",
        ],
    ),
];

/// Used when the target industry is blank or not in the table.
const GENERAL_KEYWORDS: &[&str] = &[
    "proven track record",
    "strategic thinking",
    "problem solving",
    "cross-functional collaboration",
    "stakeholder communication",
];

/// Looks up the keyword phrases for an industry (case-insensitive, trimmed).
pub fn keywords_for_industry(industry: &str) -> &'static [&'static str] {
    let industry = industry.trim().to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == industry)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(GENERAL_KEYWORDS)
}
