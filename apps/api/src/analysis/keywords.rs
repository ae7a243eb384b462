//! Keyword extraction and literal keyword matching over free text.

use std::collections::HashSet;

use regex::RegexBuilder;
use serde_json::Number;

use crate::models::analysis::{Importance, KeywordMatch};

/// Tokens at or below this length are never keywords.
const MIN_KEYWORD_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "been", "were", "said",
];

/// Extracts distinct lowercase keywords from `text`, in first-seen order.
///
/// Anything other than ASCII letters, digits, `_` and whitespace becomes
/// whitespace, so accented letters split words. Tokens of length <= 3 and
/// stop words are dropped. No stemming.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut seen = HashSet::new();
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN)
        .filter(|word| !STOP_WORDS.contains(word))
        .filter(|word| seen.insert(word.to_string()))
        .map(str::to_string)
        .collect()
}

/// Counts non-overlapping, case-insensitive literal occurrences of `keyword`.
///
/// The phrase is escaped before compiling, so "C++" or "R&D" are matched
/// literally.
pub fn count_occurrences(text: &str, keyword: &str) -> u32 {
    if keyword.is_empty() {
        return 0;
    }

    match RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern.find_iter(text).count() as u32,
        Err(e) => {
            tracing::warn!("Could not build matcher for keyword {keyword:?}: {e}");
            0
        }
    }
}

/// Builds one `KeywordMatch` per keyword against the text blob.
pub fn match_keywords(text: &str, keywords: &[&str], importance: Importance) -> Vec<KeywordMatch> {
    keywords
        .iter()
        .map(|&keyword| {
            let frequency = count_occurrences(text, keyword);
            KeywordMatch {
                keyword: keyword.to_string(),
                found: frequency > 0,
                frequency: Number::from(frequency),
                importance: importance.clone(),
            }
        })
        .collect()
}

/// Returns the keywords that do not appear (case-insensitively) in `text`.
pub fn find_missing_keywords<'a>(text: &str, keywords: &[&'a str]) -> Vec<&'a str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| count_occurrences(text, keyword) == 0)
        .collect()
}
