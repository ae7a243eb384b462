// Local heuristics: keyword extraction and matching, text enhancement, ATS and
// job-match scoring, content suggestions. Pure functions over their inputs,
// used both as the dispatcher's fallback and standalone in simulated mode.

pub mod ats;
pub mod content;
pub mod enhancer;
pub mod industry;
pub mod job_match;
pub mod keywords;
