//! Vocabulary-based topic detection.
//!
//! A fixed, ordered list of technology-term patterns runs over body
//! text to surface candidate tags. Matches dedupe case-folded in the
//! order patterns are declared; the result truncates to the first
//! five found, not a ranked top five.

use regex::Regex;

use crate::error::AnalysisError;

/// Ordered vocabulary patterns, grouped by domain.
const VOCABULARY: [&str; 10] = [
    r"\b(javascript|js|typescript|ts|react|vue|angular|node|express|nextjs|next\.js)\b",
    r"\b(python|django|flask|fastapi)\b",
    r"\b(css|sass|scss|tailwind|bootstrap)\b",
    r"\b(html|html5|dom)\b",
    r"\b(mongodb|mysql|postgresql|sql|database)\b",
    r"\b(git|github|gitlab|version control)\b",
    r"\b(docker|kubernetes|k8s|devops)\b",
    r"\b(api|rest|graphql|websocket)\b",
    r"\b(testing|jest|mocha|cypress|playwright)\b",
    r"\b(webpack|vite|rollup|bundler)\b",
];

/// Most topics attached to a single report.
const MAX_TOPICS: usize = 5;

/// Scans body text for known technology terms.
pub struct TopicDetector {
    patterns: Vec<Regex>,
}

impl TopicDetector {
    pub fn new() -> Result<Self, AnalysisError> {
        let patterns = VOCABULARY
            .iter()
            .map(|pattern| Regex::new(&format!("(?i){pattern}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Detect topics in body text.
    ///
    /// Deterministic for a fixed input: patterns run in declaration
    /// order and matches within a pattern in text order.
    pub fn detect(&self, body: &str) -> Vec<String> {
        let mut topics: Vec<String> = Vec::new();
        for pattern in &self.patterns {
            for found in pattern.find_iter(body) {
                let topic = found.as_str().to_lowercase();
                if !topics.contains(&topic) {
                    topics.push(topic);
                }
            }
        }
        topics.truncate(MAX_TOPICS);
        topics
    }
}
