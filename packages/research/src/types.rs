//! Core data model for the research pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default number of search results a research request gathers.
pub const DEFAULT_MAX_RESULTS: usize = 10;

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// A research request: the question plus a cap on gathered results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchQuery {
    /// The research question to investigate.
    pub question: String,

    /// Total result budget, split across sub-questions.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl ResearchQuery {
    /// Create a query with the default result budget.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the result budget.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// One result returned from a search engine.
///
/// These are transient: they feed the summarizer and the source list
/// but are never persisted individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Result title as shown by the engine.
    pub title: String,

    /// Destination URL (redirect wrappers already unwrapped).
    pub link: String,

    /// Short description from the results page.
    pub snippet: String,

    /// Host component of the link, for display.
    pub source: String,

    /// Sub-question that produced this result.
    pub query: String,
}

/// A numbered source cited by the research summary.
///
/// Ids are 1-based and match the `[Source N]` citations in the
/// summary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: usize,
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// The persisted outcome of one research request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRecord {
    /// Unique id (uuid v4) assigned when the request starts.
    pub research_id: String,

    /// The original question.
    pub question: String,

    /// Sub-questions the question was broken into.
    pub sub_questions: Vec<String>,

    /// Compiled summary with `[Source N]` citations.
    pub summary: String,

    /// Sources in aggregation order, ids 1..=len.
    pub sources: Vec<Source>,

    /// When the research was conducted.
    pub created_at: DateTime<Utc>,
}

/// One hit from a similarity lookup over stored research.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarResearch {
    pub research_id: String,
    pub question: String,
    pub summary: String,
    pub source_count: usize,

    /// When the stored research was conducted, if the backend kept it.
    pub created_at: Option<DateTime<Utc>>,

    /// Similarity distance (lower is closer), when the backend reports one.
    pub distance: Option<f32>,
}

/// Host component of a link, used as the displayed result source.
///
/// Links without a `//` authority marker are returned as-is.
pub fn source_host(link: &str) -> String {
    if link.contains("//") {
        link.split('/').nth(2).unwrap_or(link).to_string()
    } else {
        link.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_host_from_https_link() {
        assert_eq!(source_host("https://example.com/path/page"), "example.com");
    }

    #[test]
    fn test_source_host_protocol_relative() {
        assert_eq!(source_host("//cdn.example.com/asset"), "cdn.example.com");
    }

    #[test]
    fn test_source_host_without_authority() {
        assert_eq!(source_host("example.com/page"), "example.com/page");
    }

    #[test]
    fn test_max_results_defaults_to_ten() {
        let query: ResearchQuery = serde_json::from_str(r#"{"question": "What is AI?"}"#).unwrap();
        assert_eq!(query.question, "What is AI?");
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_max_results_override() {
        let query: ResearchQuery =
            serde_json::from_str(r#"{"question": "What is AI?", "max_results": 4}"#).unwrap();
        assert_eq!(query.max_results, 4);
    }
}
