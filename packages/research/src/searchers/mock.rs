//! Deterministic offline searcher, the last tier.
//!
//! When no engine is reachable the pipeline still has to produce
//! something to summarize, so this searcher synthesizes plausible
//! results without touching the network. Known topics get a small
//! canned reference set; everything else gets generic placeholders.

use async_trait::async_trait;

use crate::error::SearchError;
use crate::traits::searcher::WebSearcher;
use crate::types::SearchResult;

struct CannedResult {
    title: &'static str,
    source: &'static str,
    snippet: &'static str,
}

/// Reference results keyed by topic substring (matched case-insensitively).
const CANNED_TOPICS: &[(&str, &[CannedResult])] = &[
    (
        "climate change",
        &[
            CannedResult {
                title: "Climate Change Overview - EPA",
                source: "epa.gov",
                snippet: "Climate change refers to long-term shifts in global temperatures and weather patterns.",
            },
            CannedResult {
                title: "Global Warming Facts - NASA",
                source: "nasa.gov",
                snippet: "Scientific evidence shows that human activities are the primary cause of recent climate change.",
            },
            CannedResult {
                title: "Climate Change Impacts - IPCC",
                source: "ipcc.ch",
                snippet: "Climate change affects ecosystems, human health, and economic systems worldwide.",
            },
        ],
    ),
    (
        "artificial intelligence",
        &[
            CannedResult {
                title: "What is Artificial Intelligence? - MIT",
                source: "mit.edu",
                snippet: "AI is the simulation of human intelligence processes by machines and computer systems.",
            },
            CannedResult {
                title: "Machine Learning Basics - Stanford",
                source: "stanford.edu",
                snippet: "Machine learning is a subset of AI that enables computers to learn from data.",
            },
            CannedResult {
                title: "AI Applications - IEEE",
                source: "ieee.org",
                snippet: "AI applications span across healthcare, finance, transportation, and entertainment.",
            },
        ],
    ),
    (
        "economic",
        &[
            CannedResult {
                title: "Economic Principles - World Bank",
                source: "worldbank.org",
                snippet: "Economic analysis examines how societies allocate scarce resources.",
            },
            CannedResult {
                title: "Global Economic Trends - IMF",
                source: "imf.org",
                snippet: "Current economic indicators show varying growth patterns across regions.",
            },
            CannedResult {
                title: "Economic Policy Impact - OECD",
                source: "oecd.org",
                snippet: "Economic policies significantly influence market dynamics and social outcomes.",
            },
        ],
    ),
];

/// Offline searcher returning deterministic results.
pub struct MockSearcher;

impl MockSearcher {
    /// Create a new mock searcher.
    pub fn new() -> Self {
        Self
    }

    fn generate(query: &str, max_results: usize) -> Vec<SearchResult> {
        let query_lower = query.to_lowercase();

        let canned = CANNED_TOPICS
            .iter()
            .find(|(topic, _)| query_lower.contains(*topic))
            .map(|(_, entries)| *entries);

        match canned {
            Some(entries) => entries
                .iter()
                .take(max_results)
                .map(|entry| SearchResult {
                    title: entry.title.to_string(),
                    link: format!("https://{}", entry.source),
                    snippet: entry.snippet.to_string(),
                    source: entry.source.to_string(),
                    query: query.to_string(),
                })
                .collect(),
            None => (0..max_results)
                .map(|i| SearchResult {
                    title: format!("Research Result {}: {}", i + 1, query),
                    link: format!("https://example.com/research-{}", i + 1),
                    snippet: format!(
                        "This is a research finding related to {}. The information provides insights and analysis on the topic.",
                        query
                    ),
                    source: format!("research-source-{}.com", i + 1),
                    query: query.to_string(),
                })
                .collect(),
        }
    }
}

impl Default for MockSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebSearcher for MockSearcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        Ok(Self::generate(query, max_results))
    }
}
