//! Ordered fallback chain over the individual engines.
//!
//! Tiers are tried in order; a tier is passed over when it errors or
//! returns zero results. With the mock generator as the last tier the
//! chain itself never errors, which is what lets the rest of the
//! pipeline treat search as infallible.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::searchers::{DuckDuckGoSearcher, GoogleSearcher, MockSearcher};
use crate::traits::searcher::WebSearcher;
use crate::types::SearchResult;

/// Fallback chain of searchers.
pub struct TieredSearcher {
    tiers: Vec<Arc<dyn WebSearcher>>,
}

impl TieredSearcher {
    /// Production chain: DuckDuckGo, then Google, then canned results.
    pub fn new() -> Self {
        Self {
            tiers: vec![
                Arc::new(DuckDuckGoSearcher::new()),
                Arc::new(GoogleSearcher::new()),
                Arc::new(MockSearcher::new()),
            ],
        }
    }

    /// Build a chain from explicit tiers, tried in order.
    pub fn with_tiers(tiers: Vec<Arc<dyn WebSearcher>>) -> Self {
        Self { tiers }
    }
}

impl Default for TieredSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebSearcher for TieredSearcher {
    fn name(&self) -> &str {
        "tiered"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        for tier in &self.tiers {
            match tier.search(query, max_results).await {
                Ok(results) if !results.is_empty() => {
                    tracing::debug!(
                        engine = tier.name(),
                        count = results.len(),
                        "search tier returned results"
                    );
                    return Ok(results);
                }
                Ok(_) => {
                    tracing::debug!(engine = tier.name(), "search tier empty, trying next");
                }
                Err(e) => {
                    tracing::warn!(engine = tier.name(), error = %e, "search tier failed, trying next");
                }
            }
        }

        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedSearcher;

    fn result(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: format!("https://example.org/{title}"),
            snippet: "snippet".to_string(),
            source: "example.org".to_string(),
            query: "q".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_tier_wins() {
        let primary = Arc::new(ScriptedSearcher::returning("primary", vec![result("a")]));
        let fallback = Arc::new(ScriptedSearcher::returning("fallback", vec![result("b")]));

        let tiers: Vec<Arc<dyn WebSearcher>> = vec![primary.clone(), fallback.clone()];
        let searcher = TieredSearcher::with_tiers(tiers);

        let results = searcher.search("q", 5).await.unwrap();
        assert_eq!(results[0].title, "a");
        assert_eq!(primary.calls().len(), 1);
        assert!(fallback.calls().is_empty());
    }

    #[tokio::test]
    async fn test_error_falls_through() {
        let primary = Arc::new(ScriptedSearcher::failing("primary", "connection refused"));
        let fallback = Arc::new(ScriptedSearcher::returning("fallback", vec![result("b")]));

        let tiers: Vec<Arc<dyn WebSearcher>> = vec![primary.clone(), fallback.clone()];
        let searcher = TieredSearcher::with_tiers(tiers);

        let results = searcher.search("q", 5).await.unwrap();
        assert_eq!(results[0].title, "b");
        assert_eq!(fallback.calls(), vec!["q".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_falls_through() {
        let primary = Arc::new(ScriptedSearcher::empty("primary"));
        let fallback = Arc::new(ScriptedSearcher::returning("fallback", vec![result("b")]));

        let tiers: Vec<Arc<dyn WebSearcher>> = vec![primary.clone(), fallback.clone()];
        let searcher = TieredSearcher::with_tiers(tiers);

        let results = searcher.search("q", 5).await.unwrap();
        assert_eq!(results[0].title, "b");
    }

    #[tokio::test]
    async fn test_all_tiers_exhausted_yields_empty() {
        let tiers: Vec<Arc<dyn WebSearcher>> = vec![
            Arc::new(ScriptedSearcher::failing("primary", "down")),
            Arc::new(ScriptedSearcher::empty("fallback")),
        ];
        let searcher = TieredSearcher::with_tiers(tiers);

        let results = searcher.search("q", 5).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_mock_tail_guarantees_results() {
        let tiers: Vec<Arc<dyn WebSearcher>> = vec![
            Arc::new(ScriptedSearcher::failing("primary", "down")),
            Arc::new(MockSearcher::new()),
        ];
        let searcher = TieredSearcher::with_tiers(tiers);

        let results = searcher.search("obscure topic", 3).await.unwrap();
        assert_eq!(results.len(), 3);
    }
}
