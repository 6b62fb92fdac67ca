//! Web searcher trait for result discovery.
//!
//! Each implementation scrapes or synthesizes results for one engine.
//! The pipeline composes them into a fallback chain (see
//! [`crate::searchers::TieredSearcher`]), so individual engines are
//! free to fail; the chain decides what failure means.

use async_trait::async_trait;

use crate::error::SearchError;
use crate::types::SearchResult;

/// Web search trait.
///
/// # Implementations
///
/// - [`crate::searchers::DuckDuckGoSearcher`] - DuckDuckGo HTML scrape
/// - [`crate::searchers::GoogleSearcher`] - Google HTML scrape
/// - [`crate::searchers::MockSearcher`] - deterministic offline results
/// - [`crate::searchers::TieredSearcher`] - ordered fallback over the above
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Engine name, used in tier logging.
    fn name(&self) -> &str;

    /// Search for the query, returning at most `max_results` results.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;
}
