//! Google searcher, the secondary engine.
//!
//! A simplified scrape of the standard results page. Google rate-limits
//! and reshapes this page freely, so the tiered chain only reaches for
//! it after DuckDuckGo comes up empty.

use async_trait::async_trait;
use reqwest::{header, Client};
use scraper::{Html, Selector};

use crate::error::SearchError;
use crate::searchers::{BROWSER_USER_AGENT, REQUEST_TIMEOUT};
use crate::traits::searcher::WebSearcher;
use crate::types::{source_host, SearchResult};

const SEARCH_URL: &str = "https://www.google.com/search";

/// Shown when a result container carries no snippet element.
const NO_DESCRIPTION: &str = "No description available";

/// Google HTML scraper.
pub struct GoogleSearcher {
    client: Client,
}

impl GoogleSearcher {
    /// Create a new Google searcher.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for GoogleSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebSearcher for GoogleSearcher {
    fn name(&self) -> &str {
        "google"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "Google search");

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[("q", query)])
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(Box::new(e)))?;

        tracing::trace!(bytes = html.len(), "Google response received");

        parse_google_html(&html, query, max_results)
    }
}

/// Parse a Google results page into search results.
///
/// Separate function so it can be tested against fixture HTML. Same
/// windowing as DuckDuckGo: the first `max_results` containers are
/// examined, and containers missing a title or link are skipped.
pub(crate) fn parse_google_html(
    html: &str,
    query: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse("div.g")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse("h3")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let link_sel = Selector::parse("a")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;
    let snippet_sel = Selector::parse("span[data-ved]")
        .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel).take(max_results) {
        let title_el = match element.select(&title_sel).next() {
            Some(el) => el,
            None => continue,
        };
        let link_el = match element.select(&link_sel).next() {
            Some(el) => el,
            None => continue,
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        let link = link_el.value().attr("href").unwrap_or_default().to_string();
        let snippet = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let source = source_host(&link);

        results.push(SearchResult {
            title,
            link,
            snippet,
            source,
            query: query.to_string(),
        });
    }

    tracing::debug!(count = results.len(), "Google results parsed");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_GOOGLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="g">
    <a href="https://www.worldbank.org/en/topic/economics">
        <h3>Economic Analysis - World Bank</h3>
    </a>
    <span data-ved="2ahUK1">Economic analysis examines how societies allocate resources.</span>
</div>
<div class="g">
    <a href="https://www.imf.org/en/Publications">
        <h3>Publications - IMF</h3>
    </a>
</div>
<div class="g">
    <span data-ved="2ahUK3">An orphaned snippet with no title or link.</span>
</div>
</body>
</html>"#;

    #[test]
    fn test_parse_extracts_results() {
        let results = parse_google_html(MOCK_GOOGLE_HTML, "economic trends", 10).unwrap();

        // Third container has no h3 and is skipped.
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "Economic Analysis - World Bank");
        assert_eq!(results[0].link, "https://www.worldbank.org/en/topic/economics");
        assert_eq!(results[0].source, "www.worldbank.org");
        assert!(results[0].snippet.contains("allocate resources"));
        assert_eq!(results[0].query, "economic trends");
    }

    #[test]
    fn test_parse_defaults_missing_snippet() {
        let results = parse_google_html(MOCK_GOOGLE_HTML, "economic trends", 10).unwrap();
        assert_eq!(results[1].snippet, "No description available");
    }

    #[test]
    fn test_parse_window_counts_skipped_containers() {
        let results = parse_google_html(MOCK_GOOGLE_HTML, "q", 3).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_parse_empty_html() {
        let results = parse_google_html("<html><body></body></html>", "q", 10).unwrap();
        assert!(results.is_empty());
    }
}
