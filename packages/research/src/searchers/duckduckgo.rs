//! DuckDuckGo searcher, the primary engine.
//!
//! Scrapes the HTML-only endpoint at `https://html.duckduckgo.com/html/`,
//! which requires no JavaScript and tolerates automated requests.

use async_trait::async_trait;
use reqwest::{header, Client};
use scraper::{Html, Selector};
use url::Url;

use crate::error::SearchError;
use crate::searchers::{BROWSER_USER_AGENT, REQUEST_TIMEOUT};
use crate::traits::searcher::WebSearcher;
use crate::types::{source_host, SearchResult};

const SEARCH_URL: &str = "https://html.duckduckgo.com/html/";

/// DuckDuckGo HTML scraper.
pub struct DuckDuckGoSearcher {
    client: Client,
}

impl DuckDuckGoSearcher {
    /// Create a new DuckDuckGo searcher.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Resolve an href from a results page to a destination URL.
    ///
    /// DuckDuckGo wraps destinations in a redirect like
    /// `/l/?uddg=https%3A%2F%2Fexample.com&rut=...`; the `uddg`
    /// parameter holds the real URL. Direct hrefs pass through, and
    /// anything unparseable is kept verbatim.
    fn extract_url(href: &str) -> String {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else if href.starts_with('/') {
            format!("https://duckduckgo.com{href}")
        } else {
            href.to_string()
        };

        let parsed = match Url::parse(&full_href) {
            Ok(url) => url,
            Err(_) => return href.to_string(),
        };

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
                .unwrap_or(full_href)
        } else {
            full_href
        }
    }
}

impl Default for DuckDuckGoSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebSearcher for DuckDuckGoSearcher {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");

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

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html, query, max_results)
    }
}

/// Parse a DuckDuckGo HTML response into search results.
///
/// Separate function so it can be tested against fixture HTML. The
/// first `max_results` result containers are considered; containers
/// missing a title or snippet are skipped without reducing the window.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    query: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse("div.result")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let title_sel = Selector::parse("a.result__a")
        .map_err(|e| SearchError::Parse(format!("invalid title selector: {e:?}")))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| SearchError::Parse(format!("invalid snippet selector: {e:?}")))?;

    let mut results = Vec::new();

    for element in document.select(&result_sel).take(max_results) {
        let title_el = match element.select(&title_sel).next() {
            Some(el) => el,
            None => continue,
        };
        let snippet_el = match element.select(&snippet_sel).next() {
            Some(el) => el,
            None => continue,
        };

        let title = title_el.text().collect::<String>().trim().to_string();
        let href = title_el.value().attr("href").unwrap_or_default();
        let link = DuckDuckGoSearcher::extract_url(href);
        let snippet = snippet_el.text().collect::<String>().trim().to_string();
        let source = source_host(&link);

        results.push(SearchResult {
            title,
            link,
            snippet,
            source,
            query: query.to_string(),
        });
    }

    tracing::debug!(count = results.len(), "DuckDuckGo results parsed");
    Ok(results)
}
