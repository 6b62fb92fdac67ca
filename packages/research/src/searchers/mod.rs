//! Web searcher implementations.
//!
//! Two scraped engines (DuckDuckGo primary, Google secondary), a
//! deterministic offline generator, and the tiered chain that falls
//! through them in order.

pub mod duckduckgo;
pub mod google;
pub mod mock;
pub mod tiered;

pub use duckduckgo::DuckDuckGoSearcher;
pub use google::GoogleSearcher;
pub use mock::MockSearcher;
pub use tiered::TieredSearcher;

use std::time::Duration;

/// Browser User-Agent presented to the scraped engines.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout for engine HTTP calls.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
