//! Typed errors for the research library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur while conducting research.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// Question was empty or whitespace-only
    #[error("research question must not be empty")]
    EmptyQuestion,

    /// Question decomposition failed
    #[error("decomposition failed: {0}")]
    Decomposition(#[from] DecompositionError),

    /// Web search failed
    #[error("search failed: {0}")]
    Search(#[from] SearchError),

    /// LLM completion failed
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    /// Result storage failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from breaking a question into sub-questions.
#[derive(Debug, Error)]
pub enum DecompositionError {
    /// Underlying LLM call failed
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    /// Model reply was not a JSON list of strings
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Model returned an empty list
    #[error("model returned no sub-questions")]
    Empty,
}

/// Errors from the web search engines.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Engine responded with a non-success status
    #[error("search engine returned status {status}")]
    Status { status: u16 },

    /// Response HTML could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors from the LLM completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Client is misconfigured (missing API key)
    #[error("configuration error: {0}")]
    Config(String),

    /// Request transport or response decoding failed
    #[error("model request failed: {0}")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Provider replied with a non-success status
    #[error("model API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider reply carried no choices
    #[error("model returned an empty reply")]
    Empty,
}

/// Errors from the research result store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend request failed
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Backend replied with an unexpected payload
    #[error("invalid store response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for research operations.
pub type Result<T> = std::result::Result<T, ResearchError>;
