//! AI Research Assistant Library
//!
//! A research pipeline that breaks a question into sub-questions with an
//! LLM, gathers web results for each one, composes a cited summary, and
//! stores the finished research for similarity lookups.
//!
//! # Design Philosophy
//!
//! - Every external dependency sits behind a trait (model, searcher, store)
//! - Search degrades through tiers instead of failing the request
//! - A failed summary or store never loses the gathered sources
//! - Library handles the pipeline, app handles transport and config
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use research::{ChromaStore, OpenAiModel, ResearchAgent, TieredSearcher};
//!
//! // Wire the production pipeline
//! let model = OpenAiModel::from_env()?;
//! let searcher = TieredSearcher::new();
//! let store = ChromaStore::new("http://localhost:8000", "research_results");
//! let agent = ResearchAgent::new(Arc::new(model), Arc::new(searcher), Arc::new(store));
//!
//! // Run a research request
//! let record = agent.conduct_research("What is quantum computing?", 10).await?;
//! println!("{}", record.summary);
//!
//! // Look up related past research
//! let related = agent.similar_research("quantum computers", 3).await;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (CompletionModel, WebSearcher, ResearchStore)
//! - [`types`] - Research data types
//! - [`pipeline`] - Decompose, summarize, and agent orchestration
//! - [`searchers`] - Search engine implementations (DuckDuckGo, Google, mock, tiered)
//! - [`stores`] - Store implementations (ChromaStore, MemoryStore)
//! - [`ai`] - OpenAI-backed completion model
//! - [`testing`] - Scripted implementations for testing

pub mod ai;
pub mod error;
pub mod pipeline;
pub mod searchers;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{
    CompletionError, DecompositionError, ResearchError, Result, SearchError, StoreError,
};
pub use traits::{
    model::{CompletionModel, CompletionRequest},
    searcher::WebSearcher,
    store::ResearchStore,
};
pub use types::{
    source_host, ResearchQuery, ResearchRecord, SearchResult, SimilarResearch, Source,
    DEFAULT_MAX_RESULTS,
};

// Re-export the agent from pipeline
pub use pipeline::ResearchAgent;

// Re-export pipeline components
pub use pipeline::{
    // Decomposition
    decompose, try_decompose, DECOMPOSE_TEMPERATURE,
    // Summarization
    build_sources, summarize, Findings, SUMMARIZE_MAX_TOKENS, SUMMARIZE_TEMPERATURE,
    SUMMARY_FAILURE_TEXT,
};

// Re-export searchers
pub use searchers::{DuckDuckGoSearcher, GoogleSearcher, MockSearcher, TieredSearcher};

// Re-export stores
pub use stores::{ChromaStore, MemoryStore};

// Re-export the completion model
pub use ai::OpenAiModel;

// Re-export testing utilities
pub use testing::{FailingStore, MockModel, ScriptedSearcher};
