//! Testing utilities including scripted implementations.
//!
//! These are useful for testing applications that use the research
//! library without making real model, search, or store calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{CompletionError, SearchError, StoreError};
use crate::traits::model::{CompletionModel, CompletionRequest};
use crate::traits::searcher::WebSearcher;
use crate::traits::store::ResearchStore;
use crate::types::{ResearchRecord, SearchResult, SimilarResearch};

/// A scripted completion model for testing.
///
/// Replies are queued in call order with `with_reply` / `with_failure`.
/// Calls beyond the script fail, so a fresh mock also serves as an
/// always-failing model.
#[derive(Default)]
pub struct MockModel {
    script: Arc<RwLock<VecDeque<ScriptedCompletion>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<CompletionRequest>>>,
}

enum ScriptedCompletion {
    Reply(String),
    Failure(String),
}

impl MockModel {
    /// Create a new mock model with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(ScriptedCompletion::Reply(reply.into()));
        self
    }

    /// Queue a failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(ScriptedCompletion::Failure(message.into()));
        self
    }

    /// Get all requests made to this mock.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        self.calls.write().unwrap().push(request);

        match self.script.write().unwrap().pop_front() {
            Some(ScriptedCompletion::Reply(reply)) => Ok(reply),
            Some(ScriptedCompletion::Failure(message)) => {
                Err(CompletionError::Request(message.into()))
            }
            None => Err(CompletionError::Request("no scripted reply".into())),
        }
    }
}

/// A scripted web searcher for testing tier and pipeline behavior.
///
/// Returns one fixed outcome for every query and records the queries
/// it was asked.
pub struct ScriptedSearcher {
    name: String,
    outcome: ScriptedSearch,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

enum ScriptedSearch {
    Results(Vec<SearchResult>),
    Failure(String),
}

impl ScriptedSearcher {
    /// A searcher that returns the given results for every query.
    pub fn returning(name: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            name: name.into(),
            outcome: ScriptedSearch::Results(results),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A searcher that finds nothing.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::returning(name, Vec::new())
    }

    /// A searcher that fails every query.
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: ScriptedSearch::Failure(message.into()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the queries made to this searcher.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for ScriptedSearcher {
    fn name(&self) -> &str {
        &self.name
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.write().unwrap().push(query.to_string());

        match &self.outcome {
            ScriptedSearch::Results(results) => {
                Ok(results.iter().take(max_results).cloned().collect())
            }
            ScriptedSearch::Failure(message) => Err(SearchError::Http(message.clone().into())),
        }
    }
}

/// A store whose every operation fails, for exercising degradation.
pub struct FailingStore;

#[async_trait]
impl ResearchStore for FailingStore {
    async fn store(&self, _record: &ResearchRecord) -> Result<(), StoreError> {
        Err(StoreError::Backend("scripted store failure".into()))
    }

    async fn query_similar(
        &self,
        _question: &str,
        _limit: usize,
    ) -> Result<Vec<SimilarResearch>, StoreError> {
        Err(StoreError::Backend("scripted store failure".into()))
    }
}
