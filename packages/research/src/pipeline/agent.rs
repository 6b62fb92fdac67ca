//! Research orchestrator.
//!
//! Runs the stages in order: decompose, search, summarize, store.
//! Decomposition and summarization degrade internally and the store is
//! best-effort, so with the tiered searcher a request only fails when
//! the question itself is empty.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use uuid::Uuid;

use crate::error::{ResearchError, Result};
use crate::pipeline::decompose::decompose;
use crate::pipeline::summarize::summarize;
use crate::traits::model::CompletionModel;
use crate::traits::searcher::WebSearcher;
use crate::traits::store::ResearchStore;
use crate::types::{ResearchRecord, SearchResult, SimilarResearch};

/// The research pipeline over its three injected services.
pub struct ResearchAgent {
    model: Arc<dyn CompletionModel>,
    searcher: Arc<dyn WebSearcher>,
    store: Arc<dyn ResearchStore>,
}

impl ResearchAgent {
    /// Create an agent over the given services.
    pub fn new(
        model: Arc<dyn CompletionModel>,
        searcher: Arc<dyn WebSearcher>,
        store: Arc<dyn ResearchStore>,
    ) -> Self {
        Self {
            model,
            searcher,
            store,
        }
    }

    /// Conduct research on a question.
    ///
    /// `max_results` is the total result budget, split evenly across
    /// sub-questions. Returns the assembled record; persisting it is
    /// best-effort and a store failure only logs.
    pub async fn conduct_research(
        &self,
        question: &str,
        max_results: usize,
    ) -> Result<ResearchRecord> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ResearchError::EmptyQuestion);
        }

        let research_id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        tracing::info!(%research_id, question, "research started");

        let sub_questions = decompose(self.model.as_ref(), question).await;

        // decompose never returns an empty list, so the split is safe.
        let per_question_cap = max_results / sub_questions.len();
        let results = self.search_all(&sub_questions, per_question_cap).await?;

        let findings = summarize(self.model.as_ref(), question, &sub_questions, &results).await;
        if findings.degraded {
            tracing::warn!(%research_id, "summary degraded to failure notice");
        }

        let record = ResearchRecord {
            research_id,
            question: question.to_string(),
            sub_questions,
            summary: findings.summary,
            sources: findings.sources,
            created_at,
        };

        if let Err(e) = self.store.store(&record).await {
            tracing::warn!(
                research_id = %record.research_id,
                error = %e,
                "failed to store research record"
            );
        }

        tracing::info!(
            research_id = %record.research_id,
            sources = record.sources.len(),
            "research complete"
        );

        Ok(record)
    }

    /// Search every sub-question concurrently, concatenating results
    /// in sub-question order.
    async fn search_all(
        &self,
        sub_questions: &[String],
        per_question_cap: usize,
    ) -> Result<Vec<SearchResult>> {
        let searches = sub_questions
            .iter()
            .map(|sub_question| self.searcher.search(sub_question, per_question_cap));

        let mut results = Vec::new();
        for outcome in join_all(searches).await {
            results.extend(outcome?);
        }

        Ok(results)
    }

    /// Find stored research similar to the question.
    ///
    /// Store failures read as "nothing similar".
    pub async fn similar_research(&self, question: &str, limit: usize) -> Vec<SimilarResearch> {
        match self.store.query_similar(question, limit).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(error = %e, "similar research lookup failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryStore;
    use crate::testing::{MockModel, ScriptedSearcher};

    fn agent_with(searcher: Arc<dyn WebSearcher>) -> ResearchAgent {
        ResearchAgent::new(
            Arc::new(MockModel::new()),
            searcher,
            Arc::new(MemoryStore::new()),
        )
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let agent = agent_with(Arc::new(ScriptedSearcher::empty("s")));

        let err = agent.conduct_research("   ", 10).await.unwrap_err();
        assert!(matches!(err, ResearchError::EmptyQuestion));
    }

    #[tokio::test]
    async fn test_bare_searcher_error_propagates() {
        // Without the tiered chain a searcher failure is the caller's
        // problem.
        let agent = agent_with(Arc::new(ScriptedSearcher::failing("s", "engine down")));

        let err = agent.conduct_research("What is AI?", 10).await.unwrap_err();
        assert!(matches!(err, ResearchError::Search(_)));
    }
}
