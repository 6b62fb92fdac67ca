//! Result store trait for persisting completed research.
//!
//! The store keeps the summary text plus lightweight metadata so that
//! later questions can be answered from prior work. The pipeline
//! treats the store as best-effort: a failed write never fails the
//! research request, and a failed lookup reads as "nothing similar".

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{ResearchRecord, SimilarResearch};

/// Storage for completed research results.
///
/// # Implementations
///
/// - [`crate::stores::ChromaStore`] - Chroma vector database over HTTP
/// - [`crate::stores::MemoryStore`] - in-process store for tests
#[async_trait]
pub trait ResearchStore: Send + Sync {
    /// Persist a completed research record, keyed by its research id.
    async fn store(&self, record: &ResearchRecord) -> Result<(), StoreError>;

    /// Find up to `limit` stored records most similar to the question.
    async fn query_similar(
        &self,
        question: &str,
        limit: usize,
    ) -> Result<Vec<SimilarResearch>, StoreError>;
}
