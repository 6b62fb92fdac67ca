//! In-memory result store for testing and development.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::StoreError;
use crate::traits::store::ResearchStore;
use crate::types::{ResearchRecord, SimilarResearch};

/// In-memory storage for research records.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart.
pub struct MemoryStore {
    records: RwLock<HashMap<String, ResearchRecord>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Clear all stored records.
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }

    /// Get the number of stored records.
    pub fn record_count(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Get a stored record by research id.
    pub fn get(&self, research_id: &str) -> Option<ResearchRecord> {
        self.records.read().unwrap().get(research_id).cloned()
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Word-overlap similarity between two questions (Jaccard over
/// lowercase tokens). A stand-in for vector similarity so the store
/// can run without an embedding backend.
fn word_overlap(a: &str, b: &str) -> f32 {
    let a = tokenize(a);
    let b = tokenize(b);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(&b).count() as f32;
    let union = a.union(&b).count() as f32;
    intersection / union
}

#[async_trait]
impl ResearchStore for MemoryStore {
    async fn store(&self, record: &ResearchRecord) -> Result<(), StoreError> {
        self.records
            .write()
            .unwrap()
            .insert(record.research_id.clone(), record.clone());
        Ok(())
    }

    async fn query_similar(
        &self,
        question: &str,
        limit: usize,
    ) -> Result<Vec<SimilarResearch>, StoreError> {
        let records = self.records.read().unwrap();

        let mut scored: Vec<_> = records
            .values()
            .map(|record| {
                let score = word_overlap(question, &record.question);
                ScoredHit {
                    score,
                    hit: SimilarResearch {
                        research_id: record.research_id.clone(),
                        question: record.question.clone(),
                        summary: record.summary.clone(),
                        source_count: record.sources.len(),
                        created_at: Some(record.created_at),
                        distance: Some(1.0 - score),
                    },
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        Ok(scored.into_iter().map(|s| s.hit).collect())
    }
}

struct ScoredHit {
    score: f32,
    hit: SimilarResearch,
}
