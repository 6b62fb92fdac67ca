//! Chroma vector database store.
//!
//! Talks to a Chroma server over its HTTP API. The summary text is
//! stored as the document (the server owns embedding), with the
//! research metadata alongside it, keyed by research id.
//!
//! # Example
//!
//! ```rust,ignore
//! use research::stores::ChromaStore;
//!
//! let store = ChromaStore::new("http://localhost:8000", "research_results");
//! store.store(&record).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::error::StoreError;
use crate::traits::store::ResearchStore;
use crate::types::{ResearchRecord, SimilarResearch};

/// Per-request timeout for Chroma calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Chroma-backed research store.
pub struct ChromaStore {
    client: Client,
    base_url: String,
    collection_name: String,
    collection_id: OnceCell<String>,
    timeout: Duration,
}

impl ChromaStore {
    /// Create a store for a collection on the given Chroma server.
    ///
    /// The collection is resolved lazily on first use with
    /// get-or-create semantics, so constructing the store never
    /// touches the network.
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            collection_name: collection.into(),
            collection_id: OnceCell::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout (default: 30s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the collection id, creating the collection if needed.
    ///
    /// A failed resolution is retried on the next call rather than
    /// poisoning the store.
    async fn collection_id(&self) -> Result<&str, StoreError> {
        self.collection_id
            .get_or_try_init(|| self.resolve_collection())
            .await
            .map(|id| id.as_str())
    }

    async fn resolve_collection(&self) -> Result<String, StoreError> {
        #[derive(Serialize)]
        struct CollectionRequest<'a> {
            name: &'a str,
            get_or_create: bool,
        }

        #[derive(Deserialize)]
        struct CollectionResponse {
            id: String,
        }

        let response = self
            .client
            .post(format!("{}/api/v1/collections", self.base_url))
            .timeout(self.timeout)
            .json(&CollectionRequest {
                name: &self.collection_name,
                get_or_create: true,
            })
            .send()
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::InvalidResponse(format!(
                "collection create returned {status}: {body}"
            )));
        }

        let created: CollectionResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        tracing::debug!(
            collection = %self.collection_name,
            id = %created.id,
            "Chroma collection resolved"
        );
        Ok(created.id)
    }
}

/// Metadata persisted alongside each summary document.
#[derive(Debug, Serialize)]
struct RecordMetadata {
    research_id: String,
    question: String,
    timestamp: String,
    source_count: usize,
}

/// Nested-array query response in Chroma's shape: one inner list per
/// query text, and this client always sends exactly one.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    ids: Vec<Vec<String>>,
    #[serde(default)]
    documents: Option<Vec<Vec<Option<String>>>>,
    #[serde(default)]
    metadatas: Option<Vec<Vec<Option<serde_json::Value>>>>,
    #[serde(default)]
    distances: Option<Vec<Vec<f32>>>,
}

/// Flatten the first (only) inner result list into hits.
///
/// Missing sections or entries degrade to empty fields rather than
/// failing the lookup.
fn similar_from_response(response: QueryResponse) -> Vec<SimilarResearch> {
    let ids = response.ids.into_iter().next().unwrap_or_default();
    let documents = response
        .documents
        .and_then(|d| d.into_iter().next())
        .unwrap_or_default();
    let metadatas = response
        .metadatas
        .and_then(|m| m.into_iter().next())
        .unwrap_or_default();
    let distances = response
        .distances
        .and_then(|d| d.into_iter().next())
        .unwrap_or_default();

    let mut hits = Vec::with_capacity(ids.len());
    for (i, research_id) in ids.into_iter().enumerate() {
        let summary = documents
            .get(i)
            .and_then(|d| d.clone())
            .unwrap_or_default();
        let metadata = metadatas.get(i).and_then(|m| m.clone());

        let question = metadata
            .as_ref()
            .and_then(|m| m.get("question"))
            .and_then(|q| q.as_str())
            .unwrap_or_default()
            .to_string();
        let source_count = metadata
            .as_ref()
            .and_then(|m| m.get("source_count"))
            .and_then(|c| c.as_u64())
            .unwrap_or_default() as usize;
        let created_at = metadata
            .as_ref()
            .and_then(|m| m.get("timestamp"))
            .and_then(|t| t.as_str())
            .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
            .map(|t| t.with_timezone(&Utc));

        hits.push(SimilarResearch {
            research_id,
            question,
            summary,
            source_count,
            created_at,
            distance: distances.get(i).copied(),
        });
    }

    hits
}

#[async_trait]
impl ResearchStore for ChromaStore {
    async fn store(&self, record: &ResearchRecord) -> Result<(), StoreError> {
        #[derive(Serialize)]
        struct AddRequest<'a> {
            ids: Vec<&'a str>,
            documents: Vec<&'a str>,
            metadatas: Vec<RecordMetadata>,
        }

        let collection_id = self.collection_id().await?;

        let metadata = RecordMetadata {
            research_id: record.research_id.clone(),
            question: record.question.clone(),
            timestamp: record.created_at.to_rfc3339(),
            source_count: record.sources.len(),
        };

        let response = self
            .client
            .post(format!(
                "{}/api/v1/collections/{}/add",
                self.base_url, collection_id
            ))
            .timeout(self.timeout)
            .json(&AddRequest {
                ids: vec![&record.research_id],
                documents: vec![&record.summary],
                metadatas: vec![metadata],
            })
            .send()
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::InvalidResponse(format!(
                "add returned {status}: {body}"
            )));
        }

        tracing::debug!(research_id = %record.research_id, "research stored in Chroma");
        Ok(())
    }

    async fn query_similar(
        &self,
        question: &str,
        limit: usize,
    ) -> Result<Vec<SimilarResearch>, StoreError> {
        #[derive(Serialize)]
        struct QueryRequest<'a> {
            query_texts: Vec<&'a str>,
            n_results: usize,
            include: Vec<&'a str>,
        }

        let collection_id = self.collection_id().await?;

        let response = self
            .client
            .post(format!(
                "{}/api/v1/collections/{}/query",
                self.base_url, collection_id
            ))
            .timeout(self.timeout)
            .json(&QueryRequest {
                query_texts: vec![question],
                n_results: limit,
                include: vec!["documents", "metadatas", "distances"],
            })
            .send()
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::InvalidResponse(format!(
                "query returned {status}: {body}"
            )));
        }

        let query_response: QueryResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Backend(Box::new(e)))?;

        Ok(similar_from_response(query_response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let store = ChromaStore::new("http://localhost:8000/", "research_results");
        assert_eq!(store.base_url, "http://localhost:8000");
    }

    /// Accept TCP connections and hold them open without ever replying.
    async fn unresponsive_server() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        base_url
    }

    #[tokio::test]
    async fn test_query_is_bounded_against_unresponsive_server() {
        let store = ChromaStore::new(unresponsive_server().await, "research_results")
            .with_timeout(Duration::from_millis(200));

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            store.query_similar("anything", 3),
        )
        .await
        .expect("call must fail within its timeout instead of hanging");

        assert!(matches!(result, Err(StoreError::Backend(_))));
    }

    #[test]
    fn test_similar_from_response_flattens_nested_arrays() {
        let response: QueryResponse = serde_json::from_value(serde_json::json!({
            "ids": [["id-1", "id-2"]],
            "documents": [["summary one", "summary two"]],
            "metadatas": [[
                {
                    "research_id": "id-1",
                    "question": "What is AI?",
                    "timestamp": "2025-05-01T12:00:00+00:00",
                    "source_count": 4
                },
                {
                    "research_id": "id-2",
                    "question": "What causes inflation?",
                    "timestamp": "2025-05-02T12:00:00+00:00",
                    "source_count": 2
                }
            ]],
            "distances": [[0.12, 0.55]]
        }))
        .unwrap();

        let hits = similar_from_response(response);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].research_id, "id-1");
        assert_eq!(hits[0].question, "What is AI?");
        assert_eq!(hits[0].summary, "summary one");
        assert_eq!(hits[0].source_count, 4);
        assert_eq!(hits[0].distance, Some(0.12));
        assert!(hits[0].created_at.is_some());
        assert_eq!(hits[1].research_id, "id-2");
    }

    #[test]
    fn test_similar_from_response_tolerates_missing_sections() {
        let response: QueryResponse =
            serde_json::from_value(serde_json::json!({ "ids": [["id-1"]] })).unwrap();

        let hits = similar_from_response(response);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "");
        assert_eq!(hits[0].summary, "");
        assert_eq!(hits[0].distance, None);
        assert!(hits[0].created_at.is_none());
    }

    #[test]
    fn test_similar_from_response_empty() {
        let response: QueryResponse =
            serde_json::from_value(serde_json::json!({ "ids": [[]] })).unwrap();

        assert!(similar_from_response(response).is_empty());
    }
}
