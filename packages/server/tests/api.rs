//! Integration tests for the research API endpoints.
//!
//! The router is driven directly with `tower::ServiceExt::oneshot`, with
//! the research pipeline backed by scripted implementations.

use std::sync::Arc;

use axum::body::Body;
use tower::ServiceExt;

use research::testing::{MockModel, ScriptedSearcher};
use research::{MemoryStore, ResearchAgent, SearchResult};
use server_core::server::build_app;

fn search_result(title: &str) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        link: format!("https://example.com/{title}"),
        snippet: format!("Background on {title}"),
        source: "example.com".to_string(),
        query: "scripted".to_string(),
    }
}

/// Agent with one scripted research run (decompose + summarize) queued.
fn scripted_agent() -> Arc<ResearchAgent> {
    let model = MockModel::new()
        .with_reply(r#"["What is solar power?", "How is solar power used?"]"#)
        .with_reply("Solar power converts sunlight into electricity [Source 1].");
    let searcher = ScriptedSearcher::returning(
        "scripted",
        vec![search_result("overview"), search_result("usage")],
    );

    Arc::new(ResearchAgent::new(
        Arc::new(model),
        Arc::new(searcher),
        Arc::new(MemoryStore::new()),
    ))
}

fn make_request(uri: &str) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn make_post_request(uri: &str, body: serde_json::Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn send(
    agent: Arc<ResearchAgent>,
    request: axum::http::Request<Body>,
) -> (axum::http::StatusCode, serde_json::Value) {
    let app = build_app(agent);
    let resp = ServiceExt::<axum::http::Request<Body>>::oneshot(app, request)
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), 1_000_000)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

// --- /api/health ---

#[tokio::test]
async fn test_health_returns_fixed_payload() {
    let (status, json) = send(scripted_agent(), make_request("/api/health")).await;

    assert_eq!(status, 200);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["message"], "AI Research Assistant is running");
}

// --- /api/research ---

#[tokio::test]
async fn test_research_returns_record() {
    let body = serde_json::json!({"question": "What is solar power?", "max_results": 4});
    let (status, json) = send(scripted_agent(), make_post_request("/api/research", body)).await;

    assert_eq!(status, 200);
    assert_eq!(json["question"], "What is solar power?");
    assert_eq!(json["sub_questions"].as_array().unwrap().len(), 2);
    assert!(json["summary"].as_str().unwrap().contains("[Source 1]"));
    assert_eq!(json["sources"].as_array().unwrap().len(), 4);
    assert!(json["research_id"].as_str().is_some());

    // Storage metadata stays out of the response body
    assert_eq!(json.as_object().unwrap().len(), 5);
    assert!(json.get("created_at").is_none());
}

#[tokio::test]
async fn test_research_defaults_max_results() {
    let body = serde_json::json!({"question": "What is solar power?"});
    let (status, json) = send(scripted_agent(), make_post_request("/api/research", body)).await;

    assert_eq!(status, 200);
    // Default budget of 10 across 2 sub-questions allows 5 each, but the
    // scripted searcher only has 2 results per query
    assert_eq!(json["sources"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_research_rejects_blank_question() {
    let body = serde_json::json!({"question": "   "});
    let (status, json) = send(scripted_agent(), make_post_request("/api/research", body)).await;

    assert_eq!(status, 400);
    assert!(json["error"].as_str().is_some());
}

// --- /api/research/similar ---

#[tokio::test]
async fn test_similar_returns_stored_research() {
    let agent = scripted_agent();

    let body = serde_json::json!({"question": "What is solar power?"});
    let (status, json) = send(agent.clone(), make_post_request("/api/research", body)).await;
    assert_eq!(status, 200);
    let research_id = json["research_id"].as_str().unwrap().to_string();

    let (status, json) = send(agent, make_request("/api/research/similar?question=solar")).await;
    assert_eq!(status, 200);
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["research_id"], research_id.as_str());
}

#[tokio::test]
async fn test_similar_empty_store() {
    let (status, json) = send(
        scripted_agent(),
        make_request("/api/research/similar?question=anything"),
    )
    .await;

    assert_eq!(status, 200);
    assert!(json.as_array().unwrap().is_empty());
}
