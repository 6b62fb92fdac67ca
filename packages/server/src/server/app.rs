//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use research::{ChromaStore, OpenAiModel, ResearchAgent, TieredSearcher};

use crate::config::Config;
use crate::server::routes::{health_handler, research_handler, similar_research_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub agent: Arc<ResearchAgent>,
}

/// Build the research agent from configuration.
///
/// Wires the production pipeline: OpenAI completions, the tiered web
/// searcher, and the Chroma store.
pub fn build_agent(config: &Config) -> ResearchAgent {
    let model =
        OpenAiModel::new(config.openai_api_key.clone()).with_model(config.openai_model.clone());
    let searcher = TieredSearcher::new();
    let store = ChromaStore::new(config.chroma_url.clone(), config.chroma_collection.clone());

    ResearchAgent::new(Arc::new(model), Arc::new(searcher), Arc::new(store))
}

/// Build the Axum application router
pub fn build_app(agent: Arc<ResearchAgent>) -> Router {
    let app_state = AppState { agent };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/api/research", post(research_handler))
        .route("/api/research/similar", get(similar_research_handler))
        .route("/api/health", get(health_handler))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
