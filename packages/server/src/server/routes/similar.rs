use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Deserialize;

use research::SimilarResearch;

use crate::server::app::AppState;

/// Default number of similar records returned.
pub const DEFAULT_SIMILAR_LIMIT: usize = 3;

fn default_limit() -> usize {
    DEFAULT_SIMILAR_LIMIT
}

#[derive(Deserialize)]
pub struct SimilarParams {
    question: String,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// Similar research endpoint
///
/// Store failures degrade to an empty list, so this always returns 200.
pub async fn similar_research_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SimilarParams>,
) -> Json<Vec<SimilarResearch>> {
    let similar = state
        .agent
        .similar_research(&params.question, params.limit)
        .await;

    Json(similar)
}
