use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use research::{ResearchError, ResearchQuery, ResearchRecord, Source};

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Response body for a completed research request.
///
/// Storage metadata such as the creation timestamp stays internal to
/// the persisted record.
#[derive(Serialize)]
pub struct ResearchResponse {
    research_id: String,
    question: String,
    sub_questions: Vec<String>,
    summary: String,
    sources: Vec<Source>,
}

impl From<ResearchRecord> for ResearchResponse {
    fn from(record: ResearchRecord) -> Self {
        Self {
            research_id: record.research_id,
            question: record.question,
            sub_questions: record.sub_questions,
            summary: record.summary,
            sources: record.sources,
        }
    }
}

/// Research endpoint
///
/// Decomposes the question, searches each sub-question, and returns
/// the summarized record. The record is also persisted for later
/// similarity lookups.
pub async fn research_handler(
    Extension(state): Extension<AppState>,
    Json(query): Json<ResearchQuery>,
) -> Response {
    match state
        .agent
        .conduct_research(&query.question, query.max_results)
        .await
    {
        Ok(record) => (StatusCode::OK, Json(ResearchResponse::from(record))).into_response(),
        Err(e @ ResearchError::EmptyQuestion) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Research request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
