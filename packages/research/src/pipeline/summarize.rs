//! Findings compilation stage.
//!
//! Numbers the aggregated search results into a source list, then asks
//! the model for a summary that cites them as `[Source N]`. The source
//! list is built locally, so it survives a failed model call; only the
//! summary text degrades.

use crate::pipeline::prompts::format_summarize_prompt;
use crate::traits::model::{CompletionModel, CompletionRequest};
use crate::types::{SearchResult, Source};

/// Sampling temperature for summary generation.
pub const SUMMARIZE_TEMPERATURE: f32 = 0.4;

/// Output token cap for summary generation.
pub const SUMMARIZE_MAX_TOKENS: u32 = 1500;

/// Returned in place of a summary when the model call fails.
pub const SUMMARY_FAILURE_TEXT: &str = "Error generating summary. Please try again.";

/// Compiled findings: the summary plus the numbered sources it cites.
#[derive(Debug, Clone)]
pub struct Findings {
    /// Summary text with `[Source N]` citations.
    pub summary: String,

    /// Sources in aggregation order, ids matching the citations.
    pub sources: Vec<Source>,

    /// True when the summary is the failure placeholder.
    pub degraded: bool,
}

/// Number search results into the 1-based source list the summary cites.
pub fn build_sources(results: &[SearchResult]) -> Vec<Source> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| Source {
            id: i + 1,
            title: result.title.clone(),
            url: result.link.clone(),
            snippet: result.snippet.clone(),
        })
        .collect()
}

/// Compile aggregated search results into a cited summary.
pub async fn summarize(
    model: &dyn CompletionModel,
    question: &str,
    sub_questions: &[String],
    results: &[SearchResult],
) -> Findings {
    let sources = build_sources(results);

    let request = CompletionRequest::new(format_summarize_prompt(question, sub_questions, results))
        .with_temperature(SUMMARIZE_TEMPERATURE)
        .with_max_tokens(SUMMARIZE_MAX_TOKENS);

    match model.complete(request).await {
        Ok(reply) => Findings {
            summary: reply.trim().to_string(),
            sources,
            degraded: false,
        },
        Err(e) => {
            tracing::warn!(error = %e, "summary generation failed");
            Findings {
                summary: SUMMARY_FAILURE_TEXT.to_string(),
                sources,
                degraded: true,
            }
        }
    }
}
