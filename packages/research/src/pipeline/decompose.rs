//! Question decomposition stage.
//!
//! Breaks the research question into 3-5 sub-questions so each can be
//! searched separately. The stage never fails outright: when the model
//! is unreachable or replies with something unusable, the original
//! question stands in as the only sub-question.

use crate::error::DecompositionError;
use crate::pipeline::prompts::format_decompose_prompt;
use crate::traits::model::{CompletionModel, CompletionRequest};

/// Sampling temperature for decomposition.
pub const DECOMPOSE_TEMPERATURE: f32 = 0.3;

/// Break a question into sub-questions, falling back to the question
/// itself on any failure.
///
/// The result is always non-empty.
pub async fn decompose(model: &dyn CompletionModel, question: &str) -> Vec<String> {
    match try_decompose(model, question).await {
        Ok(sub_questions) => sub_questions,
        Err(e) => {
            tracing::warn!(error = %e, "decomposition failed, using original question");
            vec![question.to_string()]
        }
    }
}

/// Break a question into sub-questions.
pub async fn try_decompose(
    model: &dyn CompletionModel,
    question: &str,
) -> Result<Vec<String>, DecompositionError> {
    let request = CompletionRequest::new(format_decompose_prompt(question))
        .with_temperature(DECOMPOSE_TEMPERATURE);

    let response = model.complete(request).await?;
    let sub_questions = parse_sub_questions(&response)?;

    tracing::debug!(count = sub_questions.len(), "question decomposed");
    Ok(sub_questions)
}

/// Parse the model reply as a JSON list of sub-questions.
///
/// Blank entries are dropped; an effectively empty list is an error so
/// the caller falls back rather than searching nothing.
fn parse_sub_questions(response: &str) -> Result<Vec<String>, DecompositionError> {
    let parsed: Vec<String> = serde_json::from_str(response).or_else(|_| {
        // Try to extract JSON from markdown code block
        let json_str = response
            .trim()
            .trim_start_matches("```json")
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim();
        serde_json::from_str(json_str)
    })?;

    let sub_questions: Vec<String> = parsed
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect();

    if sub_questions.is_empty() {
        return Err(DecompositionError::Empty);
    }

    Ok(sub_questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;

    #[test]
    fn test_parse_plain_json_list() {
        let parsed = parse_sub_questions(r#"["What is X?", "Why X?"]"#).unwrap();
        assert_eq!(parsed, vec!["What is X?", "Why X?"]);
    }

    #[test]
    fn test_parse_fenced_json_list() {
        let reply = "```json\n[\"What is X?\", \"Why X?\"]\n```";
        let parsed = parse_sub_questions(reply).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_bare_fence() {
        let reply = "```\n[\"What is X?\"]\n```";
        let parsed = parse_sub_questions(reply).unwrap();
        assert_eq!(parsed, vec!["What is X?"]);
    }

    #[test]
    fn test_parse_trims_entries() {
        let parsed = parse_sub_questions(r#"["  What is X?  ", ""]"#).unwrap();
        assert_eq!(parsed, vec!["What is X?"]);
    }

    #[test]
    fn test_parse_rejects_non_list() {
        let err = parse_sub_questions("Here are some questions...").unwrap_err();
        assert!(matches!(err, DecompositionError::JsonParse(_)));
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        let err = parse_sub_questions("[]").unwrap_err();
        assert!(matches!(err, DecompositionError::Empty));
    }

    #[test]
    fn test_parse_rejects_all_blank_list() {
        let err = parse_sub_questions(r#"["", "   "]"#).unwrap_err();
        assert!(matches!(err, DecompositionError::Empty));
    }

    #[tokio::test]
    async fn test_decompose_uses_model_reply() {
        let model = MockModel::new().with_reply(r#"["What is AI?", "How is AI used?"]"#);

        let sub_questions = decompose(&model, "Tell me about AI").await;

        assert_eq!(sub_questions, vec!["What is AI?", "How is AI used?"]);

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].temperature, DECOMPOSE_TEMPERATURE);
        assert!(calls[0].prompt.contains("Tell me about AI"));
    }

    #[tokio::test]
    async fn test_decompose_falls_back_on_model_failure() {
        let model = MockModel::new().with_failure("model offline");

        let sub_questions = decompose(&model, "Tell me about AI").await;

        assert_eq!(sub_questions, vec!["Tell me about AI"]);
    }

    #[tokio::test]
    async fn test_decompose_falls_back_on_unparseable_reply() {
        let model = MockModel::new().with_reply("I cannot answer that.");

        let sub_questions = decompose(&model, "Tell me about AI").await;

        assert_eq!(sub_questions, vec!["Tell me about AI"]);
    }

    #[tokio::test]
    async fn test_try_decompose_surfaces_completion_error() {
        let model = MockModel::new().with_failure("model offline");

        let err = try_decompose(&model, "Tell me about AI").await.unwrap_err();

        assert!(matches!(err, DecompositionError::Completion(_)));
    }
}
