//! LLM prompts for the research pipeline.

use crate::types::SearchResult;

/// Prompt for breaking a research question into sub-questions.
pub const DECOMPOSE_PROMPT: &str = r#"Break down this research question into 3-5 specific sub-questions that would help provide a comprehensive answer:

Main Question: {question}

Return only a JSON list of sub-questions, no other text:"#;

/// Prompt for compiling search results into a cited summary.
pub const SUMMARIZE_PROMPT: &str = r#"You are a research analyst. Based on the search results below, provide a comprehensive summary that answers this research question: {question}

Sub-questions explored:
{sub_questions}

Search Results:
{context}

Please provide:
1. A well-structured summary (500-800 words) that addresses the main question
2. Use specific information from the sources
3. Maintain objectivity and cite sources using [Source X] format
4. Structure the response with clear sections/paragraphs
5. Include key statistics, facts, and findings where available

Summary:"#;

/// Format the decompose prompt.
pub fn format_decompose_prompt(question: &str) -> String {
    DECOMPOSE_PROMPT.replace("{question}", question)
}

/// Format the summarize prompt with numbered source context.
///
/// Context blocks are numbered in result order; the numbering must
/// match the source list built from the same results.
pub fn format_summarize_prompt(
    question: &str,
    sub_questions: &[String],
    results: &[SearchResult],
) -> String {
    let sub_questions_text = sub_questions
        .iter()
        .map(|sq| format!("- {sq}"))
        .collect::<Vec<_>>()
        .join("\n");

    let context: String = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "\n[Source {}] {}\n{}\nURL: {}\n",
                i + 1,
                r.title,
                r.snippet,
                r.link
            )
        })
        .collect();

    SUMMARIZE_PROMPT
        .replace("{question}", question)
        .replace("{sub_questions}", &sub_questions_text)
        .replace("{context}", &context)
}
