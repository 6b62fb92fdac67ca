//! Completion model trait for LLM operations.
//!
//! The pipeline needs exactly one LLM capability: turn a prompt into
//! text at a chosen temperature. Abstracting it keeps the pipeline
//! testable without network calls and provider-agnostic.

use async_trait::async_trait;

use crate::error::CompletionError;

/// A single completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The full prompt, sent as one user message.
    pub prompt: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Output token cap, when the stage wants one.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a request with default sampling (temperature 0.0, no cap).
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.0,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the output token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Completion model trait for LLM text generation.
///
/// Implementations wrap specific providers (OpenAI, etc.) and handle
/// transport and response extraction. The returned string is the raw
/// model reply; callers own any parsing.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Generate a completion for the request.
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}
