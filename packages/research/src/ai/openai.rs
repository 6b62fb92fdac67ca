//! OpenAI implementation of the completion model trait.
//!
//! Talks to the chat completions endpoint directly. Only the slice of
//! the API the pipeline needs is modeled here: one user message in, the
//! first choice's text out.
//!
//! # Example
//!
//! ```rust,ignore
//! use research::ai::OpenAiModel;
//!
//! let model = OpenAiModel::new("sk-...").with_model("gpt-4o-mini");
//! ```

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CompletionError;
use crate::traits::model::{CompletionModel, CompletionRequest};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Per-request timeout for completion calls. Summarizations can run
/// long, but a hung upstream must not stall the pipeline.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-backed completion model.
#[derive(Clone)]
pub struct OpenAiModel {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiModel {
    /// Create a new model with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, CompletionError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| CompletionError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model (default: gpt-4o).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout (default: 60s).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionModel for OpenAiModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let started = Instant::now();

        let payload = ChatPayload {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                CompletionError::Request(e.into())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %message, "OpenAI API error");
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| CompletionError::Request(e.into()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::Empty)?;

        debug!(
            model = %self.model,
            duration_ms = started.elapsed().as_millis(),
            "chat completion finished"
        );

        Ok(content)
    }
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
