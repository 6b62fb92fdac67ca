//! Production completion model implementations.

pub mod openai;

pub use openai::OpenAiModel;
