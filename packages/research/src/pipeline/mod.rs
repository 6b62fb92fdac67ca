//! The research pipeline: decompose, search, summarize, store.
//!
//! [`ResearchAgent`] orchestrates the stages; the stage functions live
//! in their own modules and are usable directly.

pub mod agent;
pub mod decompose;
pub mod prompts;
pub mod summarize;

pub use agent::ResearchAgent;
pub use decompose::{decompose, try_decompose, DECOMPOSE_TEMPERATURE};
pub use summarize::{
    build_sources, summarize, Findings, SUMMARIZE_MAX_TOKENS, SUMMARIZE_TEMPERATURE,
    SUMMARY_FAILURE_TEXT,
};
