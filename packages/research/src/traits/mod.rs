//! Core trait abstractions for the research library.
//!
//! These traits define the seams between the pipeline and its
//! external services: the language model, web search, and the
//! result store.

pub mod model;
pub mod searcher;
pub mod store;
