// AI Research Assistant - API Core
//
// This crate provides the HTTP API for the research assistant: request
// handling, configuration, and wiring of the research pipeline.

pub mod config;
pub mod server;

pub use config::*;
