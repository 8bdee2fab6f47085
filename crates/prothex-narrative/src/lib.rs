//! prothex-narrative
//!
//! Prose commentary for weekly summaries. Builds the clinical prompt, calls
//! an injected [`service::NarrativeService`] under a fixed timeout, and turns
//! every failure into a deterministic fallback message. The Bedrock-backed
//! service lives in [`bedrock`].

pub mod bedrock;
pub mod error;
pub mod prompt;
pub mod report;
pub mod service;
pub mod summarize;
