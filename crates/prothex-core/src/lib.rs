//! prothex-core
//!
//! Pure domain types for prosthetic wearer assessment: metric records,
//! clinical profiles, analysis results and weekly summaries. No engine
//! logic and no AWS dependency; this is the shared vocabulary of the
//! Prothex system.

pub mod error;
pub mod models;
pub mod source;
pub mod window;
