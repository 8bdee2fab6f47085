//! prothex-engine
//!
//! Deterministic rule-based assessment. Pure functions only: no I/O, no
//! logging, no shared state. Safe to call concurrently for any number of
//! patients.
//!
//! Per-record flow is classify → score → risk → recommend, assembled by
//! [`analysis::analyze`]. [`weekly::aggregate`] summarizes a window of
//! records and reuses the same risk rules on the averaged metrics.

pub mod alerts;
pub mod analysis;
pub mod classify;
pub mod cohort;
pub mod recommend;
pub mod risk;
pub mod score;
pub mod trends;
pub mod weekly;

mod systemic;

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
