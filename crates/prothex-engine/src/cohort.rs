//! Triage distribution across a patient population.

use prothex_core::models::record::MetricRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const STABLE_SCORE: f64 = 85.0;
pub const MODERATE_SCORE: f64 = 60.0;

/// Triage band of one patient, from their most recent health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriageBand {
    Stable,
    Moderate,
    High,
    NoData,
}

pub fn triage_band(latest: Option<&MetricRecord>) -> TriageBand {
    match latest.map(|r| r.prosthetic_health_score) {
        None => TriageBand::NoData,
        Some(score) if score >= STABLE_SCORE => TriageBand::Stable,
        Some(score) if score >= MODERATE_SCORE => TriageBand::Moderate,
        Some(_) => TriageBand::High,
    }
}

/// Count of patients in each triage band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CohortDistribution {
    pub stable: u32,
    pub moderate: u32,
    pub high: u32,
    pub no_data: u32,
}

impl CohortDistribution {
    pub fn total(&self) -> u32 {
        self.stable + self.moderate + self.high + self.no_data
    }
}

/// Tally each patient's latest record (`None` for a patient without any).
pub fn cohort_distribution<'a>(
    latest_per_patient: impl IntoIterator<Item = Option<&'a MetricRecord>>,
) -> CohortDistribution {
    latest_per_patient
        .into_iter()
        .fold(CohortDistribution::default(), |mut dist, latest| {
            match triage_band(latest) {
                TriageBand::Stable => dist.stable += 1,
                TriageBand::Moderate => dist.moderate += 1,
                TriageBand::High => dist.high += 1,
                TriageBand::NoData => dist.no_data += 1,
            }
            dist
        })
}
