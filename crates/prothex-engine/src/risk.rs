//! Overall clinical-risk tier.
//!
//! Gait and skin labels are recomputed from the metrics rather than read
//! from a stored record, so the same rules hold when called on averaged or
//! synthetic metrics.

use prothex_core::models::labels::{GaitLabel, RiskTier, SkinRisk};
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;

use crate::classify::{MIN_PRESSURE_INDEX, classify_gait, classify_skin};
use crate::systemic::Systemic;

pub const HIGH_RISK_POINTS: u32 = 4;
pub const MODERATE_RISK_POINTS: u32 = 2;

/// Accumulated risk points for one metric set and profile.
pub fn risk_points(metrics: &MetricSet, profile: &ClinicalProfile) -> u32 {
    let pressure = metrics.pressure_distribution_index.unwrap_or(1.0);
    let systemic = Systemic::from_profile(profile);

    let mut points = 0;
    if classify_gait(metrics) == GaitLabel::Abnormal {
        points += 2;
    }
    match classify_skin(metrics) {
        SkinRisk::High => points += 2,
        SkinRisk::Medium => points += 1,
        SkinRisk::Low => {}
    }
    if pressure < MIN_PRESSURE_INDEX {
        points += 2;
    }
    if systemic.obese() {
        points += 1;
    }
    // Cardiovascular and metabolic stress share a single point.
    if systemic.hypertensive() || systemic.hyperglycemic() {
        points += 1;
    }
    points
}

pub fn tier_for_points(points: u32) -> RiskTier {
    if points >= HIGH_RISK_POINTS {
        RiskTier::High
    } else if points >= MODERATE_RISK_POINTS {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

pub fn overall_risk(metrics: &MetricSet, profile: &ClinicalProfile) -> RiskTier {
    tier_for_points(risk_points(metrics, profile))
}
