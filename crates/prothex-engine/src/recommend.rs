use std::fmt;

use prothex_core::models::labels::{GaitLabel, SkinRisk};
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::classify::MIN_PRESSURE_INDEX;
use crate::systemic::Systemic;

pub const SLOW_WALKING_SPEED_MPS: f64 = 0.6;
pub const CONSULTATION_SCORE: f64 = 60.0;

/// An actionable recommendation. Declaration order is emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Recommendation {
    GaitAsymmetry,
    SocketInspection,
    AlignmentCheck,
    LoadImbalance,
    WeightManagement,
    Hypertension,
    ProsthetistConsultation,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::GaitAsymmetry => {
                "Significant gait asymmetry detected. Clinical gait analysis recommended."
            }
            Recommendation::SocketInspection => {
                "Critical skin irritation risk. Inspect residual limb and socket immediately."
            }
            Recommendation::AlignmentCheck => {
                "Low walking speed detected. Consider prosthetic alignment check."
            }
            Recommendation::LoadImbalance => {
                "Load imbalance detected. Check socket padding and alignment."
            }
            Recommendation::WeightManagement => {
                "High BMI detected. Weight management may improve prosthetic comfort."
            }
            Recommendation::Hypertension => {
                "Hypertension detected. Consult clinical team regarding cardiovascular stress."
            }
            Recommendation::ProsthetistConsultation => {
                "Overall prosthetic health score is moderate. \
                 Consultation with a prosthetist advised."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything the recommendation rules look at for one record.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    pub metrics: &'a MetricSet,
    pub profile: &'a ClinicalProfile,
    pub gait: GaitLabel,
    pub skin: SkinRisk,
    pub health_score: f64,
}

/// Recommendations whose conditions hold, in fixed order.
///
/// Conditions are independent; any subset may fire, including none.
pub fn recommendations(input: &RecommendationInput<'_>) -> Vec<Recommendation> {
    let speed = input.metrics.walking_speed_mps.unwrap_or(0.7);
    let pressure = input.metrics.pressure_distribution_index.unwrap_or(1.0);
    let systemic = Systemic::from_profile(input.profile);

    let checks = [
        (Recommendation::GaitAsymmetry, input.gait == GaitLabel::Abnormal),
        (Recommendation::SocketInspection, input.skin == SkinRisk::High),
        (Recommendation::AlignmentCheck, speed < SLOW_WALKING_SPEED_MPS),
        (Recommendation::LoadImbalance, pressure < MIN_PRESSURE_INDEX),
        (Recommendation::WeightManagement, systemic.obese()),
        (Recommendation::Hypertension, systemic.hypertensive()),
        (
            Recommendation::ProsthetistConsultation,
            input.health_score < CONSULTATION_SCORE,
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(recommendation, applies)| applies.then_some(recommendation))
        .collect()
}

/// Convenience: the messages of [`recommendations`].
pub fn recommendation_messages(input: &RecommendationInput<'_>) -> Vec<String> {
    recommendations(input)
        .into_iter()
        .map(|r| r.message().to_string())
        .collect()
}
