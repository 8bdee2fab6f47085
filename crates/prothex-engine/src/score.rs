use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;

use crate::round2;
use crate::systemic::Systemic;

const OBESITY_PENALTY: f64 = 10.0;
const HYPERTENSION_PENALTY: f64 = 10.0;
const HYPERGLYCEMIA_PENALTY: f64 = 15.0;

/// Prosthetic health score in `[0, 100]`, rounded to two decimals.
///
/// Starts at 100 and subtracts non-negative deductions for asymmetry,
/// pressure imbalance, slow walking, excess moisture and systemic risk
/// factors. Missing values are scored as unremarkable, so absent data never
/// costs points.
pub fn health_score(metrics: &MetricSet, profile: &ClinicalProfile) -> f64 {
    let symmetry = metrics.gait_symmetry_index.unwrap_or(1.0);
    let pressure = metrics.pressure_distribution_index.unwrap_or(1.0);
    let speed = metrics.walking_speed_mps.unwrap_or(0.7);
    let moisture = metrics.skin_moisture.unwrap_or(70.0);
    let systemic = Systemic::from_profile(profile);

    let mut score = 100.0;
    score -= (1.0 - symmetry) * 40.0;
    score -= (0.8 - pressure).max(0.0) * 30.0;
    score -= (0.7 - speed).max(0.0) * 25.0;
    score -= (moisture - 70.0).max(0.0) * 0.5;

    if systemic.obese() {
        score -= OBESITY_PENALTY;
    }
    if systemic.hypertensive() {
        score -= HYPERTENSION_PENALTY;
    }
    if systemic.hyperglycemic() {
        score -= HYPERGLYCEMIA_PENALTY;
    }

    round2(score.clamp(0.0, 100.0))
}
