//! Threshold classification of one metric set.
//!
//! Both classifiers are total: a missing metric takes a healthy default, so
//! absent data can never raise a label.

use prothex_core::models::labels::{GaitLabel, SkinRisk};
use prothex_core::models::metrics::MetricSet;

pub const MIN_SYMMETRY: f64 = 0.75;
pub const MIN_WALKING_SPEED_MPS: f64 = 0.7;
pub const MIN_STEP_LENGTH_CM: f64 = 30.0;
pub const MIN_CADENCE_SPM: f64 = 70.0;
pub const MIN_PRESSURE_INDEX: f64 = 0.6;

pub const MAX_SKIN_TEMPERATURE_C: f64 = 34.0;
pub const MAX_SKIN_MOISTURE: f64 = 70.0;
pub const MAX_WEAR_HOURS: f64 = 12.0;

/// Gait is abnormal when any single metric crosses its cutoff.
pub fn classify_gait(metrics: &MetricSet) -> GaitLabel {
    let symmetry = metrics.gait_symmetry_index.unwrap_or(1.0);
    let speed = metrics.walking_speed_mps.unwrap_or(1.0);
    let step = metrics.step_length_cm.unwrap_or(50.0);
    let cadence = metrics.cadence_spm.unwrap_or(100.0);
    let pressure = metrics.pressure_distribution_index.unwrap_or(1.0);

    if symmetry < MIN_SYMMETRY
        || speed < MIN_WALKING_SPEED_MPS
        || step < MIN_STEP_LENGTH_CM
        || cadence < MIN_CADENCE_SPM
        || pressure < MIN_PRESSURE_INDEX
    {
        GaitLabel::Abnormal
    } else {
        GaitLabel::Normal
    }
}

/// One point each for elevated temperature, elevated moisture and long wear.
pub fn skin_risk_points(metrics: &MetricSet) -> u8 {
    let temperature = metrics.skin_temperature_c.unwrap_or(30.0);
    let moisture = metrics.skin_moisture.unwrap_or(50.0);
    let wear = metrics.daily_wear_hours.unwrap_or(8.0);

    u8::from(temperature > MAX_SKIN_TEMPERATURE_C)
        + u8::from(moisture > MAX_SKIN_MOISTURE)
        + u8::from(wear > MAX_WEAR_HOURS)
}

pub fn classify_skin(metrics: &MetricSet) -> SkinRisk {
    match skin_risk_points(metrics) {
        0 | 1 => SkinRisk::Low,
        2 => SkinRisk::Medium,
        _ => SkinRisk::High,
    }
}
