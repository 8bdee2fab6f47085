//! Short alert strings for dashboards and weekly summaries.

use prothex_core::models::labels::{GaitLabel, SkinRisk};
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::record::MetricRecord;

use crate::classify::MIN_PRESSURE_INDEX;

pub const GAIT_ALERT: &str = "Significant gait abnormality detected.";
pub const SKIN_ALERT: &str = "High risk of skin irritation. Check socket fit.";
pub const LOAD_IMBALANCE_ALERT: &str = "Load Imbalance Detected.";
pub const WEEKLY_LOAD_IMBALANCE_ALERT: &str = "Load Imbalance Detected";

/// Alerts raised by a patient's most recent record.
pub fn record_alerts(record: &MetricRecord) -> Vec<String> {
    let mut alerts = Vec::new();
    if record.gait_abnormality == GaitLabel::Abnormal {
        alerts.push(GAIT_ALERT.to_string());
    }
    if record.skin_risk == SkinRisk::High {
        alerts.push(SKIN_ALERT.to_string());
    }
    if low_pressure(&record.metrics) {
        alerts.push(LOAD_IMBALANCE_ALERT.to_string());
    }
    alerts
}

/// Alerts raised by a window's averaged metrics.
pub fn weekly_alerts(averaged: &MetricSet) -> Vec<String> {
    if low_pressure(averaged) {
        vec![WEEKLY_LOAD_IMBALANCE_ALERT.to_string()]
    } else {
        Vec::new()
    }
}

fn low_pressure(metrics: &MetricSet) -> bool {
    metrics
        .pressure_distribution_index
        .is_some_and(|p| p < MIN_PRESSURE_INDEX)
}
