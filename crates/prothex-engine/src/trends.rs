use prothex_core::models::record::MetricRecord;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of records a dashboard trend covers by default.
pub const DEFAULT_TREND_LENGTH: usize = 7;

/// Parallel per-metric series, oldest first, for trend charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSeries {
    pub health_score: Vec<f64>,
    pub symmetry: Vec<f64>,
    pub walking_speed: Vec<f64>,
    pub skin_temp: Vec<f64>,
    pub moisture: Vec<f64>,
    pub pressure_distribution: Vec<f64>,
}

/// The `limit` most recent records with a positive walking speed, as
/// chronological series. Records without a recorded speed are treated as
/// invalid submissions and skipped; other missing metrics chart as `0.0`.
pub fn trend_series(records: &[MetricRecord], limit: usize) -> TrendSeries {
    let mut valid: Vec<&MetricRecord> = records
        .iter()
        .filter(|r| r.metrics.walking_speed_mps.is_some_and(|s| s > 0.0))
        .collect();
    valid.sort_by_key(|r| std::cmp::Reverse(r.created_at));
    valid.truncate(limit);
    valid.reverse();

    let mut series = TrendSeries::default();
    for record in valid {
        let m = &record.metrics;
        series.health_score.push(record.prosthetic_health_score);
        series.symmetry.push(m.gait_symmetry_index.unwrap_or(0.0));
        series.walking_speed.push(m.walking_speed_mps.unwrap_or(0.0));
        series.skin_temp.push(m.skin_temperature_c.unwrap_or(0.0));
        series.moisture.push(m.skin_moisture.unwrap_or(0.0));
        series
            .pressure_distribution
            .push(m.pressure_distribution_index.unwrap_or(0.0));
    }
    series
}
