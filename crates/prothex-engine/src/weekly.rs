//! Weekly aggregation of one patient's records.

use jiff::Timestamp;
use prothex_core::models::labels::{GaitLabel, SkinRisk};
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::record::MetricRecord;
use prothex_core::models::weekly::{WeeklyAverages, WeeklySummary};
use prothex_core::window::TimeWindow;
use uuid::Uuid;

use crate::alerts::weekly_alerts;
use crate::risk::overall_risk;
use crate::round2;

/// Summarize `records` for `patient_id` over `window`.
///
/// Records belonging to another patient or created outside the window are
/// ignored. An empty window yields zeroed averages, `"No Data"` labels and a
/// zero delta. The delta is taken against `previous` only when it is the
/// summary of the immediately preceding window and carried data; otherwise
/// it is `0.0`.
///
/// Overall risk is assessed on the averaged metrics, never a single record.
pub fn aggregate(
    patient_id: Uuid,
    records: &[MetricRecord],
    window: &TimeWindow,
    previous: Option<&WeeklySummary>,
    profile: &ClinicalProfile,
) -> WeeklySummary {
    let in_window: Vec<&MetricRecord> = records
        .iter()
        .filter(|r| r.patient_id == patient_id && window.contains(r.created_at))
        .collect();

    let averaged = average_metrics(&in_window);
    let avg_score = mean(in_window.iter().map(|r| r.prosthetic_health_score));
    let latest = in_window.iter().copied().max_by_key(|r| r.created_at);

    let health_score_delta = match (avg_score, previous) {
        (Some(current), Some(prev))
            if prev.has_data()
                && prev.patient_id == patient_id
                && prev.end_date == window.start =>
        {
            round2(current - prev.avg_prosthetic_health_score)
        }
        _ => 0.0,
    };

    WeeklySummary {
        id: Uuid::new_v4(),
        patient_id,
        start_date: window.start,
        end_date: window.end,
        record_count: u32::try_from(in_window.len()).unwrap_or(u32::MAX),
        averages: display_averages(&averaged),
        avg_prosthetic_health_score: round2(avg_score.unwrap_or(0.0)),
        gait_abnormality: latest.map(|r| r.gait_abnormality),
        skin_risk: latest.map(|r| r.skin_risk),
        abnormal_count: count(&in_window, |r| r.gait_abnormality == GaitLabel::Abnormal),
        high_skin_risk_count: count(&in_window, |r| r.skin_risk == SkinRisk::High),
        health_score_delta,
        overall_clinical_risk: overall_risk(&averaged, profile),
        alerts: weekly_alerts(&averaged),
        created_at: Timestamp::now(),
    }
}

/// Mean of each metric over the records that carry it.
///
/// A metric nobody reported stays absent, so downstream rules treat it as
/// missing rather than as zero.
pub fn average_metrics(records: &[&MetricRecord]) -> MetricSet {
    let field =
        |get: fn(&MetricSet) -> Option<f64>| mean(records.iter().filter_map(|r| get(&r.metrics)));

    MetricSet {
        step_length_cm: field(|m| m.step_length_cm),
        cadence_spm: field(|m| m.cadence_spm),
        walking_speed_mps: field(|m| m.walking_speed_mps),
        gait_symmetry_index: field(|m| m.gait_symmetry_index),
        skin_temperature_c: field(|m| m.skin_temperature_c),
        skin_moisture: field(|m| m.skin_moisture),
        pressure_distribution_index: field(|m| m.pressure_distribution_index),
        daily_wear_hours: field(|m| m.daily_wear_hours),
    }
}

fn display_averages(averaged: &MetricSet) -> WeeklyAverages {
    let show = |value: Option<f64>| round2(value.unwrap_or(0.0));
    WeeklyAverages {
        avg_step_length_cm: show(averaged.step_length_cm),
        avg_cadence_spm: show(averaged.cadence_spm),
        avg_walking_speed_mps: show(averaged.walking_speed_mps),
        avg_gait_symmetry_index: show(averaged.gait_symmetry_index),
        avg_pressure_distribution_index: show(averaged.pressure_distribution_index),
        avg_skin_temperature_c: show(averaged.skin_temperature_c),
        avg_skin_moisture: show(averaged.skin_moisture),
        avg_daily_wear_hours: show(averaged.daily_wear_hours),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0u32), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / f64::from(n))
}

fn count(records: &[&MetricRecord], predicate: impl Fn(&MetricRecord) -> bool) -> u32 {
    let n = records.iter().filter(|r| predicate(r)).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}
