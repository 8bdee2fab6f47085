//! Per-record pipeline: classify, score, assess risk, recommend.

use jiff::Timestamp;
use jiff::civil::Date;
use prothex_core::models::analysis::AnalysisResult;
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::record::MetricRecord;
use uuid::Uuid;

use crate::classify::{classify_gait, classify_skin};
use crate::recommend::{RecommendationInput, recommendation_messages};
use crate::risk::overall_risk;
use crate::score::health_score;

/// Build a new record from a day's submitted metrics, stamping the derived
/// labels and score.
pub fn classify_record(
    patient_id: Uuid,
    date: Date,
    metrics: MetricSet,
    profile: &ClinicalProfile,
) -> MetricRecord {
    MetricRecord {
        id: Uuid::new_v4(),
        patient_id,
        date,
        gait_abnormality: classify_gait(&metrics),
        skin_risk: classify_skin(&metrics),
        prosthetic_health_score: health_score(&metrics, profile),
        metrics,
        created_at: Timestamp::now(),
    }
}

/// Run the full analysis over one record.
///
/// Labels and score are recomputed from the record's metrics, not copied
/// from its stored fields, so an analysis always reflects the current rules
/// and the given profile.
pub fn analyze(record: &MetricRecord, profile: &ClinicalProfile) -> AnalysisResult {
    let metrics = &record.metrics;
    let gait = classify_gait(metrics);
    let skin = classify_skin(metrics);
    let score = health_score(metrics, profile);
    let risk = overall_risk(metrics, profile);

    let recommendations = recommendation_messages(&RecommendationInput {
        metrics,
        profile,
        gait,
        skin,
        health_score: score,
    });

    AnalysisResult {
        id: Uuid::new_v4(),
        record_id: record.id,
        patient_id: record.patient_id,
        gait_abnormality: gait,
        skin_risk: skin,
        prosthetic_health_score: score,
        overall_clinical_risk: risk,
        recommendations,
        created_at: Timestamp::now(),
    }
}
