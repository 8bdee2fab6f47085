use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::labels::{GaitLabel, SkinRisk};
use super::metrics::MetricSet;

/// One day's observation for one patient.
///
/// The derived labels and score are fixed when the record is created.
/// Reclassification produces a new record or a new `AnalysisResult`; an
/// existing record is never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: jiff::civil::Date,
    #[serde(flatten)]
    #[ts(flatten)]
    pub metrics: MetricSet,
    pub gait_abnormality: GaitLabel,
    pub skin_risk: SkinRisk,
    pub prosthetic_health_score: f64,
    pub created_at: jiff::Timestamp,
}
