use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::labels::{GaitLabel, RiskTier, SkinRisk};

/// Output of one classification run over one `MetricRecord`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub record_id: Uuid,
    pub patient_id: Uuid,
    pub gait_abnormality: GaitLabel,
    pub skin_risk: SkinRisk,
    pub prosthetic_health_score: f64,
    pub overall_clinical_risk: RiskTier,
    pub recommendations: Vec<String>,
    pub created_at: jiff::Timestamp,
}
