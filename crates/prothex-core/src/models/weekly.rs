use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::window::TimeWindow;

use super::labels::{GaitLabel, RiskTier, SkinRisk};

/// Arithmetic means of each numeric metric over one window.
///
/// A metric that no record in the window carries averages to `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklyAverages {
    pub avg_step_length_cm: f64,
    pub avg_cadence_spm: f64,
    pub avg_walking_speed_mps: f64,
    pub avg_gait_symmetry_index: f64,
    pub avg_pressure_distribution_index: f64,
    pub avg_skin_temperature_c: f64,
    pub avg_skin_moisture: f64,
    pub avg_daily_wear_hours: f64,
}

/// Aggregate of one patient's records over a non-overlapping 7-day window.
///
/// Summaries are append-only: one per patient per window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklySummary {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub start_date: jiff::Timestamp,
    pub end_date: jiff::Timestamp,
    pub record_count: u32,
    pub averages: WeeklyAverages,
    pub avg_prosthetic_health_score: f64,
    /// Gait label of the chronologically last record, `"No Data"` if none.
    #[serde(with = "crate::models::labels::no_data")]
    #[ts(type = "string")]
    pub gait_abnormality: Option<GaitLabel>,
    /// Skin label of the chronologically last record, `"No Data"` if none.
    #[serde(with = "crate::models::labels::no_data")]
    #[ts(type = "string")]
    pub skin_risk: Option<SkinRisk>,
    pub abnormal_count: u32,
    pub high_skin_risk_count: u32,
    /// Week-over-week change in average health score for triage tracking.
    pub health_score_delta: f64,
    pub overall_clinical_risk: RiskTier,
    #[serde(default)]
    pub alerts: Vec<String>,
    pub created_at: jiff::Timestamp,
}

impl WeeklySummary {
    pub fn has_data(&self) -> bool {
        self.record_count > 0
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(gait: Option<GaitLabel>, skin: Option<SkinRisk>) -> WeeklySummary {
        WeeklySummary {
            id: Uuid::nil(),
            patient_id: Uuid::nil(),
            start_date: jiff::Timestamp::UNIX_EPOCH,
            end_date: jiff::Timestamp::UNIX_EPOCH,
            record_count: 0,
            averages: WeeklyAverages::default(),
            avg_prosthetic_health_score: 0.0,
            gait_abnormality: gait,
            skin_risk: skin,
            abnormal_count: 0,
            high_skin_risk_count: 0,
            health_score_delta: 0.0,
            overall_clinical_risk: RiskTier::Low,
            alerts: Vec::new(),
            created_at: jiff::Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn missing_labels_serialize_as_no_data() {
        let json = serde_json::to_value(summary(None, None)).unwrap();
        assert_eq!(json["gait_abnormality"], "No Data");
        assert_eq!(json["skin_risk"], "No Data");
    }

    #[test]
    fn labels_survive_json() {
        let original = summary(Some(GaitLabel::Abnormal), Some(SkinRisk::Medium));
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"gait_abnormality\":\"Abnormal\""));

        let parsed: WeeklySummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.gait_abnormality, Some(GaitLabel::Abnormal));
        assert_eq!(parsed.skin_risk, Some(SkinRisk::Medium));

        let empty: WeeklySummary =
            serde_json::from_str(&serde_json::to_string(&summary(None, None)).unwrap()).unwrap();
        assert_eq!(empty.gait_abnormality, None);
    }

    #[test]
    fn unknown_label_text_is_rejected() {
        let mut json = serde_json::to_value(summary(None, None)).unwrap();
        json["skin_risk"] = serde_json::Value::String("Severe".to_string());
        assert!(serde_json::from_value::<WeeklySummary>(json).is_err());
    }
}
