use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::record::MetricRecord;
use prothex_core::models::weekly::WeeklySummary;
use prothex_core::window::TimeWindow;
use prothex_engine::weekly::aggregate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::prompt::build_clinical_prompt;
use crate::service::NarrativeService;
use crate::summarize::summarize;

/// Narrative used for a window with no records; the service is not called.
pub const NO_DATA_NARRATIVE: &str = "No metrics were recorded for this period.";

/// A weekly summary together with its prose commentary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyReport {
    #[serde(flatten)]
    pub summary: WeeklySummary,
    pub analysis: String,
}

/// Aggregate a window and narrate it.
///
/// The numeric summary is computed first and always returned; a slow or
/// failing narrative service only affects `analysis`.
pub async fn weekly_report<S: NarrativeService>(
    service: &S,
    patient_id: Uuid,
    records: &[MetricRecord],
    window: &TimeWindow,
    previous: Option<&WeeklySummary>,
    profile: &ClinicalProfile,
) -> WeeklyReport {
    let summary = aggregate(patient_id, records, window, previous, profile);

    let analysis = if summary.has_data() {
        let prompt = build_clinical_prompt(profile, &summary.averages);
        summarize(service, &prompt).await
    } else {
        NO_DATA_NARRATIVE.to_string()
    };

    info!(
        patient_id = %patient_id,
        record_count = summary.record_count,
        risk = %summary.overall_clinical_risk,
        "weekly report assembled"
    );

    WeeklyReport { summary, analysis }
}
