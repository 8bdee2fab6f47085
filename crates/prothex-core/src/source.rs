//! Collaborator interfaces the engine reads from.
//!
//! Storage, querying and identity live outside the engine. These traits
//! describe only what the engine needs from them; callers supply an
//! implementation backed by whatever document store they use.

use std::future::Future;

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::profile::ClinicalProfile;
use crate::models::record::MetricRecord;
use crate::models::weekly::WeeklySummary;
use crate::window::TimeWindow;

/// Supplies a patient's metric records.
pub trait RecordSource {
    /// Records for `patient_id` created within `window`, oldest first.
    ///
    /// The returned batch is treated as a stable snapshot for the duration
    /// of one aggregation.
    fn records_in_window(
        &self,
        patient_id: Uuid,
        window: &TimeWindow,
    ) -> impl Future<Output = Result<Vec<MetricRecord>, CoreError>> + Send;

    /// The most recent record for `patient_id`, if any.
    fn latest_record(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Option<MetricRecord>, CoreError>> + Send;
}

/// Supplies a patient's clinical profile.
pub trait ProfileSource {
    fn profile(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Option<ClinicalProfile>, CoreError>> + Send;
}

/// Supplies previously produced weekly summaries.
pub trait SummarySource {
    /// The summary whose window ends exactly where `window` starts.
    fn previous_summary(
        &self,
        patient_id: Uuid,
        window: &TimeWindow,
    ) -> impl Future<Output = Result<Option<WeeklySummary>, CoreError>> + Send;
}
