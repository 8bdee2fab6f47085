//! Subcommand handlers. Each returns the value to print so the binary only
//! deals with argument parsing and output.

use std::path::Path;

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use prothex_core::error::CoreError;
use prothex_core::models::analysis::AnalysisResult;
use prothex_core::models::metrics::MetricSet;
use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::record::MetricRecord;
use prothex_core::models::weekly::WeeklySummary;
use prothex_core::source::{ProfileSource, RecordSource, SummarySource};
use prothex_core::window::{TimeWindow, start_of_day, week_start};
use prothex_engine::alerts::record_alerts;
use prothex_engine::analysis::{analyze, classify_record};
use prothex_engine::cohort::{CohortDistribution, cohort_distribution};
use prothex_engine::trends::{DEFAULT_TREND_LENGTH, TrendSeries, trend_series};
use prothex_engine::weekly::aggregate;
use prothex_narrative::report::{WeeklyReport, weekly_report};
use prothex_narrative::service::NarrativeService;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::store::JsonStore;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("failed to parse {}: {e}", path.display()))
}

/// Analyze a record against a profile, both read from files.
pub fn analyze_files(record: &Path, profile: &Path) -> eyre::Result<AnalysisResult> {
    let record: MetricRecord = read_json(record)?;
    let profile: ClinicalProfile = read_json(profile)?;
    let result = analyze(&record, &profile);
    info!(
        record_id = %record.id,
        risk = %result.overall_clinical_risk,
        recommendations = result.recommendations.len(),
        "record analyzed"
    );
    Ok(result)
}

/// Store a clinical profile, replacing any previous one for the patient.
pub async fn import_profile(store: &JsonStore, profile: &ClinicalProfile) -> eyre::Result<()> {
    store.put_profile(profile).await?;
    info!(patient_id = %profile.patient_id, "profile imported");
    Ok(())
}

/// Classify a day's metrics against the stored profile and append the
/// resulting record.
///
/// A backdated record is timestamped at midnight UTC of its `date`, so it
/// falls in the weekly window of the day it describes.
pub async fn submit(
    store: &JsonStore,
    patient_id: Uuid,
    metrics: MetricSet,
    date: Option<Date>,
) -> eyre::Result<MetricRecord> {
    let profile = store
        .profile(patient_id)
        .await?
        .ok_or(CoreError::ProfileNotFound(patient_id))?;
    let backdated = date.is_some();
    let date = date.unwrap_or_else(|| Timestamp::now().to_zoned(TimeZone::UTC).date());

    let mut record = classify_record(patient_id, date, metrics, &profile);
    if backdated {
        record.created_at = start_of_day(date)?;
    }
    store.append_record(&record).await?;

    for alert in record_alerts(&record) {
        warn!(patient_id = %patient_id, record_id = %record.id, alert = %alert, "record alert");
    }
    info!(
        patient_id = %patient_id,
        record_id = %record.id,
        gait = %record.gait_abnormality,
        skin = %record.skin_risk,
        score = record.prosthetic_health_score,
        "record submitted"
    );
    Ok(record)
}

/// End of the most recent complete week at `now`: Monday 00:00 UTC.
///
/// Scheduled runs that use this default produce abutting windows, so each
/// summary finds its predecessor for the score delta.
pub fn default_week_end(now: Timestamp) -> eyre::Result<Timestamp> {
    Ok(week_start(now)?)
}

/// Everything a weekly run reads from the store.
struct WeeklyInputs {
    window: TimeWindow,
    profile: ClinicalProfile,
    records: Vec<MetricRecord>,
    previous: Option<WeeklySummary>,
}

async fn weekly_inputs(
    store: &JsonStore,
    patient_id: Uuid,
    end: Timestamp,
) -> eyre::Result<WeeklyInputs> {
    let window = TimeWindow::trailing_week(end)?;
    let profile = match store.profile(patient_id).await? {
        Some(profile) => profile,
        None => {
            info!(patient_id = %patient_id, "no stored profile, assessing metrics only");
            ClinicalProfile::new(patient_id)
        }
    };
    let records = store.records_in_window(patient_id, &window).await?;
    let previous = store.previous_summary(patient_id, &window).await?;
    Ok(WeeklyInputs {
        window,
        profile,
        records,
        previous,
    })
}

/// Summarize the week ending at `end` and store the summary.
///
/// Re-running the same window replaces its summary; a window overlapping
/// a different stored one is an error.
pub async fn weekly(
    store: &JsonStore,
    patient_id: Uuid,
    end: Timestamp,
) -> eyre::Result<WeeklySummary> {
    let inputs = weekly_inputs(store, patient_id, end).await?;
    let summary = aggregate(
        patient_id,
        &inputs.records,
        &inputs.window,
        inputs.previous.as_ref(),
        &inputs.profile,
    );
    store.put_summary(&summary).await?;
    Ok(summary)
}

/// Like [`weekly`], with a narrative from `service`.
pub async fn weekly_narrated<S: NarrativeService>(
    store: &JsonStore,
    service: &S,
    patient_id: Uuid,
    end: Timestamp,
) -> eyre::Result<WeeklyReport> {
    let inputs = weekly_inputs(store, patient_id, end).await?;
    let report = weekly_report(
        service,
        patient_id,
        &inputs.records,
        &inputs.window,
        inputs.previous.as_ref(),
        &inputs.profile,
    )
    .await;
    store.put_summary(&report.summary).await?;
    Ok(report)
}

/// Triage distribution over every patient in the store.
pub async fn cohort(store: &JsonStore) -> eyre::Result<CohortDistribution> {
    let mut latest = Vec::new();
    for patient_id in store.patient_ids().await? {
        latest.push(store.latest_record(patient_id).await?);
    }
    let distribution = cohort_distribution(latest.iter().map(Option::as_ref));
    info!(patients = distribution.total(), "cohort triaged");
    Ok(distribution)
}

/// A patient's latest record, its alerts, recent trends and latest weekly
/// summary.
#[derive(Debug, Clone, Serialize)]
pub struct PatientDashboard {
    pub patient_id: Uuid,
    pub latest_record: Option<MetricRecord>,
    pub alerts: Vec<String>,
    pub trends: TrendSeries,
    pub latest_summary: Option<WeeklySummary>,
}

pub async fn dashboard(store: &JsonStore, patient_id: Uuid) -> eyre::Result<PatientDashboard> {
    let records = store.records(patient_id).await?;
    let latest_record = records.iter().max_by_key(|r| r.created_at).cloned();
    let alerts = latest_record
        .as_ref()
        .map(record_alerts)
        .unwrap_or_default();
    let latest_summary = store
        .summaries(patient_id)
        .await?
        .into_iter()
        .max_by_key(|s| s.end_date);

    Ok(PatientDashboard {
        patient_id,
        alerts,
        trends: trend_series(&records, DEFAULT_TREND_LENGTH),
        latest_record,
        latest_summary,
    })
}
