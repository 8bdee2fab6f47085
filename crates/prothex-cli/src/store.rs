//! JSON file store backing the record, profile and summary sources.
//!
//! Layout under the data directory, one file per patient:
//!
//! ```text
//! profiles/{patient_id}.json   ClinicalProfile
//! records/{patient_id}.json    [MetricRecord, ...]
//! weekly/{patient_id}.json     [WeeklySummary, ...]
//! ```
//!
//! Weekly summaries never overlap: one per patient per window.
//!
//! Writes go through a temp file and a rename. The store assumes a single
//! writer per data directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use prothex_core::error::CoreError;
use prothex_core::models::profile::ClinicalProfile;
use prothex_core::models::record::MetricRecord;
use prothex_core::models::weekly::WeeklySummary;
use prothex_core::source::{ProfileSource, RecordSource, SummarySource};
use prothex_core::window::TimeWindow;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

const PROFILES: &str = "profiles";
const RECORDS: &str = "records";
const WEEKLY: &str = "weekly";

#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, kind: &str, patient_id: Uuid) -> PathBuf {
        self.root.join(kind).join(format!("{patient_id}.json"))
    }

    pub async fn put_profile(&self, profile: &ClinicalProfile) -> Result<(), CoreError> {
        write_json(&self.path(PROFILES, profile.patient_id), profile).await?;
        tracing::debug!(patient_id = %profile.patient_id, "profile stored");
        Ok(())
    }

    pub async fn append_record(&self, record: &MetricRecord) -> Result<(), CoreError> {
        let path = self.path(RECORDS, record.patient_id);
        let mut records: Vec<MetricRecord> = read_list(&path).await?;
        records.push(record.clone());
        write_json(&path, &records).await?;
        tracing::debug!(
            patient_id = %record.patient_id,
            record_id = %record.id,
            total = records.len(),
            "record appended"
        );
        Ok(())
    }

    /// Store a weekly summary, keeping at most one per window.
    ///
    /// A summary for exactly the same window replaces the stored one. A
    /// window that partially overlaps a stored summary is refused.
    pub async fn put_summary(&self, summary: &WeeklySummary) -> Result<(), CoreError> {
        let path = self.path(WEEKLY, summary.patient_id);
        let mut summaries: Vec<WeeklySummary> = read_list(&path).await?;
        let window = summary.window();

        if summaries
            .iter()
            .any(|s| s.window() != window && s.window().overlaps(&window))
        {
            return Err(CoreError::OverlappingSummary {
                patient_id: summary.patient_id,
                start: window.start,
                end: window.end,
            });
        }

        let before = summaries.len();
        summaries.retain(|s| s.window() != window);
        let replaced = before - summaries.len();
        summaries.push(summary.clone());
        summaries.sort_by_key(|s| s.start_date);
        write_json(&path, &summaries).await?;
        tracing::debug!(
            patient_id = %summary.patient_id,
            summary_id = %summary.id,
            replaced,
            "weekly summary stored"
        );
        Ok(())
    }

    /// All stored weekly summaries for a patient, oldest window first.
    pub async fn summaries(&self, patient_id: Uuid) -> Result<Vec<WeeklySummary>, CoreError> {
        read_list(&self.path(WEEKLY, patient_id)).await
    }

    /// Every patient with a profile or at least one record, sorted.
    pub async fn patient_ids(&self) -> Result<Vec<Uuid>, CoreError> {
        let mut ids = BTreeSet::new();
        for kind in [PROFILES, RECORDS] {
            ids.extend(ids_in(&self.root.join(kind)).await?);
        }
        Ok(ids.into_iter().collect())
    }

    /// All records for a patient, oldest first.
    pub async fn records(&self, patient_id: Uuid) -> Result<Vec<MetricRecord>, CoreError> {
        let mut records: Vec<MetricRecord> = read_list(&self.path(RECORDS, patient_id)).await?;
        records.sort_by_key(|r| r.created_at);
        Ok(records)
    }
}

impl RecordSource for JsonStore {
    async fn records_in_window(
        &self,
        patient_id: Uuid,
        window: &TimeWindow,
    ) -> Result<Vec<MetricRecord>, CoreError> {
        let mut records = self.records(patient_id).await?;
        records.retain(|r| window.contains(r.created_at));
        Ok(records)
    }

    async fn latest_record(&self, patient_id: Uuid) -> Result<Option<MetricRecord>, CoreError> {
        let records = self.records(patient_id).await?;
        Ok(records.into_iter().max_by_key(|r| r.created_at))
    }
}

impl ProfileSource for JsonStore {
    async fn profile(&self, patient_id: Uuid) -> Result<Option<ClinicalProfile>, CoreError> {
        let path = self.path(PROFILES, patient_id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}

impl SummarySource for JsonStore {
    async fn previous_summary(
        &self,
        patient_id: Uuid,
        window: &TimeWindow,
    ) -> Result<Option<WeeklySummary>, CoreError> {
        let summaries: Vec<WeeklySummary> = read_list(&self.path(WEEKLY, patient_id)).await?;
        Ok(summaries
            .into_iter()
            .filter(|s| s.end_date == window.start)
            .max_by_key(|s| s.created_at))
    }
}

fn io_error(path: &Path, e: std::io::Error) -> CoreError {
    CoreError::Source(format!("{}: {e}", path.display()))
}

async fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CoreError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(io_error(path, e)),
    }
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CoreError> {
    let dir = path
        .parent()
        .ok_or_else(|| CoreError::Source(format!("{}: no parent directory", path.display())))?;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| io_error(dir, e))?;

    let json = serde_json::to_vec_pretty(value)?;
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, json)
        .await
        .map_err(|e| io_error(&tmp_path, e))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| io_error(path, e))?;
    Ok(())
}

/// Patient ids named by `*.json` files in `dir`. A missing directory is empty.
async fn ids_in(dir: &Path) -> Result<Vec<Uuid>, CoreError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error(dir, e)),
    };

    let mut ids = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(dir, e))? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match path.file_stem().and_then(|s| s.to_str()).map(Uuid::parse_str) {
            Some(Ok(id)) => ids.push(id),
            _ => tracing::debug!(path = %path.display(), "skipping unrecognized store file"),
        }
    }
    Ok(ids)
}
