use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("time arithmetic error: {0}")]
    Time(#[from] jiff::Error),

    #[error("no clinical profile for patient {0}")]
    ProfileNotFound(uuid::Uuid),

    #[error("patient {patient_id} already has a weekly summary overlapping {start}..{end}")]
    OverlappingSummary {
        patient_id: uuid::Uuid,
        start: jiff::Timestamp,
        end: jiff::Timestamp,
    },

    #[error("record source error: {0}")]
    Source(String),
}
