use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("request throttled or quota exceeded: {0}")]
    Throttled(String),

    #[error("narrative service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("empty response from narrative service")]
    EmptyResponse,

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl NarrativeError {
    /// Whether the failure is a capacity problem the caller should retry
    /// later, as opposed to a fault that needs investigating.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, NarrativeError::Throttled(_) | NarrativeError::Timeout(_))
    }
}
