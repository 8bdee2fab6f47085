use std::time::Duration;

use tracing::{info, warn};

use crate::error::NarrativeError;
use crate::service::NarrativeService;

/// Upper bound on one narrative request.
pub const NARRATIVE_TIMEOUT: Duration = Duration::from_secs(15);

/// Returned when the service is throttled, over quota or too slow.
pub const UNAVAILABLE_FALLBACK: &str = "Clinical interpretation is temporarily unavailable \
due to high usage. Please try again later.";

/// Request a short narrative for `prompt`.
///
/// Never fails: a timeout, transport or quota error, or an empty reply is
/// logged and replaced by a fixed fallback message. Capacity problems get
/// [`UNAVAILABLE_FALLBACK`]; anything else gets a message carrying the
/// error detail.
pub async fn summarize<S: NarrativeService>(service: &S, prompt: &str) -> String {
    match try_summarize(service, prompt).await {
        Ok(text) => {
            info!(text_len = text.len(), "narrative generated");
            text
        }
        Err(e) => {
            warn!(
                error = %e,
                unavailable = e.is_unavailable(),
                "narrative generation failed, using fallback"
            );
            fallback_for(&e)
        }
    }
}

/// Like [`summarize`] but surfaces the failure instead of substituting a
/// fallback.
pub async fn try_summarize<S: NarrativeService>(
    service: &S,
    prompt: &str,
) -> Result<String, NarrativeError> {
    let text = tokio::time::timeout(NARRATIVE_TIMEOUT, service.generate(prompt))
        .await
        .map_err(|_| NarrativeError::Timeout(NARRATIVE_TIMEOUT))??;

    let text = text.trim();
    if text.is_empty() {
        return Err(NarrativeError::EmptyResponse);
    }
    Ok(text.to_string())
}

/// The fallback message shown in place of a failed narrative.
pub fn fallback_for(error: &NarrativeError) -> String {
    if error.is_unavailable() {
        UNAVAILABLE_FALLBACK.to_string()
    } else {
        format!(
            "Clinical interpretation failed to generate. Error: {error}. \
             Please check system logs and narrative service configuration."
        )
    }
}
