use std::time::Duration;

use prothex_narrative::error::NarrativeError;
use prothex_narrative::service::NarrativeService;
use prothex_narrative::summarize::{UNAVAILABLE_FALLBACK, summarize, try_summarize};

/// Answers every prompt with the same canned outcome.
enum Canned {
    Text(&'static str),
    Throttled,
    Broken,
}

impl NarrativeService for Canned {
    async fn generate(&self, _prompt: &str) -> Result<String, NarrativeError> {
        match self {
            Canned::Text(text) => Ok(text.to_string()),
            Canned::Throttled => Err(NarrativeError::Throttled(
                "429 Too Many Requests".to_string(),
            )),
            Canned::Broken => Err(NarrativeError::Invocation("access denied".to_string())),
        }
    }
}

/// Takes longer than any caller is willing to wait.
struct Stalled;

impl NarrativeService for Stalled {
    async fn generate(&self, _prompt: &str) -> Result<String, NarrativeError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("too late".to_string())
    }
}

/// Answers just inside the deadline.
struct Slow;

impl NarrativeService for Slow {
    async fn generate(&self, _prompt: &str) -> Result<String, NarrativeError> {
        tokio::time::sleep(Duration::from_secs(14)).await;
        Ok("Gait is stable.".to_string())
    }
}

#[tokio::test]
async fn successful_reply_is_returned_trimmed() {
    let text = summarize(&Canned::Text("  Gait symmetry is improving.\n"), "prompt").await;
    assert_eq!(text, "Gait symmetry is improving.");
}

#[tokio::test(start_paused = true)]
async fn timeout_produces_unavailable_fallback() {
    let text = summarize(&Stalled, "prompt").await;
    assert_eq!(text, UNAVAILABLE_FALLBACK);
}

#[tokio::test(start_paused = true)]
async fn timeout_is_reported_as_unavailable() {
    let err = try_summarize(&Stalled, "prompt").await.unwrap_err();
    assert!(matches!(err, NarrativeError::Timeout(d) if d == Duration::from_secs(15)));
    assert!(err.is_unavailable());
}

#[tokio::test(start_paused = true)]
async fn reply_inside_deadline_is_kept() {
    assert_eq!(summarize(&Slow, "prompt").await, "Gait is stable.");
}

#[tokio::test]
async fn throttling_produces_unavailable_fallback() {
    assert_eq!(summarize(&Canned::Throttled, "prompt").await, UNAVAILABLE_FALLBACK);
}

#[tokio::test]
async fn other_failures_carry_diagnostic_detail() {
    let text = summarize(&Canned::Broken, "prompt").await;
    assert_ne!(text, UNAVAILABLE_FALLBACK);
    assert!(text.starts_with("Clinical interpretation failed to generate."));
    assert!(text.contains("access denied"));
}

#[tokio::test]
async fn empty_reply_is_a_generic_failure() {
    let text = summarize(&Canned::Text("   \n"), "prompt").await;
    assert!(text.contains("empty response from narrative service"));

    let err = try_summarize(&Canned::Text(""), "prompt").await.unwrap_err();
    assert!(matches!(err, NarrativeError::EmptyResponse));
    assert!(!err.is_unavailable());
}
