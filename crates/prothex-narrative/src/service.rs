use std::future::Future;

use crate::error::NarrativeError;

/// A text-generation capability: one prompt in, prose or an error out.
///
/// Implementations need not enforce a deadline; [`crate::summarize`] bounds
/// every call.
pub trait NarrativeService: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, NarrativeError>> + Send;
}
