//! Bedrock Converse implementation of [`NarrativeService`].
//!
//! The runtime client is built once per process on first use and shared by
//! every narrator; there is nothing to tear down beyond process exit.

use std::sync::OnceLock;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use tracing::info;

use crate::error::NarrativeError;
use crate::prompt::SYSTEM_PROMPT;
use crate::service::NarrativeService;

/// Model used when configuration does not name one.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-haiku-4-5-20251001-v1:0";

static CLIENT: OnceLock<Client> = OnceLock::new();

/// The process-wide Bedrock runtime client.
///
/// The first caller's config wins; later calls return the same handle.
pub fn shared_client(config: &aws_config::SdkConfig) -> &'static Client {
    CLIENT.get_or_init(|| {
        info!("initializing Bedrock runtime client");
        Client::new(config)
    })
}

/// Generates narratives with a Claude model through the Converse API.
#[derive(Debug, Clone)]
pub struct BedrockNarrator {
    client: &'static Client,
    model_id: String,
}

impl BedrockNarrator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: shared_client(config),
            model_id: model_id.into(),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl NarrativeService for BedrockNarrator {
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| NarrativeError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
            .messages(message)
            .send()
            .await
            .map_err(|e| classify_converse_error(e.into_service_error()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| NarrativeError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
            .content()
            .iter()
            .filter_map(|block| {
                if let ContentBlock::Text(text) = block {
                    Some(text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if let Some(usage) = response.usage() {
            info!(
                model_id = %self.model_id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "narrative invocation complete"
            );
        }

        Ok(text)
    }
}

/// Throttling and service-unavailable responses are capacity problems;
/// everything else is an invocation fault.
fn classify_converse_error(error: ConverseError) -> NarrativeError {
    match error {
        ConverseError::ThrottlingException(e) => NarrativeError::Throttled(e.to_string()),
        ConverseError::ServiceUnavailableException(e) => NarrativeError::Throttled(e.to_string()),
        other => NarrativeError::Invocation(other.to_string()),
    }
}
