/// LLM Client — the single point of entry for all model inference in the service.
///
/// No other module may talk to Bedrock or the Anthropic API directly; handlers
/// receive an `InferenceBackend` built once at start-up.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod anthropic;
pub mod bedrock;
pub mod prompts;

pub use anthropic::AnthropicBackend;
pub use bedrock::BedrockBackend;

/// Generation ceiling for every call.
pub const MAX_TOKENS: u32 = 8192;
/// Deterministic sampling.
pub const TEMPERATURE: f32 = 0.0;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Bedrock invocation failed: {0}")]
    Bedrock(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned no text content")]
    EmptyContent,
}

impl LlmError {
    /// True when the model answered but the payload had an unexpected shape.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LlmError::Parse(_) | LlmError::EmptyContent)
    }
}

/// One user turn plus the text pre-filled into the assistant turn.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub user_prompt: String,
    pub assistant_partial: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct Message<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl CompletionRequest {
    pub(crate) fn messages(&self) -> Vec<Message<'_>> {
        vec![
            Message {
                role: "user",
                content: &self.user_prompt,
            },
            Message {
                role: "assistant",
                content: &self.assistant_partial,
            },
        ]
    }
}

/// Messages API response body, shared by Bedrock and the direct API.
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl MessagesResponse {
    /// Text of the first content block. Anything else is a malformed completion.
    pub fn into_text(self) -> Result<String, LlmError> {
        self.content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or(LlmError::EmptyContent)
    }
}

/// A hosted model that turns a prompt into completion text.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
