use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client;
use serde::Serialize;
use tracing::debug;

use super::{CompletionRequest, InferenceBackend, LlmError, Message, MessagesResponse};
use super::{MAX_TOKENS, TEMPERATURE};

const BEDROCK_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
/// Used when `BEDROCK_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

#[derive(Debug, Serialize)]
struct InvokeBody<'a> {
    messages: Vec<Message<'a>>,
    anthropic_version: &'a str,
    max_tokens: u32,
    temperature: f32,
}

fn invoke_body(request: &CompletionRequest) -> Result<Vec<u8>, LlmError> {
    Ok(serde_json::to_vec(&InvokeBody {
        messages: request.messages(),
        anthropic_version: BEDROCK_ANTHROPIC_VERSION,
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    })?)
}

fn completion_text(body: &[u8]) -> Result<String, LlmError> {
    let response: MessagesResponse = serde_json::from_slice(body)?;
    if let Some(usage) = &response.usage {
        debug!(
            "Bedrock call succeeded: input_tokens={}, output_tokens={}",
            usage.input_tokens, usage.output_tokens
        );
    }
    response.into_text()
}

/// Anthropic models hosted on Amazon Bedrock, called through `InvokeModel`.
#[derive(Clone)]
pub struct BedrockBackend {
    client: Client,
    model_id: String,
}

impl BedrockBackend {
    pub fn new(client: Client, model_id: String) -> Self {
        Self { client, model_id }
    }
}

#[async_trait]
impl InferenceBackend for BedrockBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let output = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(invoke_body(request)?))
            .send()
            .await
            .map_err(|e| LlmError::Bedrock(DisplayErrorContext(&e).to_string()))?;

        completion_text(output.body().as_ref())
    }

    fn model(&self) -> &str {
        &self.model_id
    }
}
