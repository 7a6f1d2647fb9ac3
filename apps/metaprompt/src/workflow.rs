//! The status → template → inference → extract → status pipeline shared by
//! the prompt generator and the task distiller.
//!
//! Any failure after the in-progress update collapses to a single `ERROR`
//! mutation. The cause stays typed in `WorkflowError` so logs can tell a
//! transport failure from a model that ignored the requested format.

use thiserror::Error;
use tracing::{debug, error, info};

use crate::appsync::{BackendError, RecordStore};
use crate::extract::{extract_tagged, ExtractError};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{CompletionRequest, InferenceBackend, LlmError};
use crate::models::{RecordKind, Status};

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Inference failed: {0}")]
    Inference(#[from] LlmError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Status update failed: {0}")]
    Backend(#[from] BackendError),
}

impl WorkflowError {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkflowError::Inference(e) if e.is_malformed() => "malformed_completion",
            WorkflowError::Inference(_) => "transport",
            WorkflowError::Extraction(_) => "missing_tag",
            WorkflowError::Backend(_) => "backend",
        }
    }
}

/// How an invocation ended. Either way a terminal status was recorded.
#[derive(Debug)]
pub enum Outcome {
    Completed(String),
    Failed(WorkflowError),
}

/// One handler's parameters.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    /// Selects the mutation set and status spelling.
    pub kind: RecordKind,
    pub template: &'static str,
    pub placeholder: &'static str,
    /// Tag wrapping the result in the completion.
    pub tag: &'static str,
    pub collapse_empty_tags: bool,
}

/// Per-invocation input.
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    pub record_id: &'a str,
    /// Caller text substituted for the placeholder.
    pub input: &'a str,
    pub assistant_partial: String,
}

impl Pipeline {
    pub fn build_request(&self, invocation: &Invocation<'_>) -> CompletionRequest {
        CompletionRequest {
            user_prompt: fill_template(self.template, self.placeholder, invocation.input),
            assistant_partial: invocation.assistant_partial.clone(),
        }
    }

    pub fn extract(&self, completion: &str) -> Result<String, ExtractError> {
        extract_tagged(completion, self.tag, self.collapse_empty_tags)
    }

    /// Drives one record to a terminal status.
    ///
    /// Returns `Err` only when the `ERROR` mutation itself could not be sent,
    /// leaving the record in a non-terminal state.
    pub async fn run(
        &self,
        llm: &dyn InferenceBackend,
        records: &dyn RecordStore,
        invocation: Invocation<'_>,
    ) -> Result<Outcome, BackendError> {
        let record_id = invocation.record_id;
        match self.try_run(llm, records, &invocation).await {
            Ok(result) => Ok(Outcome::Completed(result)),
            Err(err) => {
                error!(
                    record_id,
                    kind = %self.kind,
                    error_kind = err.kind(),
                    "Error processing {}: {err}",
                    self.kind
                );
                info!(
                    record_id,
                    kind = %self.kind,
                    status = self.kind.wire_status(Status::Error),
                    "Updating AppSync record status"
                );
                records
                    .update_status(self.kind, record_id, Status::Error)
                    .await?;
                Ok(Outcome::Failed(err))
            }
        }
    }

    async fn try_run(
        &self,
        llm: &dyn InferenceBackend,
        records: &dyn RecordStore,
        invocation: &Invocation<'_>,
    ) -> Result<String, WorkflowError> {
        let record_id = invocation.record_id;

        info!(
            record_id,
            kind = %self.kind,
            status = self.kind.wire_status(Status::InProgress),
            "Updating AppSync record status"
        );
        records
            .update_status(self.kind, record_id, Status::InProgress)
            .await?;

        let request = self.build_request(invocation);
        debug!(record_id, "User prompt:\n{}", request.user_prompt);
        debug!(record_id, "Assistant partial:\n{}", request.assistant_partial);

        info!(record_id, model = llm.model(), "Invoking model");
        let completion = llm.complete(&request).await?;
        debug!(record_id, "Completion:\n{completion}");

        let result = self.extract(&completion)?;
        debug!(record_id, "Extracted result:\n{result}");

        info!(
            record_id,
            kind = %self.kind,
            status = self.kind.wire_status(Status::Completed),
            "Updating AppSync record status"
        );
        records
            .publish_result(self.kind, record_id, &result)
            .await?;

        Ok(result)
    }
}
