//! Hands jobs from the request API to the worker functions.

use async_trait::async_trait;
use aws_sdk_lambda::error::DisplayErrorContext;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use aws_sdk_lambda::Client;
use thiserror::Error;
use tracing::info;

use crate::distillation::distiller::DistillationRequest;
use crate::generation::generator::GenerationRequest;
use crate::models::RecordKind;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Failed to encode job payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Lambda invoke failed: {0}")]
    Invoke(String),

    #[error("Lambda invoke returned status {0}")]
    Status(i32),
}

/// A unit of work for one of the worker functions.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    Generate(GenerationRequest),
    Distill(DistillationRequest),
}

impl Job {
    pub fn kind(&self) -> RecordKind {
        match self {
            Job::Generate(_) => RecordKind::Prompt,
            Job::Distill(_) => RecordKind::Task,
        }
    }

    pub fn record_id(&self) -> &str {
        match self {
            Job::Generate(request) => &request.prompt_id,
            Job::Distill(request) => &request.task_id,
        }
    }

    /// The worker's event payload.
    pub fn payload(&self) -> Result<Vec<u8>, serde_json::Error> {
        match self {
            Job::Generate(request) => serde_json::to_vec(request),
            Job::Distill(request) => serde_json::to_vec(request),
        }
    }
}

/// Starts a job without waiting for it to finish.
#[async_trait]
pub trait JobDispatcher: Send + Sync {
    async fn dispatch(&self, job: &Job) -> Result<(), DispatchError>;
}

/// Asynchronous (`Event`) Lambda invocations of the worker functions.
#[derive(Clone)]
pub struct LambdaDispatcher {
    client: Client,
    generator_function: String,
    distiller_function: String,
}

impl LambdaDispatcher {
    pub fn new(client: Client, generator_function: String, distiller_function: String) -> Self {
        Self {
            client,
            generator_function,
            distiller_function,
        }
    }

    fn function_for(&self, job: &Job) -> &str {
        match job {
            Job::Generate(_) => &self.generator_function,
            Job::Distill(_) => &self.distiller_function,
        }
    }
}

#[async_trait]
impl JobDispatcher for LambdaDispatcher {
    async fn dispatch(&self, job: &Job) -> Result<(), DispatchError> {
        let function = self.function_for(job);
        let output = self
            .client
            .invoke()
            .function_name(function)
            .invocation_type(InvocationType::Event)
            .payload(Blob::new(job.payload()?))
            .send()
            .await
            .map_err(|e| DispatchError::Invoke(DisplayErrorContext(&e).to_string()))?;

        let status = output.status_code();
        if !(200..300).contains(&status) {
            return Err(DispatchError::Status(status));
        }

        info!(
            record_id = job.record_id(),
            kind = %job.kind(),
            function,
            "Dispatched job"
        );
        Ok(())
    }
}
