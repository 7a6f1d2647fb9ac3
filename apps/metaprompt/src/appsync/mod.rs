//! AppSync GraphQL client — the only writer of record state.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::models::{NewRecord, RecordKind, Status};

pub mod mutations;

use mutations::{mutation_set, CREATE_PROMPT, CREATE_TASK};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL request failed (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL errors: {0}")]
    GraphQl(String),

    #[error("Failed to parse GraphQL response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No data in GraphQL response")]
    NoData,
}

/// Remote store of prompt and task records. Handlers only propose transitions;
/// the backend owns the stored state.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Status-only update.
    async fn update_status(
        &self,
        kind: RecordKind,
        id: &str,
        status: Status,
    ) -> Result<(), BackendError>;

    /// Terminal success update carrying the result field.
    async fn publish_result(
        &self,
        kind: RecordKind,
        id: &str,
        result: &str,
    ) -> Result<(), BackendError>;

    /// Creates a record in `Pending`.
    async fn create(&self, record: &NewRecord) -> Result<(), BackendError>;
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// API-key authenticated AppSync endpoint.
#[derive(Clone)]
pub struct AppSyncClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl AppSyncClient {
    pub fn new(endpoint: String, api_key: String) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            endpoint,
            api_key,
        })
    }

    /// Runs one GraphQL operation and returns its `data` object.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value, BackendError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: GraphQlResponse = serde_json::from_str(&body)?;
        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(BackendError::GraphQl(messages.join(", ")));
        }

        let data = response.data.ok_or(BackendError::NoData)?;
        debug!("GraphQL response data: {data}");
        Ok(data)
    }
}

#[async_trait]
impl RecordStore for AppSyncClient {
    async fn update_status(
        &self,
        kind: RecordKind,
        id: &str,
        status: Status,
    ) -> Result<(), BackendError> {
        let set = mutation_set(kind);
        let variables = json!({
            "id": id,
            "status": kind.wire_status(status),
        });
        self.execute(set.status_only, variables).await.map(|_| ())
    }

    async fn publish_result(
        &self,
        kind: RecordKind,
        id: &str,
        result: &str,
    ) -> Result<(), BackendError> {
        let set = mutation_set(kind);
        let mut variables = json!({
            "id": id,
            "status": kind.wire_status(Status::Completed),
        });
        variables[set.result_field] = Value::String(result.to_string());
        self.execute(set.with_result, variables).await.map(|_| ())
    }

    async fn create(&self, record: &NewRecord) -> Result<(), BackendError> {
        let status = record.kind().wire_status(Status::Pending);
        let (query, variables) = match record {
            NewRecord::Prompt {
                id,
                task,
                variables,
            } => (
                CREATE_PROMPT,
                json!({ "id": id, "task": task, "variables": variables, "status": status }),
            ),
            NewRecord::Task {
                id,
                original_prompt,
            } => (
                CREATE_TASK,
                json!({ "id": id, "originalPrompt": original_prompt, "status": status }),
            ),
        };
        self.execute(query, variables).await.map(|_| ())
    }
}
