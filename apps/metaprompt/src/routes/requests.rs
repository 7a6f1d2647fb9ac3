//! Axum route handlers that accept new prompt and task requests.
//!
//! Each request creates a `PENDING` record, then starts the matching worker
//! asynchronously. Progress is reported through the record's status, not
//! through this response.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::dispatch::Job;
use crate::distillation::distiller::DistillationRequest;
use crate::errors::AppError;
use crate::generation::generator::GenerationRequest;
use crate::models::{NewRecord, Status};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptRequest {
    pub task: String,
    #[serde(default)]
    pub variables: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub original_prompt: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
    pub status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /createPrompt
pub async fn handle_create_prompt(
    State(state): State<AppState>,
    Json(request): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    if request.task.trim().is_empty() {
        return Err(AppError::Validation("task cannot be empty".to_string()));
    }

    let id = Uuid::new_v4().to_string();
    let record = NewRecord::Prompt {
        id: id.clone(),
        task: request.task.clone(),
        variables: request.variables.clone(),
    };
    let job = Job::Generate(GenerationRequest {
        prompt_id: id,
        task: request.task,
        variables: request.variables,
    });

    submit(&state, record, job).await
}

/// POST /createTask
pub async fn handle_create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    if request.original_prompt.trim().is_empty() {
        return Err(AppError::Validation(
            "originalPrompt cannot be empty".to_string(),
        ));
    }

    let id = Uuid::new_v4().to_string();
    let record = NewRecord::Task {
        id: id.clone(),
        original_prompt: request.original_prompt.clone(),
    };
    let job = Job::Distill(DistillationRequest {
        task_id: id,
        original_prompt: request.original_prompt,
    });

    submit(&state, record, job).await
}

/// Creates the record, then dispatches its job. A record whose job never
/// started is marked `ERROR` so it does not sit in `PENDING` forever.
async fn submit(
    state: &AppState,
    record: NewRecord,
    job: Job,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let kind = record.kind();
    let id = record.id().to_string();

    state.records.create(&record).await?;
    info!(record_id = %id, %kind, "Created record");

    if let Err(err) = state.dispatcher.dispatch(&job).await {
        error!(record_id = %id, %kind, "Failed to dispatch job: {err}");
        if let Err(status_err) = state.records.update_status(kind, &id, Status::Error).await {
            error!(record_id = %id, "Failed to mark record as ERROR: {status_err}");
        }
        return Err(err.into());
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(CreatedResponse {
            id,
            status: kind.wire_status(Status::Pending).to_string(),
        }),
    ))
}
