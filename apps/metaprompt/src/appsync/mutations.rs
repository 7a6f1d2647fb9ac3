// GraphQL documents for the prompt and task records.

use crate::models::RecordKind;

pub const UPDATE_PROMPT_STATUS: &str = r#"
mutation UpdatePrompt($id: ID!, $status: PromptStatus!) {
  updatePrompt(id: $id, status: $status) {
    id
    owner
    prompt
    status
    task
    variables
  }
}"#;

pub const UPDATE_PROMPT_WITH_RESULT: &str = r#"
mutation UpdatePrompt($id: ID!, $status: PromptStatus!, $prompt: String) {
  updatePrompt(id: $id, status: $status, prompt: $prompt) {
    id
    owner
    prompt
    status
    task
    variables
  }
}"#;

pub const CREATE_PROMPT: &str = r#"
mutation CreatePrompt($id: ID!, $task: String!, $variables: [String!], $status: PromptStatus!) {
  createPrompt(id: $id, task: $task, variables: $variables, status: $status) {
    id
    status
  }
}"#;

pub const UPDATE_TASK_STATUS: &str = r#"
mutation UpdateTask($id: ID!, $status: TaskStatus!) {
  updateTask(id: $id, status: $status) {
    id
    owner
    originalPrompt
    distilledTask
    status
  }
}"#;

pub const UPDATE_TASK_WITH_RESULT: &str = r#"
mutation UpdateTask($id: ID!, $status: TaskStatus!, $distilledTask: String) {
  updateTask(id: $id, status: $status, distilledTask: $distilledTask) {
    id
    owner
    originalPrompt
    distilledTask
    status
  }
}"#;

pub const CREATE_TASK: &str = r#"
mutation CreateTask($id: ID!, $originalPrompt: String!, $status: TaskStatus!) {
  createTask(id: $id, originalPrompt: $originalPrompt, status: $status) {
    id
    status
  }
}"#;

/// The update mutations for one record type.
#[derive(Debug, Clone, Copy)]
pub struct MutationSet {
    pub status_only: &'static str,
    pub with_result: &'static str,
    /// Variable carrying the result in `with_result`.
    pub result_field: &'static str,
}

pub fn mutation_set(kind: RecordKind) -> MutationSet {
    match kind {
        RecordKind::Prompt => MutationSet {
            status_only: UPDATE_PROMPT_STATUS,
            with_result: UPDATE_PROMPT_WITH_RESULT,
            result_field: "prompt",
        },
        RecordKind::Task => MutationSet {
            status_only: UPDATE_TASK_STATUS,
            with_result: UPDATE_TASK_WITH_RESULT,
            result_field: "distilledTask",
        },
    }
}
