//! In-memory fakes for handler and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::appsync::{BackendError, RecordStore};
use crate::dispatch::{DispatchError, Job, JobDispatcher};
use crate::llm_client::{CompletionRequest, InferenceBackend, LlmError};
use crate::models::{NewRecord, RecordKind, Status};

enum Reply {
    Text(String),
    Failure,
    Malformed,
}

pub struct FakeBackend {
    reply: Reply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeBackend {
    fn with(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn failing() -> Self {
        Self::with(Reply::Failure)
    }

    pub fn malformed() -> Self {
        Self::with(Reply::Malformed)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for FakeBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Failure => Err(LlmError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            }),
            Reply::Malformed => Err(LlmError::EmptyContent),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Status(RecordKind, String, Status),
    Result(RecordKind, String, String),
    Create(NewRecord),
}

/// Records every attempted mutation, including the ones it fails.
#[derive(Default)]
pub struct FakeRecords {
    calls: Mutex<Vec<StoreCall>>,
    fail_status: Option<Status>,
    fail_results: bool,
    fail_create: bool,
}

impl FakeRecords {
    pub fn failing_status(status: Status) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    pub fn failing_results() -> Self {
        Self {
            fail_results: true,
            ..Self::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn error_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Status(_, _, Status::Error)))
            .count()
    }

    pub fn result_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::Result(..)))
            .count()
    }

    fn rejected() -> BackendError {
        BackendError::GraphQl("rejected".to_string())
    }
}

#[async_trait]
impl RecordStore for FakeRecords {
    async fn update_status(
        &self,
        kind: RecordKind,
        id: &str,
        status: Status,
    ) -> Result<(), BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Status(kind, id.to_string(), status));
        if self.fail_status == Some(status) {
            return Err(Self::rejected());
        }
        Ok(())
    }

    async fn publish_result(
        &self,
        kind: RecordKind,
        id: &str,
        result: &str,
    ) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(StoreCall::Result(
            kind,
            id.to_string(),
            result.to_string(),
        ));
        if self.fail_results {
            return Err(Self::rejected());
        }
        Ok(())
    }

    async fn create(&self, record: &NewRecord) -> Result<(), BackendError> {
        self.calls
            .lock()
            .unwrap()
            .push(StoreCall::Create(record.clone()));
        if self.fail_create {
            return Err(Self::rejected());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeDispatcher {
    jobs: Mutex<Vec<Job>>,
    fail: bool,
}

impl FakeDispatcher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobDispatcher for FakeDispatcher {
    async fn dispatch(&self, job: &Job) -> Result<(), DispatchError> {
        self.jobs.lock().unwrap().push(job.clone());
        if self.fail {
            return Err(DispatchError::Invoke("function not found".to_string()));
        }
        Ok(())
    }
}
