use std::fmt;

/// Lifecycle of a prompt or task record held by the GraphQL backend.
///
/// `Error` is absorbing: it may be proposed from any non-terminal state and
/// nothing follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
    Error,
}

/// Which backend record type a job works on. Selects the mutation set and the
/// wire spelling of each status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Prompt,
    Task,
}

impl RecordKind {
    /// GraphQL enum value for `status` on this record type.
    pub fn wire_status(self, status: Status) -> &'static str {
        match (self, status) {
            (_, Status::Pending) => "PENDING",
            (RecordKind::Prompt, Status::InProgress) => "GENERATING",
            (RecordKind::Prompt, Status::Completed) => "GENERATED",
            (RecordKind::Task, Status::InProgress) => "PROCESSING",
            (RecordKind::Task, Status::Completed) => "COMPLETED",
            (_, Status::Error) => "ERROR",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Prompt => write!(f, "prompt"),
            RecordKind::Task => write!(f, "task"),
        }
    }
}

/// A record to create before its job is dispatched.
#[derive(Debug, Clone, PartialEq)]
pub enum NewRecord {
    Prompt {
        id: String,
        task: String,
        variables: Vec<String>,
    },
    Task {
        id: String,
        original_prompt: String,
    },
}

impl NewRecord {
    pub fn id(&self) -> &str {
        match self {
            NewRecord::Prompt { id, .. } | NewRecord::Task { id, .. } => id,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            NewRecord::Prompt { .. } => RecordKind::Prompt,
            NewRecord::Task { .. } => RecordKind::Task,
        }
    }
}
