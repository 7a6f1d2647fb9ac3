pub mod record;

pub use record::{NewRecord, RecordKind, Status};
