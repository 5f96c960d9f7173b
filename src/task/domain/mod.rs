//! Domain model for capstone task tracking.
//!
//! A task is one assignment for one team, classified by the six-level
//! taxonomy. Its status and revision counter form a small state machine
//! whose rules live on the [`Task`] aggregate.

mod attachment;
mod error;
mod ids;
mod revision;
mod status;
mod task;

pub use attachment::BlobRef;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{AssigneeRef, TaskId};
pub use revision::{Revision, RevisionOutcome, revision_label};
pub use status::TaskStatus;
pub use task::{CompletionConfirmation, NewTaskData, PersistedTaskData, Task};
