//! Error types for task domain validation and lifecycle rules.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The assignee reference is empty after trimming.
    #[error("assignee must not be empty")]
    EmptyAssignee,

    /// The status change is not permitted from the current status.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidTransition {
        /// Task identifier.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// The operation's preconditions do not hold in the current status.
    #[error("cannot {operation} task {task_id} while it is {status}")]
    InvalidState {
        /// Task identifier.
        task_id: TaskId,
        /// Current status.
        status: TaskStatus,
        /// Operation that was attempted.
        operation: &'static str,
    },

    /// A revision value outside `0..=10` was supplied.
    #[error("revision {0} is out of range, expected 0 to 10")]
    OutOfRange(u8),

    /// Completing a task requires explicit caller confirmation.
    #[error("completing task {0} requires confirmation")]
    ConfirmationRequired(TaskId),
}

/// Error returned while parsing task statuses from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
