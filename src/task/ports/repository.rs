//! Repository port for task persistence and lookup.

use crate::session::UserId;
use crate::task::domain::{AssigneeRef, Task, TaskId};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordering of task listings by creation timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskOrdering {
    /// Oldest first.
    CreatedAscending,
    /// Newest first.
    #[default]
    CreatedDescending,
}

impl TaskOrdering {
    /// Compares two tasks by creation time, breaking ties by identifier so
    /// every listing of the same rows comes out in the same order.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        let by_time = left
            .created_at()
            .cmp(&right.created_at())
            .then_with(|| left.id().into_inner().cmp(&right.id().into_inner()));
        match self {
            Self::CreatedAscending => by_time,
            Self::CreatedDescending => by_time.reverse(),
        }
    }
}

/// Task persistence contract.
///
/// Concurrent edits from different clients are not coordinated: the last
/// `update` wins.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks owned by `owner` in the given order.
    async fn list_by_owner(
        &self,
        owner: &UserId,
        ordering: TaskOrdering,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns all tasks assigned to `assignee` in the given order.
    async fn list_by_assignee(
        &self,
        assignee: &AssigneeRef,
        ordering: TaskOrdering,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
