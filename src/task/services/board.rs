//! Session-local task board.
//!
//! The board is the visible state for one signed-in adviser. Rows change
//! only after the repository acknowledges a write; a failed write leaves
//! the previously visible row in place.

use super::{CreateTasksRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
use crate::session::Session;
use crate::task::{
    domain::{CompletionConfirmation, RevisionOutcome, Task, TaskId, TaskStatus},
    ports::{BlobStore, TaskRepository},
};
use mockable::Clock;
use tracing::debug;

/// Visible task rows for one session.
pub struct TaskBoard<R, B, C>
where
    R: TaskRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, B, C>,
    session: Session,
    rows: Vec<Task>,
}

impl<R, B, C> TaskBoard<R, B, C>
where
    R: TaskRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    /// Creates an empty board; call [`TaskBoard::refresh`] to load rows.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, B, C>, session: Session) -> Self {
        Self {
            service,
            session,
            rows: Vec::new(),
        }
    }

    /// Returns the session the board belongs to.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the visible rows in listing order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.rows
    }

    /// Returns the visible row for `task_id`, if present.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.rows.iter().find(|task| task.id() == task_id)
    }

    /// Returns the visible rows in one board column.
    pub fn column(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.rows.iter().filter(move |task| task.status() == status)
    }

    /// Reloads every row owned by the session user.
    ///
    /// # Errors
    ///
    /// Returns repository errors; the visible rows are kept on failure.
    pub async fn refresh(&mut self) -> TaskLifecycleResult<()> {
        let rows = self.service.list_for_owner(self.session.user_id()).await?;
        debug!(owner = %self.session.user_id(), rows = rows.len(), "task board refreshed");
        self.rows = rows;
        Ok(())
    }

    /// Creates tasks and shows them on the board.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::create_tasks`].
    pub async fn create(&mut self, request: CreateTasksRequest) -> TaskLifecycleResult<Vec<Task>> {
        let created = self.service.create_tasks(&self.session, request).await?;
        self.rows.extend(created.iter().cloned());
        self.sort_rows();
        Ok(created)
    }

    /// Changes a row's status.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::set_status`].
    pub async fn set_status(
        &mut self,
        task_id: TaskId,
        target: TaskStatus,
        confirmation: CompletionConfirmation,
    ) -> TaskLifecycleResult<Task> {
        let result = self.service.set_status(task_id, target, confirmation).await;
        self.settle(result)
    }

    /// Marks a row as missed.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::mark_missed`].
    pub async fn mark_missed(&mut self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let result = self.service.mark_missed(task_id).await;
        self.settle(result)
    }

    /// Advances a missed row's revision.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::advance_revision`].
    pub async fn advance_revision(&mut self, task_id: TaskId) -> TaskLifecycleResult<RevisionOutcome> {
        let result = self.service.advance_revision(task_id).await;
        let (task, outcome) = match result {
            Ok(pair) => pair,
            Err(err) => return Err(self.forget_if_missing(err)),
        };
        self.commit(task);
        Ok(outcome)
    }

    /// Edits a row's revision counter.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::set_revision`].
    pub async fn set_revision(&mut self, task_id: TaskId, value: u8) -> TaskLifecycleResult<Task> {
        let result = self.service.set_revision(task_id, value).await;
        self.settle(result)
    }

    /// Deletes a row from the external store and the board.
    ///
    /// # Errors
    ///
    /// See [`TaskLifecycleService::delete_task`].
    pub async fn delete(&mut self, task_id: TaskId) -> TaskLifecycleResult<()> {
        match self.service.delete_task(task_id).await {
            Ok(()) => {
                self.rows.retain(|task| task.id() != task_id);
                Ok(())
            }
            Err(err) => Err(self.forget_if_missing(err)),
        }
    }

    fn settle(&mut self, result: TaskLifecycleResult<Task>) -> TaskLifecycleResult<Task> {
        match result {
            Ok(task) => {
                self.commit(task.clone());
                Ok(task)
            }
            Err(err) => Err(self.forget_if_missing(err)),
        }
    }

    /// Replaces the visible row with the acknowledged version.
    fn commit(&mut self, task: Task) {
        match self.rows.iter_mut().find(|row| row.id() == task.id()) {
            Some(row) => *row = task,
            None => {
                self.rows.push(task);
                self.sort_rows();
            }
        }
    }

    /// Drops a row that no longer exists in the store.
    fn forget_if_missing(&mut self, err: TaskLifecycleError) -> TaskLifecycleError {
        if let TaskLifecycleError::NotFound(task_id) = &err {
            let missing = *task_id;
            self.rows.retain(|task| task.id() != missing);
        }
        err
    }

    fn sort_rows(&mut self) {
        let ordering = self.service.config().listing_order;
        self.rows.sort_by(|left, right| ordering.compare(left, right));
    }
}
