//! Service layer for task creation and status/revision changes.

use crate::session::{Session, UserId};
use crate::task::{
    domain::{
        AssigneeRef, BlobRef, CompletionConfirmation, NewTaskData, RevisionOutcome, Task,
        TaskDomainError, TaskId, TaskStatus,
    },
    ports::{BlobStore, BlobStoreError, TaskRepository, TaskRepositoryError},
};
use crate::taxonomy::{
    domain::{Selection, TaxonomyError},
    resolver::TaxonomyResolver,
};
use chrono::{NaiveDate, NaiveTime};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::LifecycleConfig;

/// Request payload for creating one task per assignee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTasksRequest {
    selection: Selection,
    assignees: Vec<String>,
    due_date: NaiveDate,
    due_time: Option<NaiveTime>,
    comment: String,
}

impl CreateTasksRequest {
    /// Creates a request with the required classification and due date.
    #[must_use]
    pub const fn new(selection: Selection, due_date: NaiveDate) -> Self {
        Self {
            selection,
            assignees: Vec::new(),
            due_date,
            due_time: None,
            comment: String::new(),
        }
    }

    /// Sets the teams receiving the task.
    #[must_use]
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the due time of day.
    #[must_use]
    pub const fn with_due_time(mut self, due_time: NaiveTime) -> Self {
        self.due_time = Some(due_time);
        self
    }

    /// Sets the free-text comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or lifecycle rule failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The taxonomy selection is not submittable.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Blob store operation failed.
    #[error(transparent)]
    BlobStore(#[from] BlobStoreError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// A creation request named no assignees.
    #[error("at least one assignee is required")]
    NoAssignees,
    /// The signed-in user may not perform the action.
    #[error("user {user} may not {action}")]
    Forbidden {
        /// Signed-in user.
        user: UserId,
        /// Attempted action.
        action: &'static str,
    },
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every mutation is applied to a staging copy loaded from the repository
/// and returned only after the repository accepts it, so a failed write
/// never leaks a half-applied change.
#[derive(Clone)]
pub struct TaskLifecycleService<R, B, C>
where
    R: TaskRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    blobs: Arc<B>,
    resolver: TaxonomyResolver,
    clock: Arc<C>,
    config: LifecycleConfig,
}

impl<R, B, C> TaskLifecycleService<R, B, C>
where
    R: TaskRepository,
    B: BlobStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with default configuration.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        blobs: Arc<B>,
        resolver: TaxonomyResolver,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            blobs,
            resolver,
            clock,
            config: LifecycleConfig::default(),
        }
    }

    /// Replaces the service configuration.
    #[must_use]
    pub const fn with_config(mut self, config: LifecycleConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the taxonomy resolver used to validate submissions.
    #[must_use]
    pub const fn resolver(&self) -> &TaxonomyResolver {
        &self.resolver
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    /// Creates one task per distinct assignee, all sharing the request's
    /// classification and schedule.
    ///
    /// If any row fails to store, the rows already stored are removed again
    /// before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] for non-advisers (unless the
    /// configuration allows it), taxonomy errors for an incomplete or stale
    /// selection, [`TaskLifecycleError::NoAssignees`] when no assignee is
    /// given, and repository errors when persistence fails.
    pub async fn create_tasks(
        &self,
        session: &Session,
        request: CreateTasksRequest,
    ) -> TaskLifecycleResult<Vec<Task>> {
        if self.config.require_adviser_for_create && !session.is_adviser() {
            return Err(TaskLifecycleError::Forbidden {
                user: session.user_id().clone(),
                action: "create tasks",
            });
        }
        self.resolver.validate_submission(&request.selection)?;
        let assignees = distinct_assignees(request.assignees)?;

        let mut created = Vec::with_capacity(assignees.len());
        for assignee in assignees {
            let task = Task::new(
                NewTaskData {
                    owner: session.user_id().clone(),
                    assignee,
                    selection: request.selection.clone(),
                    due_date: request.due_date,
                    due_time: request.due_time,
                    comment: request.comment.clone(),
                },
                &*self.clock,
            );
            if let Err(err) = self.repository.store(&task).await {
                self.discard(&created).await;
                return Err(err.into());
            }
            created.push(task);
        }

        info!(
            owner = %session.user_id(),
            count = created.len(),
            methodology = request.selection.methodology().unwrap_or_default(),
            "created tasks"
        );
        Ok(created)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Lists the tasks owned by `owner` in the configured order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_for_owner(&self, owner: &UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self
            .repository
            .list_by_owner(owner, self.config.listing_order)
            .await?)
    }

    /// Lists the tasks assigned to `assignee` in the configured order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_for_assignee(
        &self,
        assignee: &AssigneeRef,
    ) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self
            .repository
            .list_by_assignee(assignee, self.config.listing_order)
            .await?)
    }

    /// Changes a task's status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks, domain
    /// errors for forbidden transitions or unconfirmed completion, and
    /// repository errors when persistence fails.
    pub async fn set_status(
        &self,
        task_id: TaskId,
        target: TaskStatus,
        confirmation: CompletionConfirmation,
    ) -> TaskLifecycleResult<Task> {
        let (task, ()) = self
            .apply(task_id, |task, clock| {
                task.set_status(target, confirmation, clock)
            })
            .await?;
        info!(task_id = %task_id, status = task.status().as_str(), "task status changed");
        Ok(task)
    }

    /// Marks a task as missed after its due date elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks, a domain
    /// error for completed tasks, and repository errors when persistence
    /// fails.
    pub async fn mark_missed(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let (task, ()) = self
            .apply(task_id, |task, clock| task.mark_missed(clock))
            .await?;
        info!(task_id = %task_id, "task marked missed");
        Ok(task)
    }

    /// Advances the revision of a missed task.
    ///
    /// Reaching the revision cap is reported through
    /// [`RevisionOutcome::Exhausted`], not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks, a domain
    /// error when the task is not missed, and repository errors when
    /// persistence fails.
    pub async fn advance_revision(
        &self,
        task_id: TaskId,
    ) -> TaskLifecycleResult<(Task, RevisionOutcome)> {
        let (task, outcome) = self
            .apply(task_id, |task, clock| task.advance_revision(clock))
            .await?;
        match outcome {
            RevisionOutcome::Reopened(revision) => info!(
                task_id = %task_id,
                revision = revision.value(),
                "task reopened for revision"
            ),
            RevisionOutcome::Exhausted(revision) => warn!(
                task_id = %task_id,
                revision = revision.value(),
                "task revision limit reached"
            ),
        }
        Ok((task, outcome))
    }

    /// Sets the revision counter of a task that is not missed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks, domain
    /// errors for missed tasks or out-of-range values, and repository errors
    /// when persistence fails.
    pub async fn set_revision(&self, task_id: TaskId, value: u8) -> TaskLifecycleResult<Task> {
        let (task, ()) = self
            .apply(task_id, |task, clock| task.set_revision(value, clock))
            .await?;
        debug!(task_id = %task_id, revision = value, "task revision edited");
        Ok(task)
    }

    /// Replaces the free-text comment of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks and
    /// repository errors when persistence fails.
    pub async fn edit_comment(
        &self,
        task_id: TaskId,
        comment: impl Into<String>,
    ) -> TaskLifecycleResult<Task> {
        let text = comment.into();
        let (task, ()) = self
            .apply(task_id, |task, clock| {
                task.edit_comment(text, clock);
                Ok(())
            })
            .await?;
        Ok(task)
    }

    /// Uploads an attachment and links it to a task.
    ///
    /// Every upload gets its own blob path, so re-uploading a file name
    /// never touches the stored copy. A previous attachment is deleted once
    /// the new link is persisted. If the link cannot be persisted, the fresh
    /// upload is deleted again and the previous attachment is kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks, blob store
    /// errors for rejected uploads, and repository errors when persistence
    /// fails.
    pub async fn attach_file(
        &self,
        task_id: TaskId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> TaskLifecycleResult<Task> {
        let mut staged = self.load(task_id).await?;
        let path = upload_path(task_id, file_name);
        let reference = self.blobs.store(bytes, &path).await?;
        let previous = staged.replace_attachment(Some(reference.clone()), &*self.clock);

        if let Err(err) = self.repository.update(&staged).await {
            if previous.as_ref() != Some(&reference) {
                self.release_blob(&reference).await;
            }
            return Err(err.into());
        }
        if let Some(old) = previous.filter(|old| *old != reference) {
            self.release_blob(&old).await;
        }
        info!(task_id = %task_id, attachment = %reference, "attachment stored");
        Ok(staged)
    }

    /// Unlinks and deletes a task's attachment, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks and
    /// repository errors when persistence fails.
    pub async fn remove_attachment(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let (task, previous) = self
            .apply(task_id, |task, clock| Ok(task.replace_attachment(None, clock)))
            .await?;
        if let Some(old) = previous {
            self.release_blob(&old).await;
        }
        Ok(task)
    }

    /// Deletes a task and its attachment from the external store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] for unknown tasks and
    /// repository errors when deletion fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.load(task_id).await?;
        self.repository.delete(task_id).await?;
        if let Some(attachment) = task.attachment() {
            self.release_blob(attachment).await;
        }
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    async fn load(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))
    }

    /// Applies `change` to a staging copy and persists it.
    async fn apply<T>(
        &self,
        task_id: TaskId,
        change: impl FnOnce(&mut Task, &C) -> Result<T, TaskDomainError>,
    ) -> TaskLifecycleResult<(Task, T)> {
        let mut staged = self.load(task_id).await?;
        let outcome = change(&mut staged, &*self.clock)?;
        self.repository.update(&staged).await?;
        Ok((staged, outcome))
    }

    async fn discard(&self, stored: &[Task]) {
        for task in stored {
            if let Err(err) = self.repository.delete(task.id()).await {
                warn!(task_id = %task.id(), error = %err, "failed to discard partially created task");
            }
        }
    }

    async fn release_blob(&self, reference: &BlobRef) {
        if let Err(err) = self.blobs.delete(reference).await {
            warn!(attachment = %reference, error = %err, "failed to delete attachment blob");
        }
    }
}

/// Returns a blob path unique to one upload of `file_name`.
fn upload_path(task_id: TaskId, file_name: &str) -> String {
    format!("tasks/{task_id}/{}-{file_name}", Uuid::new_v4())
}

/// Validates assignees and drops repeats, keeping first-seen order.
fn distinct_assignees(raw: Vec<String>) -> Result<Vec<AssigneeRef>, TaskLifecycleError> {
    let mut assignees: Vec<AssigneeRef> = Vec::with_capacity(raw.len());
    for value in raw {
        let assignee = AssigneeRef::new(value)?;
        if !assignees.contains(&assignee) {
            assignees.push(assignee);
        }
    }
    if assignees.is_empty() {
        return Err(TaskLifecycleError::NoAssignees);
    }
    Ok(assignees)
}
