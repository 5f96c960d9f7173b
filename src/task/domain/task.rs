//! Task aggregate root and its status/revision lifecycle.

use super::{AssigneeRef, BlobRef, Revision, RevisionOutcome, TaskDomainError, TaskId, TaskStatus};
use crate::session::UserId;
use crate::taxonomy::domain::Selection;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Whether the caller has confirmed a completion prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionConfirmation {
    /// The user confirmed marking the task complete.
    Confirmed,
    /// No confirmation was given.
    Unconfirmed,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    assignee: AssigneeRef,
    selection: Selection,
    due_date: NaiveDate,
    due_time: Option<NaiveTime>,
    comment: String,
    status: TaskStatus,
    revision: Revision,
    attachment: Option<BlobRef>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Adviser who owns the task.
    pub owner: UserId,
    /// Team the task is assigned to.
    pub assignee: AssigneeRef,
    /// Validated taxonomy classification.
    pub selection: Selection,
    /// Due date.
    pub due_date: NaiveDate,
    /// Optional due time of day.
    pub due_time: Option<NaiveTime>,
    /// Free-text instructions.
    pub comment: String,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner: UserId,
    /// Persisted assignee.
    pub assignee: AssigneeRef,
    /// Persisted taxonomy classification.
    pub selection: Selection,
    /// Persisted due date.
    pub due_date: NaiveDate,
    /// Persisted due time.
    pub due_time: Option<NaiveTime>,
    /// Persisted comment.
    pub comment: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted revision counter.
    pub revision: Revision,
    /// Persisted attachment reference, if any.
    pub attachment: Option<BlobRef>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new To Do task with no revisions.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner: data.owner,
            assignee: data.assignee,
            selection: data.selection,
            due_date: data.due_date,
            due_time: data.due_time,
            comment: data.comment,
            status: TaskStatus::ToDo,
            revision: Revision::NONE,
            attachment: None,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            assignee: data.assignee,
            selection: data.selection,
            due_date: data.due_date,
            due_time: data.due_time,
            comment: data.comment,
            status: data.status,
            revision: data.revision,
            attachment: data.attachment,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning adviser.
    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns the assigned team.
    #[must_use]
    pub const fn assignee(&self) -> &AssigneeRef {
        &self.assignee
    }

    /// Returns the taxonomy classification.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the due time, if one was set.
    #[must_use]
    pub const fn due_time(&self) -> Option<NaiveTime> {
        self.due_time
    }

    /// Returns the free-text comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the revision counter.
    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    /// Returns the attachment reference, if any.
    #[must_use]
    pub const fn attachment(&self) -> Option<&BlobRef> {
        self.attachment.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the task was completed, if it has been.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Changes the status through a direct edit.
    ///
    /// Moving to [`TaskStatus::Completed`] needs
    /// [`CompletionConfirmation::Confirmed`] and stamps the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] when the task is
    /// Completed or Missed, or when `target` is Missed, and
    /// [`TaskDomainError::ConfirmationRequired`] for an unconfirmed
    /// completion. The task is unchanged on error.
    pub fn set_status(
        &mut self,
        target: TaskStatus,
        confirmation: CompletionConfirmation,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            });
        }
        if target == TaskStatus::Completed && confirmation != CompletionConfirmation::Confirmed {
            return Err(TaskDomainError::ConfirmationRequired(self.id));
        }

        self.status = target;
        self.touch(clock);
        if target == TaskStatus::Completed {
            self.completed_at = Some(self.updated_at);
        }
        Ok(())
    }

    /// Marks the task as missed after its due date elapsed.
    ///
    /// A task that is already missed is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] for a completed task.
    pub fn mark_missed(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        match self.status {
            TaskStatus::Missed => Ok(()),
            TaskStatus::Completed => Err(TaskDomainError::InvalidTransition {
                task_id: self.id,
                from: self.status,
                to: TaskStatus::Missed,
            }),
            TaskStatus::ToDo | TaskStatus::InProgress | TaskStatus::ToReview => {
                self.status = TaskStatus::Missed;
                self.touch(clock);
                Ok(())
            }
        }
    }

    /// Gives a missed task another attempt.
    ///
    /// The counter advances by one. Below the cap the task returns to To
    /// Do; at the cap it stays Missed and [`RevisionOutcome::Exhausted`] is
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidState`] unless the task is Missed.
    pub fn advance_revision(
        &mut self,
        clock: &impl Clock,
    ) -> Result<RevisionOutcome, TaskDomainError> {
        if self.status != TaskStatus::Missed {
            return Err(TaskDomainError::InvalidState {
                task_id: self.id,
                status: self.status,
                operation: "advance the revision of",
            });
        }

        let next = self.revision.next_capped();
        self.revision = next;
        self.touch(clock);
        if next.is_exhausted() {
            return Ok(RevisionOutcome::Exhausted(next));
        }
        self.status = TaskStatus::ToDo;
        Ok(RevisionOutcome::Reopened(next))
    }

    /// Sets the revision counter directly.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidState`] for a missed task and
    /// [`TaskDomainError::OutOfRange`] when `value` exceeds the cap.
    pub fn set_revision(&mut self, value: u8, clock: &impl Clock) -> Result<(), TaskDomainError> {
        if self.status == TaskStatus::Missed {
            return Err(TaskDomainError::InvalidState {
                task_id: self.id,
                status: self.status,
                operation: "edit the revision of",
            });
        }
        self.revision = Revision::new(value)?;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the free-text comment.
    pub fn edit_comment(&mut self, comment: impl Into<String>, clock: &impl Clock) {
        self.comment = comment.into();
        self.touch(clock);
    }

    /// Sets or clears the attachment, returning the previous reference.
    pub fn replace_attachment(
        &mut self,
        attachment: Option<BlobRef>,
        clock: &impl Clock,
    ) -> Option<BlobRef> {
        let previous = std::mem::replace(&mut self.attachment, attachment);
        self.touch(clock);
        previous
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
