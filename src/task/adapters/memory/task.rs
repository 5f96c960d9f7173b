//! In-memory repository for task lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::session::UserId;
use crate::task::{
    domain::{AssigneeRef, Task, TaskId},
    ports::{TaskOrdering, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn list_matching(
        &self,
        ordering: TaskOrdering,
        predicate: impl Fn(&Task) -> bool,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.values().filter(|task| predicate(task)).cloned().collect();
        tasks.sort_by(|left, right| ordering.compare(left, right));
        Ok(tasks)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.get(&id).cloned())
    }

    async fn list_by_owner(
        &self,
        owner: &UserId,
        ordering: TaskOrdering,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.list_matching(ordering, |task| task.owner() == owner)
    }

    async fn list_by_assignee(
        &self,
        assignee: &AssigneeRef,
        ordering: TaskOrdering,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.list_matching(ordering, |task| task.assignee() == assignee)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .remove(&id)
            .map(drop)
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
