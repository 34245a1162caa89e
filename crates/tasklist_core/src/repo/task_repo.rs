//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered task collection for one store.
//! - Keep lookup/mutation details out of the store service.
//!
//! # Invariants
//! - Insertion order is the canonical order; nothing re-sorts rows.
//! - Ids are unique across stored rows; `insert` rejects duplicates.
//! - Mutations touch only the matching row.

use crate::model::task::{Task, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    DuplicateId(TaskId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "task id already stored: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Storage interface used by `TaskListStore`.
///
/// Unknown ids are reported through return values, never as errors.
pub trait TaskRepository {
    /// Appends a task at the end of the ordered collection.
    fn insert(&mut self, task: Task) -> RepoResult<()>;
    /// Replaces the matching row with a copy carrying `is_done`.
    ///
    /// Returns `false` when no row matches.
    fn set_done(&mut self, id: TaskId, is_done: bool) -> bool;
    /// Removes the matching row and returns it.
    fn remove(&mut self, id: TaskId) -> Option<Task>;
    fn get(&self, id: TaskId) -> Option<&Task>;
    fn list(&self) -> &[Task];
}

/// Vector-backed repository with linear id lookup.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&mut self, task: Task) -> RepoResult<()> {
        if self.position(task.id()).is_some() {
            return Err(RepoError::DuplicateId(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn set_done(&mut self, id: TaskId, is_done: bool) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.tasks[index] = self.tasks[index].with_done(is_done);
        true
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        // `Vec::remove` shifts the tail, keeping relative order.
        Some(self.tasks.remove(index))
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    fn list(&self) -> &[Task] {
        &self.tasks
    }
}
