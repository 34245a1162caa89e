//! Task list store service.
//!
//! # Responsibility
//! - Own the authoritative task collection for one view.
//! - Provide the add / set-done / remove / list use-cases.
//! - Offer a single reducer entry point for UI events.
//!
//! # Invariants
//! - Blank labels are silently ignored; nothing is inserted.
//! - Unknown ids are no-ops for every mutation.
//! - Ids are allocated by the store and never reused, even after removal.
//! - Log events carry ids and counts only, never label text.

use crate::model::task::{Task, TaskId, TaskIdGenerator};
use crate::repo::task_repo::{InMemoryTaskRepository, TaskRepository};
use log::{debug, error, warn};

/// UI event applied through `TaskListStore::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Entry form submitted.
    Add { label: String },
    /// Checkbox toggled.
    SetDone { id: TaskId, done: bool },
    /// Delete button clicked.
    Remove { id: TaskId },
}

/// In-memory owner and sole mutator of the task collection.
pub struct TaskListStore<R: TaskRepository = InMemoryTaskRepository> {
    repo: R,
    ids: TaskIdGenerator,
}

impl Default for TaskListStore<InMemoryTaskRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListStore<InMemoryTaskRepository> {
    /// Creates an empty store backed by the in-memory repository.
    pub fn new() -> Self {
        Self::with_repository(InMemoryTaskRepository::new())
    }
}

impl<R: TaskRepository> TaskListStore<R> {
    /// Creates a store over the provided repository.
    ///
    /// Id allocation starts above the highest id already present, so a
    /// pre-seeded repository never collides with new tasks. A repository
    /// already holding `u64::MAX` leaves the store unable to add.
    pub fn with_repository(repo: R) -> Self {
        let ids = match repo.list().iter().map(|task| task.id()).max() {
            Some(highest) => TaskIdGenerator::starting_after(highest),
            None => TaskIdGenerator::new(),
        };
        Self { repo, ids }
    }

    /// Appends a new pending task.
    ///
    /// # Contract
    /// - Blank `label` changes nothing and returns `None`.
    /// - Exhausted id space changes nothing and returns `None`.
    /// - Otherwise returns the freshly allocated id.
    pub fn add(&mut self, label: &str) -> Option<TaskId> {
        if label.trim().is_empty() {
            debug!("event=task_add module=store status=skipped reason=empty_label");
            return None;
        }

        let Some(id) = self.ids.next_id() else {
            warn!("event=task_add module=store status=skipped reason=ids_exhausted");
            return None;
        };
        let task = match Task::new(id, label) {
            Ok(task) => task,
            Err(err) => {
                debug!("event=task_add module=store status=skipped reason={err}");
                return None;
            }
        };
        if let Err(err) = self.repo.insert(task) {
            // Why: unreachable while the generator owns allocation, but a custom
            // repository may still refuse; leave state untouched rather than panic.
            error!("event=task_add module=store status=error task_id={id} error={err}");
            return None;
        }

        debug!(
            "event=task_add module=store status=ok task_id={id} count={}",
            self.repo.list().len()
        );
        Some(id)
    }

    /// Sets the completion flag of one task.
    ///
    /// Returns `false` when `id` is unknown; the list is left unchanged.
    pub fn set_done(&mut self, id: TaskId, status: bool) -> bool {
        let found = self.repo.set_done(id, status);
        if found {
            debug!("event=task_set_done module=store status=ok task_id={id} done={status}");
        } else {
            debug!("event=task_set_done module=store status=skipped reason=unknown_id task_id={id}");
        }
        found
    }

    /// Removes one task permanently, keeping the order of the rest.
    ///
    /// Returns the removed task, or `None` when `id` is unknown.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.repo.remove(id);
        match removed {
            Some(_) => debug!(
                "event=task_remove module=store status=ok task_id={id} count={}",
                self.repo.list().len()
            ),
            None => {
                debug!("event=task_remove module=store status=skipped reason=unknown_id task_id={id}")
            }
        }
        removed
    }

    /// Applies one UI event.
    ///
    /// Returns the id of the affected task when the list changed, `None`
    /// when the event was a no-op. Setting a flag to its current value is
    /// a no-op.
    pub fn dispatch(&mut self, action: TaskAction) -> Option<TaskId> {
        match action {
            TaskAction::Add { label } => self.add(&label),
            TaskAction::SetDone { id, done } => {
                let before = self.get(id).map(Task::is_done);
                (self.set_done(id, done) && before != Some(done)).then_some(id)
            }
            TaskAction::Remove { id } => self.remove(id).map(|task| task.id()),
        }
    }

    /// Current ordered snapshot.
    pub fn list(&self) -> &[Task] {
        self.repo.list()
    }

    /// Owned copy of the current snapshot for callers that outlive the borrow.
    pub fn snapshot(&self) -> Vec<Task> {
        self.repo.list().to_vec()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.repo.get(id)
    }

    pub fn len(&self) -> usize {
        self.repo.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.list().is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.repo.list().iter().filter(|task| task.is_done()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.done_count()
    }
}
