//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record rendered as one row of the task list.
//! - Allocate task identifiers that stay unique for a store lifetime.
//!
//! # Invariants
//! - `id` is never `0` and is never reused for another task.
//! - `label` is non-empty after trimming and immutable after creation.
//! - Decoded tasks go through the same validation as constructed ones.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one task row.
///
/// Serialized as a bare integer so UI layers can use it as a list key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw identifier received from an outer layer (FFI, CLI).
    ///
    /// No existence check happens here; unknown ids are no-ops in the store.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer form.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for task invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Label is empty or whitespace-only.
    EmptyLabel,
    /// Id `0` is reserved and never allocated.
    ZeroId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "task label must not be empty"),
            Self::ZeroId => write!(f, "task id must be non-zero"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do entry.
///
/// Fields are read-only outside the crate; completion state changes only
/// through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskWire")]
pub struct Task {
    id: TaskId,
    label: String,
    is_done: bool,
}

/// Unvalidated wire shape used by `Deserialize`.
#[derive(Deserialize)]
struct TaskWire {
    id: TaskId,
    label: String,
    #[serde(default)]
    is_done: bool,
}

impl TryFrom<TaskWire> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskWire) -> Result<Self, Self::Error> {
        let mut task = Task::new(value.id, value.label)?;
        task.is_done = value.is_done;
        Ok(task)
    }
}

impl Task {
    /// Creates a pending task with a trimmed label.
    ///
    /// # Errors
    /// - `EmptyLabel` when `label` is blank.
    /// - `ZeroId` when `id` is the reserved value.
    pub fn new(id: TaskId, label: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        if id.0 == 0 {
            return Err(TaskValidationError::ZeroId);
        }
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(TaskValidationError::EmptyLabel);
        }

        Ok(Self {
            id,
            label: label.to_string(),
            is_done: false,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Returns a copy of this task with the given completion flag.
    pub fn with_done(&self, is_done: bool) -> Self {
        Self {
            is_done,
            ..self.clone()
        }
    }
}

/// Monotonic id allocator owned by one store.
///
/// Starts at `1`; removed ids are never handed out again. Once `u64::MAX`
/// has been allocated the generator is exhausted and yields nothing.
#[derive(Debug, Clone)]
pub struct TaskIdGenerator {
    next: Option<u64>,
}

impl Default for TaskIdGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator whose first id is `highest + 1`.
    ///
    /// Seeding with `u64::MAX` yields an exhausted generator.
    pub fn starting_after(highest: TaskId) -> Self {
        Self {
            next: highest.0.checked_add(1),
        }
    }

    /// Allocates the next id, or `None` when the id space is used up.
    pub fn next_id(&mut self) -> Option<TaskId> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(TaskId(current))
    }

    /// Returns the id the next call to `next_id` will produce.
    pub fn peek(&self) -> Option<TaskId> {
        self.next.map(TaskId)
    }

    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskId, TaskIdGenerator, TaskValidationError};

    #[test]
    fn generator_starts_at_one_and_increments() {
        let mut ids = TaskIdGenerator::new();
        assert_eq!(ids.peek(), Some(TaskId::from_raw(1)));
        assert_eq!(ids.next_id(), Some(TaskId::from_raw(1)));
        assert_eq!(ids.next_id(), Some(TaskId::from_raw(2)));
        assert_eq!(ids.peek(), Some(TaskId::from_raw(3)));
    }

    #[test]
    fn starting_after_skips_to_following_id() {
        let mut ids = TaskIdGenerator::starting_after(TaskId::from_raw(1 << 40));
        assert_eq!(ids.next_id(), Some(TaskId::from_raw((1 << 40) + 1)));
    }

    #[test]
    fn generator_is_exhausted_after_max_id() {
        let mut ids = TaskIdGenerator::starting_after(TaskId::from_raw(u64::MAX - 1));
        assert_eq!(ids.next_id(), Some(TaskId::from_raw(u64::MAX)));
        assert!(ids.is_exhausted());
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.peek(), None);

        let seeded_at_max = TaskIdGenerator::starting_after(TaskId::from_raw(u64::MAX));
        assert!(seeded_at_max.is_exhausted());
    }

    #[test]
    fn new_trims_label() {
        let task = Task::new(TaskId::from_raw(7), "  Buy milk \n").unwrap();
        assert_eq!(task.label(), "Buy milk");
        assert!(!task.is_done());
    }

    #[test]
    fn new_rejects_zero_id_before_label() {
        let err = Task::new(TaskId::from_raw(0), "").unwrap_err();
        assert_eq!(err, TaskValidationError::ZeroId);
    }

    #[test]
    fn with_done_keeps_identity_and_label() {
        let task = Task::new(TaskId::from_raw(3), "water plants").unwrap();
        let done = task.with_done(true);
        assert_eq!(done.id(), task.id());
        assert_eq!(done.label(), task.label());
        assert!(done.is_done());
        assert!(!task.is_done());
    }
}
