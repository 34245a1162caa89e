//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task-list view state machine to Dart via FRB.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide store backs the single hosted task-list view.
//! - No-op outcomes (blank label, unknown id) are successes with
//!   `changed = false`, never failures.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Task, TaskAction, TaskId, TaskListStore,
};

static TASK_LIST: OnceLock<Mutex<TaskListStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: u64,
    pub label: String,
    pub is_done: bool,
}

/// Snapshot envelope for rendering the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Rows in insertion order.
    pub items: Vec<TaskItem>,
    pub done_count: u32,
    pub pending_count: u32,
}

/// Result envelope for one mutating UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Always `true`; mutations have no failure path.
    pub ok: bool,
    /// Whether the list changed and needs a redraw.
    pub changed: bool,
    /// Created task ID for add, target task ID otherwise.
    pub task_id: Option<u64>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

impl TaskActionResponse {
    fn changed(message: impl Into<String>, task_id: TaskId) -> Self {
        Self {
            ok: true,
            changed: true,
            task_id: Some(task_id.as_u64()),
            message: message.into(),
        }
    }

    fn unchanged(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: true,
            changed: false,
            task_id: task_id.map(TaskId::as_u64),
            message: message.into(),
        }
    }
}

/// Adds a task from the entry form.
///
/// # FFI contract
/// - Blank `label` returns `changed = false` and no task ID.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_add(label: String) -> TaskActionResponse {
    apply(TaskAction::Add { label }, "Task added.", "Empty task ignored.")
}

/// Sets completion state from a checkbox toggle.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_set_done(task_id: u64, done: bool) -> TaskActionResponse {
    let id = TaskId::from_raw(task_id);
    apply(TaskAction::SetDone { id, done }, "Task updated.", "No change.")
}

/// Removes a task from a delete click.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_remove(task_id: u64) -> TaskActionResponse {
    apply(
        TaskAction::Remove {
            id: TaskId::from_raw(task_id),
        },
        "Task removed.",
        "Task not found.",
    )
}

/// Returns the current ordered list for rendering.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_items() -> TaskListResponse {
    with_store(|store| TaskListResponse {
        items: store.list().iter().map(to_task_item).collect(),
        done_count: saturating_u32(store.done_count()),
        pending_count: saturating_u32(store.pending_count()),
    })
}

/// Runs one UI event through the store reducer and wraps the outcome.
fn apply(action: TaskAction, changed_message: &str, unchanged_message: &str) -> TaskActionResponse {
    let target = match &action {
        TaskAction::Add { .. } => None,
        TaskAction::SetDone { id, .. } | TaskAction::Remove { id } => Some(*id),
    };
    match with_store(|store| store.dispatch(action)) {
        Some(task_id) => TaskActionResponse::changed(changed_message, task_id),
        None => TaskActionResponse::unchanged(unchanged_message, target),
    }
}

fn with_store<T>(f: impl FnOnce(&mut TaskListStore) -> T) -> T {
    let mut store = lock_store();
    f(&mut store)
}

fn lock_store() -> MutexGuard<'static, TaskListStore> {
    let store = TASK_LIST.get_or_init(|| Mutex::new(TaskListStore::new()));
    store.lock().unwrap_or_else(|poisoned| {
        // Why: store mutations never leave partial state, so a panic elsewhere
        // while holding the lock must not take the whole view down.
        warn!("event=store_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        task_id: task.id().as_u64(),
        label: task.label().to_string(),
        is_done: task.is_done(),
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, saturating_u32, task_list_add, task_list_items,
        task_list_remove, task_list_set_done,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn task_list_add_blank_label_is_unchanged_success() {
        let response = task_list_add("   ".to_string());
        assert!(response.ok);
        assert!(!response.changed);
        assert_eq!(response.task_id, None);
    }

    #[test]
    fn task_list_lifecycle_is_visible_in_items() {
        let label = unique_token("ffi-lifecycle");
        let before = task_list_items();
        let created = task_list_add(label.clone());
        assert!(created.ok && created.changed, "{}", created.message);
        let task_id = created.task_id.expect("add should return task_id");

        let item = task_list_items()
            .items
            .into_iter()
            .find(|item| item.task_id == task_id)
            .expect("created task should be listed");
        assert_eq!(item.label, label);
        assert!(!item.is_done);

        // The store is process-wide; compare against the counts seen before.
        let added = task_list_items();
        assert_eq!(added.pending_count, before.pending_count + 1);
        assert_eq!(added.done_count, before.done_count);

        assert!(task_list_set_done(task_id, true).changed);
        assert!(!task_list_set_done(task_id, true).changed);
        let marked = task_list_items();
        let item = marked
            .items
            .iter()
            .find(|item| item.task_id == task_id)
            .expect("task should still be listed");
        assert!(item.is_done);
        assert_eq!(marked.done_count, before.done_count + 1);
        assert_eq!(marked.pending_count, before.pending_count);

        assert!(task_list_set_done(task_id, false).changed);
        let unmarked = task_list_items();
        assert_eq!(unmarked.done_count, before.done_count);
        assert_eq!(unmarked.pending_count, before.pending_count + 1);

        assert!(task_list_remove(task_id).changed);
        let removed_again = task_list_remove(task_id);
        assert!(removed_again.ok);
        assert!(!removed_again.changed);
        assert!(task_list_items()
            .items
            .iter()
            .all(|item| item.task_id != task_id));
    }

    #[test]
    fn task_list_set_done_unknown_id_is_unchanged_success() {
        let response = task_list_set_done(u64::MAX, true);
        assert!(response.ok);
        assert!(!response.changed);
        assert_eq!(response.task_id, Some(u64::MAX));
    }

    #[test]
    fn counts_clamp_to_u32_range() {
        assert_eq!(saturating_u32(7), 7);
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
