//! Domain model for the task list.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` unique within its store.
//! - Deletion is permanent; there are no tombstones.

pub mod task;
