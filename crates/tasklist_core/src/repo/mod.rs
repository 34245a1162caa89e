//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract the store service depends on.
//! - Isolate collection details from service orchestration.
//!
//! # Invariants
//! - Repository writes never reorder existing rows.
//! - Unknown ids are reported as `false`/`None`, not as errors.

pub mod task_repo;
