//! Storage abstractions and the session-backed store.
//!
//! # Responsibility
//! - Define the todo data-access contract shared by all storage backends.
//! - Provide the session-backed implementation used by the web app.
//!
//! # Invariants
//! - Missing entities are reported as `None`/`false`, never as errors.
//! - Read paths return deep copies; write paths mutate stored records.

pub mod session_repo;
pub mod todo_repo;
