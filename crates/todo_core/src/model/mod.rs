//! Todo domain model.
//!
//! # Responsibility
//! - Define the two nested records kept in a user's session.
//! - Own id generation for newly created lists and todos.
//!
//! # Invariants
//! - Todo list ids are unique within one session.
//! - Todo ids are unique within their owning todo list.
//! - Titles carry no uniqueness guarantee.

pub mod todo;
