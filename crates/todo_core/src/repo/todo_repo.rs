//! Todo repository contract.
//!
//! # Responsibility
//! - Provide stable find/add/delete/toggle/rename/sort APIs for todo data.
//! - Give persistence-error-aware callers one call site for every backend.
//!
//! # Invariants
//! - `load_*` and `sorted_*` results are independent of stored state.
//! - Absence is signaled through `Option`/`bool` return values.

use crate::model::todo::{Todo, TodoId, TodoList, TodoListId};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage failure raised by persistent backends.
///
/// The session backend never produces one; the type exists so callers can
/// classify failures from backends that do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A storage-level uniqueness rule rejected a write.
    UniqueConstraint { constraint: String },
    /// Any other backend failure.
    Backend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UniqueConstraint { constraint } => {
                write!(f, "unique constraint violated: {constraint}")
            }
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for todo list and todo operations.
pub trait TodoRepository {
    /// Returns whether the list has at least one todo and all are done.
    fn is_done_todo_list(&self, todo_list: &TodoList) -> bool {
        todo_list.is_done()
    }

    /// Returns whether at least one todo in the list is undone.
    fn has_undone_todos(&self, todo_list: &TodoList) -> bool {
        todo_list.has_undone_todos()
    }

    /// Returns a copy of the todo list with `todo_list_id`.
    fn load_todo_list(&self, todo_list_id: TodoListId) -> Option<TodoList>;
    /// Returns a copy of one todo, or `None` if the list or todo is missing.
    fn load_todo(&self, todo_list_id: TodoListId, todo_id: TodoId) -> Option<Todo>;
    /// Flips `done` on the stored todo. Missing todos are ignored.
    fn toggle_todo(&mut self, todo_list_id: TodoListId, todo_id: TodoId);
    fn delete_todo_list(&mut self, todo_list_id: TodoListId) -> bool;
    fn delete_todo(&mut self, todo_list_id: TodoListId, todo_id: TodoId) -> bool;
    /// Marks every todo done. Succeeds for lists without todos.
    fn complete_all_todos(&mut self, todo_list_id: TodoListId) -> bool;
    /// Appends a new empty todo list.
    fn add_todo_list(&mut self, title: &str) -> bool;
    /// Appends a new undone todo to the list.
    fn add_todo(&mut self, todo_list_id: TodoListId, title: &str) -> bool;
    /// Copies of all lists, undone lists first, each group by title.
    fn sorted_todo_lists(&self) -> Vec<TodoList>;
    /// Copies of the list's todos, undone todos first, each group by title.
    fn sorted_todos(&self, todo_list: &TodoList) -> Vec<Todo>;
    fn set_todo_list_title(&mut self, todo_list_id: TodoListId, title: &str) -> bool;
    /// Exact, case-sensitive title match against current lists.
    fn exists_todo_list_title(&self, title: &str) -> bool;
    /// Returns whether `error` came from a storage uniqueness rule.
    fn is_unique_constraint_violation(&self, error: &RepoError) -> bool;
}
