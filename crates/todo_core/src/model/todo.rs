//! Todo list and todo records.
//!
//! # Responsibility
//! - Define the canonical `TodoList`/`Todo` shapes stored in a session.
//! - Provide completion helpers shared by the store and service layers.
//!
//! # Invariants
//! - `Clone` is a full deep copy; no state is shared between clones.
//! - A todo list with zero todos is never considered done.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a todo list, unique within one session.
pub type TodoListId = Uuid;

/// Identifier of a todo, unique within its owning todo list.
pub type TodoId = Uuid;

/// Generates a fresh identifier for a new todo list or todo.
pub fn next_id() -> Uuid {
    Uuid::new_v4()
}

/// A titled task with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    /// Creates an undone todo with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(next_id(), title)
    }

    /// Creates an undone todo with a caller-provided id.
    ///
    /// Used by seed data where identity is fixed ahead of time.
    pub fn with_id(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// Named, ordered collection of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: TodoListId,
    pub title: String,
    /// Insertion order; display order is computed by `crate::sort`.
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty todo list with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(next_id(), title)
    }

    /// Creates an empty todo list with a caller-provided id.
    pub fn with_id(id: TodoListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Returns whether the list has at least one todo and all todos are done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.done)
    }

    /// Returns whether at least one todo is still undone.
    pub fn has_undone_todos(&self) -> bool {
        self.todos.iter().any(|todo| !todo.done)
    }

    /// Number of todos not yet done.
    pub fn remaining_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.done).count()
    }

    pub fn find_todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    pub fn find_todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoList};

    fn list_with(flags: &[bool]) -> TodoList {
        let mut list = TodoList::new("list");
        for (index, done) in flags.iter().enumerate() {
            let mut todo = Todo::new(format!("todo {index}"));
            todo.done = *done;
            list.todos.push(todo);
        }
        list
    }

    #[test]
    fn empty_list_is_neither_done_nor_undone() {
        let list = list_with(&[]);
        assert!(!list.is_done());
        assert!(!list.has_undone_todos());
    }

    #[test]
    fn completion_helpers_follow_todo_flags() {
        assert!(list_with(&[true, true]).is_done());
        assert!(!list_with(&[true, false]).is_done());
        assert!(list_with(&[true, false]).has_undone_todos());
        assert_eq!(list_with(&[true, false, false]).remaining_count(), 2);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut todo = Todo::new("flip");
        todo.toggle();
        assert!(todo.done);
        todo.toggle();
        assert!(!todo.done);
    }
}
