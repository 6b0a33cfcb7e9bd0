//! Per-user session record supplied by the web framework.
//!
//! The session is the only persistence boundary: the store binds to the
//! `todo_lists` vector inside it and mutates it in place.

use crate::model::todo::TodoList;
use serde::{Deserialize, Serialize};

/// Externally owned session state for one logical user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// `None` until the first store is constructed for this session.
    #[serde(default)]
    pub todo_lists: Option<Vec<TodoList>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that already carries todo lists.
    pub fn with_todo_lists(todo_lists: Vec<TodoList>) -> Self {
        Self {
            todo_lists: Some(todo_lists),
        }
    }

    /// Returns whether the session has been initialized with todo lists.
    pub fn is_seeded(&self) -> bool {
        self.todo_lists.is_some()
    }
}
