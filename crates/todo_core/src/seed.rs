//! Seed dataset for sessions without prior todo lists.
//!
//! # Responsibility
//! - Provide the built-in default todo lists.
//! - Load alternative seed datasets from JSON.
//!
//! # Invariants
//! - Every call returns an independent copy; callers may mutate freely.
//! - Loaded seeds never contain duplicate list ids or duplicate todo ids
//!   within one list.

use crate::model::todo::{Todo, TodoId, TodoList, TodoListId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use uuid::Uuid;

/// Errors from loading a JSON seed dataset.
#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DuplicateTodoListId(TodoListId),
    DuplicateTodoId {
        todo_list_id: TodoListId,
        todo_id: TodoId,
    },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read seed file: {err}"),
            Self::Json(err) => write!(f, "invalid seed json: {err}"),
            Self::DuplicateTodoListId(id) => write!(f, "duplicate todo list id in seed: {id}"),
            Self::DuplicateTodoId {
                todo_list_id,
                todo_id,
            } => write!(
                f,
                "duplicate todo id {todo_id} in seed todo list {todo_list_id}"
            ),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SeedError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Returns a fresh copy of the built-in seed todo lists.
pub fn seed_todo_lists() -> Vec<TodoList> {
    vec![
        seed_list(
            1,
            "Work",
            &[
                (101, "Get coffee", true),
                (102, "Chat with co-workers", true),
                (103, "Duck out of meeting", false),
            ],
        ),
        seed_list(
            2,
            "chores",
            &[
                (201, "Feed the cats", false),
                (202, "Go to bed", true),
                (203, "Buy milk", true),
            ],
        ),
    ]
}

fn seed_list(id: u128, title: &str, todos: &[(u128, &str, bool)]) -> TodoList {
    let mut list = TodoList::with_id(Uuid::from_u128(id), title);
    list.todos = todos
        .iter()
        .map(|(todo_id, todo_title, done)| {
            let mut todo = Todo::with_id(Uuid::from_u128(*todo_id), *todo_title);
            todo.done = *done;
            todo
        })
        .collect();
    list
}

/// Parses a seed dataset from a JSON array of todo lists.
///
/// # Errors
/// - `SeedError::Json` for malformed input.
/// - `SeedError::DuplicateTodoListId` / `SeedError::DuplicateTodoId` when
///   the dataset breaks id uniqueness.
pub fn parse_seed_json(json: &str) -> Result<Vec<TodoList>, SeedError> {
    let todo_lists: Vec<TodoList> = serde_json::from_str(json)?;
    check_unique_ids(&todo_lists)?;
    Ok(todo_lists)
}

/// Reads and parses a JSON seed file.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<TodoList>, SeedError> {
    let json = std::fs::read_to_string(path)?;
    parse_seed_json(&json)
}

fn check_unique_ids(todo_lists: &[TodoList]) -> Result<(), SeedError> {
    let mut list_ids = HashSet::new();
    for todo_list in todo_lists {
        if !list_ids.insert(todo_list.id) {
            return Err(SeedError::DuplicateTodoListId(todo_list.id));
        }

        let mut todo_ids = HashSet::new();
        for todo in &todo_list.todos {
            if !todo_ids.insert(todo.id) {
                return Err(SeedError::DuplicateTodoId {
                    todo_list_id: todo_list.id,
                    todo_id: todo.id,
                });
            }
        }
    }
    Ok(())
}
