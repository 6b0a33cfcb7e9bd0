//! Display ordering for todo lists and todos.
//!
//! Both orderings use two groups: undone items first, then done items.
//! Inside a group items are ordered by title, case-insensitively.

use crate::model::todo::{Todo, TodoList};
use std::cmp::Ordering;

/// Compares two titles ignoring case.
///
/// Titles equal after lowercasing fall back to raw comparison so the order
/// is total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Orders already-partitioned todo lists: undone group first, then done.
pub fn sort_todo_lists(mut undone: Vec<TodoList>, mut done: Vec<TodoList>) -> Vec<TodoList> {
    undone.sort_by(|a, b| compare_titles(&a.title, &b.title));
    done.sort_by(|a, b| compare_titles(&a.title, &b.title));
    undone.append(&mut done);
    undone
}

/// Orders already-partitioned todos: undone group first, then done.
pub fn sort_todos(mut undone: Vec<Todo>, mut done: Vec<Todo>) -> Vec<Todo> {
    undone.sort_by(|a, b| compare_titles(&a.title, &b.title));
    done.sort_by(|a, b| compare_titles(&a.title, &b.title));
    undone.append(&mut done);
    undone
}
