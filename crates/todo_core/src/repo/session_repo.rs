//! Session-backed todo repository.
//!
//! # Responsibility
//! - Bind to the todo lists held by a `Session` and operate on them in place.
//! - Seed sessions that carry no todo lists yet.
//!
//! # Invariants
//! - The repository borrows the session's vector; it never owns a copy.
//! - Mutations are visible through the session immediately.
//! - This backend has no storage constraints and never logs.

use crate::model::todo::{next_id, Todo, TodoId, TodoList, TodoListId};
use crate::repo::todo_repo::{RepoError, TodoRepository};
use crate::seed::seed_todo_lists;
use crate::session::Session;
use crate::sort::{sort_todo_lists, sort_todos};

/// Todo repository over the todo lists stored in one user's session.
pub struct SessionTodoRepository<'s> {
    todo_lists: &'s mut Vec<TodoList>,
}

impl<'s> SessionTodoRepository<'s> {
    /// Binds to the session's todo lists, seeding them from the built-in
    /// dataset when the session has none.
    pub fn new(session: &'s mut Session) -> Self {
        Self::with_seed(session, seed_todo_lists)
    }

    /// Binds to the session's todo lists, seeding them from `seed` when the
    /// session has none. `seed` is not called for initialized sessions.
    pub fn with_seed<F>(session: &'s mut Session, seed: F) -> Self
    where
        F: FnOnce() -> Vec<TodoList>,
    {
        Self {
            todo_lists: session.todo_lists.get_or_insert_with(seed),
        }
    }

    fn find_todo_list(&self, todo_list_id: TodoListId) -> Option<&TodoList> {
        self.todo_lists
            .iter()
            .find(|todo_list| todo_list.id == todo_list_id)
    }

    fn find_todo_list_mut(&mut self, todo_list_id: TodoListId) -> Option<&mut TodoList> {
        self.todo_lists
            .iter_mut()
            .find(|todo_list| todo_list.id == todo_list_id)
    }

    fn find_todo_mut(&mut self, todo_list_id: TodoListId, todo_id: TodoId) -> Option<&mut Todo> {
        self.find_todo_list_mut(todo_list_id)?.find_todo_mut(todo_id)
    }
}

impl TodoRepository for SessionTodoRepository<'_> {
    fn load_todo_list(&self, todo_list_id: TodoListId) -> Option<TodoList> {
        self.find_todo_list(todo_list_id).cloned()
    }

    fn load_todo(&self, todo_list_id: TodoListId, todo_id: TodoId) -> Option<Todo> {
        self.find_todo_list(todo_list_id)?
            .find_todo(todo_id)
            .cloned()
    }

    fn toggle_todo(&mut self, todo_list_id: TodoListId, todo_id: TodoId) {
        if let Some(todo) = self.find_todo_mut(todo_list_id, todo_id) {
            todo.toggle();
        }
    }

    fn delete_todo_list(&mut self, todo_list_id: TodoListId) -> bool {
        let Some(index) = self
            .todo_lists
            .iter()
            .position(|todo_list| todo_list.id == todo_list_id)
        else {
            return false;
        };

        self.todo_lists.remove(index);
        true
    }

    fn delete_todo(&mut self, todo_list_id: TodoListId, todo_id: TodoId) -> bool {
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return false;
        };
        let Some(index) = todo_list.todos.iter().position(|todo| todo.id == todo_id) else {
            return false;
        };

        todo_list.todos.remove(index);
        true
    }

    fn complete_all_todos(&mut self, todo_list_id: TodoListId) -> bool {
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return false;
        };

        todo_list.todos.iter_mut().for_each(|todo| todo.done = true);
        true
    }

    fn add_todo_list(&mut self, title: &str) -> bool {
        self.todo_lists.push(TodoList::with_id(next_id(), title));
        true
    }

    fn add_todo(&mut self, todo_list_id: TodoListId, title: &str) -> bool {
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return false;
        };

        todo_list.todos.push(Todo::with_id(next_id(), title));
        true
    }

    fn sorted_todo_lists(&self) -> Vec<TodoList> {
        let (done, undone): (Vec<TodoList>, Vec<TodoList>) = self
            .todo_lists
            .iter()
            .cloned()
            .partition(|todo_list| self.is_done_todo_list(todo_list));
        sort_todo_lists(undone, done)
    }

    fn sorted_todos(&self, todo_list: &TodoList) -> Vec<Todo> {
        let (done, undone): (Vec<Todo>, Vec<Todo>) =
            todo_list.todos.iter().cloned().partition(|todo| todo.done);
        sort_todos(undone, done)
    }

    fn set_todo_list_title(&mut self, todo_list_id: TodoListId, title: &str) -> bool {
        let Some(todo_list) = self.find_todo_list_mut(todo_list_id) else {
            return false;
        };

        todo_list.title = title.to_string();
        true
    }

    fn exists_todo_list_title(&self, title: &str) -> bool {
        self.todo_lists
            .iter()
            .any(|todo_list| todo_list.title == title)
    }

    fn is_unique_constraint_violation(&self, _error: &RepoError) -> bool {
        false
    }
}
